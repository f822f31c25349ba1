//! Normalization rewrites for open chains.
//!
//! Each rule looks at one snapshot and either returns a rewritten copy or
//! nothing. Rules are tried in a fixed order and the first match wins; the
//! driver in [`crate::naming::normalize`] re-runs discovery and starts over.

use crate::carbon::Carbon;
use crate::chain::Chain;
use crate::error::ChainError;
use crate::group::Group;
use crate::naming::Rewrite;
use crate::substituent::Substituent;

type Rule = fn(&Chain, &[Group]) -> Result<Option<Chain>, ChainError>;

const RULES: [(&str, Rule); 6] = [
    ("branch promotion", promote_branch),
    ("acid collapse", collapse_acid),
    ("amide demotion", demote_amide),
    ("nitrile demotion", demote_nitrile),
    ("aldehyde promotion", promote_aldehyde),
    ("aldehyde demotion", demote_aldehyde),
];

/// Progress measure for chain rewrites, compared field by field.
///
/// Branch promotion shrinks `radical_carbons`; the other rules keep it and
/// shrink the first field they touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChainMeasure {
    /// Carbons held in radicals rather than in the backbone.
    pub radical_carbons: usize,
    /// Backbone ends carrying both a ketone and an alcohol.
    pub hydroxy_carbonyl_ends: usize,
    /// Amides and nitriles still counted on the backbone.
    pub terminal_nitrogen: usize,
    /// Aldehydes under a higher principal group, or ketone + hydrogen ends
    /// that should be aldehydes.
    pub misplaced_carbonyls: usize,
}

pub(crate) fn measure(chain: &Chain, functions: &[Group]) -> ChainMeasure {
    let ends = chain.ends();
    let at_ends = |a: &Substituent, b: &Substituent| {
        ends.iter()
            .filter(|&&i| chain.carbons()[i].contains(a) && chain.carbons()[i].contains(b))
            .count()
    };
    let count = |group: Group| chain.positions_of(group).len();

    let misplaced_carbonyls = match functions.first() {
        Some(top) if *top < Group::Aldehyde => count(Group::Aldehyde),
        _ => at_ends(&Substituent::KETONE, &Substituent::HYDROGEN),
    };

    ChainMeasure {
        radical_carbons: chain.radicals().map(|r| usize::from(r.carbons())).sum(),
        hydroxy_carbonyl_ends: at_ends(&Substituent::KETONE, &Substituent::ALCOHOL),
        terminal_nitrogen: count(Group::Amide) + count(Group::Nitrile),
        misplaced_carbonyls,
    }
}

pub(crate) fn rewrite(
    chain: &Chain,
    functions: &[Group],
) -> Result<Option<Rewrite<Chain>>, ChainError> {
    for (rule, apply) in RULES {
        if let Some(result) = apply(chain, functions)? {
            return Ok(Some(Rewrite { rule, result }));
        }
    }
    Ok(None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Absorb a radical into the backbone when it is longer than the stretch of
/// plain backbone on one side of its host.
///
/// The stretch that loses its place in the backbone becomes a radical on
/// the host instead, two-way branched when it carried a methyl next to its
/// far end.
fn promote_branch(chain: &Chain, functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    if !functions.contains(&Group::Radical) {
        return Ok(None);
    }
    let carbons = chain.carbons();
    let last = carbons.len() - 1;
    for (i, host) in carbons.iter().enumerate() {
        let Some(radical) = largest_radical(host) else {
            continue;
        };
        let reach = usize::from(radical.effective_length());
        let side = if reach > last - i && right_is_plain(carbons, i) {
            Side::Right
        } else if reach > i && left_is_plain(carbons, i) {
            Side::Left
        } else {
            continue;
        };
        return absorb(carbons, i, radical, side).map(Some);
    }
    Ok(None)
}

/// Longest radical on a carbon; on equal length the two-way branched one.
fn largest_radical(carbon: &Carbon) -> Option<Substituent> {
    let mut best: Option<Substituent> = None;
    for radical in carbon.radicals() {
        let replace = match best {
            None => true,
            Some(b) => {
                radical.effective_length() > b.effective_length()
                    || (radical.effective_length() == b.effective_length() && radical.is_iso())
            }
        };
        if replace {
            best = Some(*radical);
        }
    }
    best
}

fn has_lone_methyl(carbon: &Carbon) -> bool {
    carbon.substituents().len() == 2
        && carbon.contains(&Substituent::HYDROGEN)
        && carbon.contains(&Substituent::METHYL)
}

fn left_is_plain(carbons: &[Carbon], host: usize) -> bool {
    carbons[..host].iter().enumerate().all(|(k, c)| {
        c.free_bonds() == 0 && (c.is_only_hydrogen() || (k == 1 && has_lone_methyl(c)))
    })
}

fn right_is_plain(carbons: &[Carbon], host: usize) -> bool {
    let last = carbons.len() - 1;
    carbons[host].free_bonds() == 0
        && carbons[host + 1..].iter().enumerate().all(|(offset, c)| {
            let k = host + 1 + offset;
            c.free_bonds() == 0 && (c.is_only_hydrogen() || (k + 1 == last && has_lone_methyl(c)))
        })
}

/// Backbone carbons replacing `radical`, nearest to the host first.
fn appendix(radical: &Substituent) -> Result<Vec<Carbon>, ChainError> {
    let len = usize::from(radical.effective_length());
    let mut carbons = Vec::with_capacity(len);
    for k in 0..len {
        let (used, hydrogens) = if k + 1 < len { (2, 2) } else { (1, 3) };
        let mut carbon = Carbon::new(used)?;
        for _ in 0..hydrogens {
            carbon.add_substituent(Substituent::HYDROGEN)?;
        }
        carbons.push(carbon);
    }
    if radical.is_iso() {
        if let Some(fork) = len.checked_sub(2).and_then(|k| carbons.get_mut(k)) {
            fork.remove_substituent_restoring(&Substituent::HYDROGEN)?;
            fork.add_substituent(Substituent::METHYL)?;
        }
    }
    Ok(carbons)
}

fn absorb(
    carbons: &[Carbon],
    host_index: usize,
    radical: Substituent,
    side: Side,
) -> Result<Chain, ChainError> {
    let appendix = appendix(&radical)?;
    let cut = match side {
        Side::Left => &carbons[..host_index],
        Side::Right => &carbons[host_index + 1..],
    };
    let far = match side {
        Side::Left => cut.get(1),
        Side::Right => cut.len().checked_sub(2).and_then(|k| cut.get(k)),
    };
    let iso = cut.len() >= 2 && far.is_some_and(|c| c.contains(&Substituent::METHYL));

    let mut host = carbons[host_index].clone();
    let removed = host.remove_substituent(&radical);
    debug_assert!(removed, "host carries the radical it promotes");
    // shorter than the absorbed radical, so it fits its carbon count
    let cut_carbons = cut.len() as u16 + u16::from(iso);
    if cut_carbons > 0 {
        host.release_bond()?;
        host.add_substituent(Substituent::radical(cut_carbons, iso)?)?;
    }

    let mut backbone = Vec::with_capacity(carbons.len() + appendix.len());
    match side {
        Side::Right => {
            backbone.extend_from_slice(&carbons[..host_index]);
            backbone.push(host);
            backbone.extend(appendix);
        }
        Side::Left => {
            backbone.extend(appendix.into_iter().rev());
            backbone.push(host);
            backbone.extend_from_slice(&carbons[host_index + 1..]);
        }
    }
    Ok(Chain::from_carbons(backbone))
}

/// Replace `remove` on the first matching end carbon with `add`.
fn swap_at_ends(
    chain: &Chain,
    ends: impl IntoIterator<Item = usize>,
    remove: &[Substituent],
    add: &[Substituent],
) -> Result<Option<Chain>, ChainError> {
    for i in ends {
        if remove.iter().all(|s| chain.carbons()[i].contains(s)) {
            let mut carbons = chain.carbons().to_vec();
            let carbon = &mut carbons[i];
            for s in remove {
                carbon.remove_substituent_restoring(s)?;
            }
            for s in add {
                carbon.add_substituent(*s)?;
            }
            return Ok(Some(Chain::from_carbons(carbons)));
        }
    }
    Ok(None)
}

fn collapse_acid(chain: &Chain, _functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    swap_at_ends(
        chain,
        chain.ends(),
        &[Substituent::KETONE, Substituent::ALCOHOL],
        &[Substituent::ACID],
    )
}

/// Drop an end carbon carrying `terminal` and put `pendant` on its
/// neighbour, unless `terminal` is the principal group.
fn demote_terminal(
    chain: &Chain,
    functions: &[Group],
    terminal: Substituent,
    pendant: Substituent,
) -> Result<Option<Chain>, ChainError> {
    let len = chain.len();
    if functions.first() == Some(&terminal.group()) || len < 2 {
        return Ok(None);
    }
    let mut carbons = chain.carbons().to_vec();
    let (dropped, neighbour) = if carbons[0].contains(&terminal) {
        (0, 1)
    } else if carbons[len - 1].contains(&terminal) {
        (len - 1, len - 2)
    } else {
        return Ok(None);
    };
    carbons[neighbour].release_bond()?;
    carbons[neighbour].add_substituent(pendant)?;
    carbons.remove(dropped);
    Ok(Some(Chain::from_carbons(carbons)))
}

fn demote_amide(chain: &Chain, functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    demote_terminal(chain, functions, Substituent::AMIDE, Substituent::CARBAMOYL)
}

fn demote_nitrile(chain: &Chain, functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    demote_terminal(chain, functions, Substituent::NITRILE, Substituent::CYANIDE)
}

fn promote_aldehyde(chain: &Chain, functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    match functions.first() {
        Some(top) if *top >= Group::Aldehyde => swap_at_ends(
            chain,
            chain.ends(),
            &[Substituent::KETONE, Substituent::HYDROGEN],
            &[Substituent::ALDEHYDE],
        ),
        _ => Ok(None),
    }
}

fn demote_aldehyde(chain: &Chain, functions: &[Group]) -> Result<Option<Chain>, ChainError> {
    match functions.first() {
        Some(Group::Aldehyde) | None => Ok(None),
        Some(_) => swap_at_ends(
            chain,
            chain.ends().into_iter().rev(),
            &[Substituent::ALDEHYDE],
            &[Substituent::KETONE, Substituent::HYDROGEN],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::chain_of;
    use crate::naming::normalize;

    const H: Substituent = Substituent::HYDROGEN;

    fn normalized(chain: &Chain) -> Chain {
        normalize(chain.clone()).unwrap()
    }

    #[test]
    fn nothing_to_do_on_plain_alkane() {
        let chain = chain_of(&[&[H, H, H], &[H, H], &[H, H, H]]);
        assert!(rewrite(&chain, &chain.functions()).unwrap().is_none());
    }

    #[test]
    fn radical_on_end_extends_backbone() {
        let ethyl = Substituent::radical(2, false).unwrap();
        let chain = chain_of(&[&[H, H, ethyl], &[H, H, H]]);
        let done = normalized(&chain);
        assert_eq!(done.len(), 4);
        assert!(done.radicals().next().is_none());
        assert_eq!(done.formula().unwrap(), "CH3CH2CH2CH3");
    }

    #[test]
    fn long_branch_absorbs_the_shorter_side() {
        let pentyl = Substituent::radical(5, false).unwrap();
        let chain = chain_of(&[&[H, H, pentyl], &[H, H], &[H, H], &[H, H, H]]);
        let done = normalized(&chain);
        assert_eq!(done.len(), 9);
        assert_eq!(done.functions(), Vec::<Group>::new());
    }

    #[test]
    fn short_branch_stays() {
        let chain = chain_of(&[&[H, H, H], &[H, Substituent::METHYL], &[H, H, H]]);
        assert!(rewrite(&chain, &chain.functions()).unwrap().is_none());
    }

    #[test]
    fn displaced_side_becomes_a_radical() {
        // CH3-CH(C4H9)-CH2-CH3: butyl reaches past the right side
        let butyl = Substituent::radical(4, false).unwrap();
        let chain = chain_of(&[&[H, H, H], &[H, butyl], &[H, H], &[H, H, H]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.rule, "branch promotion");
        let host = &step.result.carbons()[1];
        assert!(host.contains(&Substituent::radical(2, false).unwrap()));
        assert_eq!(step.result.len(), 6);
    }

    #[test]
    fn iso_branch_keeps_its_fork() {
        // isobutyl on an end carbon becomes CH2-CH(CH3)-CH3
        let isobutyl = Substituent::radical(4, true).unwrap();
        let chain = chain_of(&[&[H, H, isobutyl], &[H, H, H]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.result.len(), 4);
        assert_eq!(step.result.positions_of(Group::Radical), vec![0, 2]);
        assert!(step.result.carbons()[2].contains(&Substituent::METHYL));

        let done = normalized(&chain);
        assert_eq!(done.len(), 5);
        assert_eq!(done.positions_of(Group::Radical), vec![3]);
    }

    #[test]
    fn methyl_next_to_far_end_makes_iso_radical() {
        // CH3-CH(CH3)-CH(C3H7)-CH2-CH2-CH3
        let propyl = Substituent::radical(3, false).unwrap();
        let chain = chain_of(&[
            &[H, H, H],
            &[H, Substituent::METHYL],
            &[H, propyl],
            &[H, H],
            &[H, H],
            &[H, H, H],
        ]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.result.len(), 7);
        assert!(step.result.carbons()[3].contains(&Substituent::radical(3, true).unwrap()));
        assert_eq!(step.result.radicals().count(), 1);
    }

    #[test]
    fn multiple_bond_blocks_promotion() {
        // CH2=C(C3H7)-CH2-CH2-CH3 keeps the double bond in the backbone
        let propyl = Substituent::radical(3, false).unwrap();
        let mut chain = Chain::new();
        chain.add_substituent(H).unwrap();
        chain.add_substituent(H).unwrap();
        chain.next_carbon().unwrap();
        chain.add_substituent(propyl).unwrap();
        for hydrogens in [2, 2, 3] {
            chain.next_carbon().unwrap();
            for _ in 0..hydrogens {
                chain.add_substituent(H).unwrap();
            }
        }
        assert!(rewrite(&chain, &chain.functions()).unwrap().is_none());

        let saturated = chain_of(&[&[H, H, H], &[H, propyl], &[H, H], &[H, H], &[H, H, H]]);
        let step = rewrite(&saturated, &saturated.functions()).unwrap().unwrap();
        assert_eq!(step.result.len(), 7);
    }

    #[test]
    fn ketone_and_alcohol_collapse_to_acid() {
        let chain = chain_of(&[&[H, H, H], &[Substituent::KETONE, Substituent::ALCOHOL]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.rule, "acid collapse");
        assert!(step.result.carbons()[1].contains(&Substituent::ACID));
        assert_eq!(step.result.carbons()[1].free_bonds(), 0);
    }

    #[test]
    fn amide_under_acid_becomes_carbamoyl() {
        let chain = chain_of(&[&[Substituent::ACID], &[H, H], &[Substituent::AMIDE]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.rule, "amide demotion");
        assert_eq!(step.result.len(), 2);
        assert!(step.result.carbons()[1].contains(&Substituent::CARBAMOYL));
        assert_eq!(step.result.carbons()[1].free_bonds(), 0);
    }

    #[test]
    fn principal_amide_stays() {
        let chain = chain_of(&[&[Substituent::AMIDE], &[H, H, H]]);
        assert!(rewrite(&chain, &chain.functions()).unwrap().is_none());
    }

    #[test]
    fn nitrile_under_amide_becomes_cyanide() {
        let chain = chain_of(&[&[Substituent::AMIDE], &[H, H], &[Substituent::NITRILE]]);
        let done = normalized(&chain);
        assert_eq!(done.functions(), vec![Group::Amide, Group::Cyanide]);
        assert_eq!(done.len(), 2);
    }

    #[test]
    fn terminal_ketone_with_hydrogen_becomes_aldehyde() {
        let chain = chain_of(&[&[H, H, H], &[H, Substituent::KETONE]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.rule, "aldehyde promotion");
        assert!(step.result.carbons()[1].contains(&Substituent::ALDEHYDE));
        assert_eq!(step.result.carbons()[1].substituents().len(), 1);
    }

    #[test]
    fn aldehyde_under_acid_becomes_ketone() {
        let chain = chain_of(&[&[Substituent::ACID], &[Substituent::ALDEHYDE]]);
        let step = rewrite(&chain, &chain.functions()).unwrap().unwrap();
        assert_eq!(step.rule, "aldehyde demotion");
        let last = &step.result.carbons()[1];
        assert!(last.contains(&Substituent::KETONE));
        assert!(last.contains(&H));
        assert_eq!(last.free_bonds(), 0);
    }

    #[test]
    fn every_rule_lowers_the_measure() {
        let chains = [
            chain_of(&[&[H, H, Substituent::radical(3, false).unwrap()], &[H, H, H]]),
            chain_of(&[&[H, H, H], &[Substituent::KETONE, Substituent::ALCOHOL]]),
            chain_of(&[&[Substituent::ACID], &[H, H], &[Substituent::NITRILE]]),
            chain_of(&[&[H, H, H], &[H, Substituent::KETONE]]),
            chain_of(&[&[Substituent::ACID], &[Substituent::ALDEHYDE]]),
        ];
        for chain in chains {
            let functions = chain.functions();
            let step = rewrite(&chain, &functions).unwrap().unwrap();
            let after = measure(&step.result, &step.result.functions());
            assert!(after < measure(&chain, &functions), "{}", step.rule);
        }
    }
}
