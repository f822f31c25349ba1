use crate::chain::Chain;
use crate::error::ChainError;
use crate::group::Group;
use crate::naming::locator::{join_prefixes, Locator};
use crate::naming::numeral::multiplier;
use crate::naming::{first_letter, is_vowel, prefix_text, radical_name, suffix_text};
use crate::substituent::valence_cost;

/// Whether locants for `function` carry no information on this chain.
pub(crate) fn is_redundant(
    chain: &Chain,
    functions: &[Group],
    function: Group,
) -> Result<bool, ChainError> {
    match chain.len() {
        1 => Ok(true),
        2 => {
            if chain.non_hydrogen_count() == 1
                || function.is_bond()
                || functions.contains(&Group::Alkyne)
            {
                return Ok(true);
            }
            let groups: Vec<Group> = functions.iter().copied().filter(|f| !f.is_bond()).collect();
            if let [a, b] = groups[..] {
                // what does not fit on one carbon must sit on both
                let cost = valence_cost(a)? + valence_cost(b)?;
                if cost > 3 || (cost > 1 && functions.contains(&Group::Alkene)) {
                    return Ok(true);
                }
                if functions.first() == Some(&function) {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        3 => Ok(
            (function == Group::Ketone && functions.first().is_some_and(|f| *f >= Group::Aldehyde))
                || (functions.len() == 1 && function.is_bond()),
        ),
        _ => Ok(false),
    }
}

fn takes_suffix(group: Group) -> bool {
    !(group.is_halogen()
        || matches!(
            group,
            Group::Nitro | Group::Radical | Group::Alkene | Group::Alkyne
        ))
}

fn suffix_for(chain: &Chain, functions: &[Group], function: Group) -> Result<String, ChainError> {
    let text = suffix_text(function)?;
    let positions = chain.positions_of(function);
    if valence_cost(function)? == 3 || is_redundant(chain, functions, function)? {
        Ok(Locator::counted(positions.len(), text)?.to_string())
    } else {
        Ok(Locator::at(&positions, text)?.to_string())
    }
}

fn prefix_for(chain: &Chain, functions: &[Group], function: Group) -> Result<Locator, ChainError> {
    let text = prefix_text(function)?;
    let positions = chain.positions_of(function);
    if is_redundant(chain, functions, function)? {
        Locator::counted(positions.len(), text)
    } else if function.is_halogen() && chain.unique_substituents().len() == 1 {
        Ok(Locator::new("", "per", text))
    } else {
        Locator::at(&positions, text)
    }
}

/// `en`/`in` fragment for double and triple bonds, or `an` when saturated.
fn bond_fragment(chain: &Chain, functions: &[Group]) -> Result<String, ChainError> {
    let mut bonds = String::new();
    for (group, text) in [(Group::Alkene, "en"), (Group::Alkyne, "in")] {
        let positions = chain.positions_of(group);
        if positions.is_empty() {
            continue;
        }
        let locator = if is_redundant(chain, functions, group)? {
            Locator::counted(positions.len(), text)?
        } else {
            Locator::at(&positions, text)?
        };
        let rendered = locator.to_string();
        if rendered.starts_with(|c: char| c.is_ascii_digit()) {
            bonds.push('-');
        }
        bonds.push_str(&rendered);
    }
    if bonds.is_empty() {
        bonds.push_str("an");
    }
    Ok(bonds)
}

pub(crate) fn assemble(chain: &Chain, functions: &[Group]) -> Result<String, ChainError> {
    let (suffix, rest) = match functions.split_first() {
        Some((&top, rest)) if takes_suffix(top) => (suffix_for(chain, functions, top)?, rest),
        _ => (String::new(), functions),
    };

    let mut prefixes = Vec::new();
    for &function in rest {
        if function.is_bond() || function == Group::Radical {
            continue;
        }
        prefixes.push(prefix_for(chain, functions, function)?);
    }
    for radical in chain
        .unique_substituents()
        .iter()
        .filter(|s| s.group() == Group::Radical)
    {
        let positions = chain.positions_of_substituent(radical);
        prefixes.push(Locator::at(&positions, &radical_name(radical)?)?);
    }

    let mut name = String::new();
    if functions.contains(&Group::Acid) {
        name.push_str("ácido ");
    }
    name.push_str(&join_prefixes(prefixes));

    let mut bonds = bond_fragment(chain, functions)?;
    if !first_letter(&suffix).is_some_and(is_vowel) {
        bonds.push('o');
    }
    if suffix.starts_with(|c: char| c.is_ascii_digit()) {
        bonds.push('-');
    }

    name.push_str(&multiplier(chain.len())?);
    if !first_letter(&bonds).is_some_and(is_vowel) {
        name.push('a');
    }
    name.push_str(&bonds);
    name.push_str(&suffix);
    Ok(name)
}
