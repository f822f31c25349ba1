//! Condensed structural formulas and Hill-system molecular formulas.
//!
//! [`condensed_formula`] concatenates one fragment per backbone carbon
//! (`CH3CH2(OH)`), optionally with bond markers between carbons.
//! [`molecular_formula`] counts atoms into a Hill system string (`C2H6O`).

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::carbon::Carbon;
use crate::group::Group;
use crate::substituent::Substituent;

/// How backbone bonds are shown in a condensed formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaStyle {
    /// Fragments are concatenated with no bond markers.
    #[default]
    Condensed,
    /// `-`, `=` or `≡` between carbons, plus a trailing marker for the bond
    /// still open on an unfinished last carbon.
    Bonded,
}

/// Render a whole backbone, left to right.
pub fn condensed_formula(carbons: &[Carbon], style: FormulaStyle) -> String {
    let mut out = String::new();
    let mut previous: Option<&Carbon> = None;
    for carbon in carbons {
        if let (FormulaStyle::Bonded, Some(prev)) = (style, previous) {
            out.push_str(bond_symbol(prev.free_bonds()));
        }
        out.push_str(&carbon_fragment(carbon));
        previous = Some(carbon);
    }
    if style == FormulaStyle::Bonded {
        if let Some(last) = carbons.last() {
            if (1..Carbon::VALENCE).contains(&last.free_bonds()) {
                out.push_str(bond_symbol(last.free_bonds() - 1));
            }
        }
    }
    out
}

fn bond_symbol(free_bonds: u8) -> &'static str {
    match free_bonds {
        0 => "-",
        1 => "=",
        _ => "≡",
    }
}

/// Render one carbon: `C`, its hydrogens, then the other groups in priority
/// order, identical groups collapsed with a count.
pub(crate) fn carbon_fragment(carbon: &Carbon) -> String {
    let mut out = String::from("C");
    let hydrogens = carbon.count_of(Group::Hydrogen);
    if hydrogens > 0 {
        out.push('H');
        push_count(&mut out, hydrogens);
    }

    let mut others: Vec<&Substituent> = carbon
        .substituents()
        .iter()
        .filter(|s| s.group() != Group::Hydrogen)
        .collect();
    others.sort_by_key(|s| s.group());

    let mut grouped: Vec<(&Substituent, usize)> = Vec::new();
    for sub in others {
        match grouped.iter_mut().find(|(seen, _)| *seen == sub) {
            Some((_, count)) => *count += 1,
            None => grouped.push((sub, 1)),
        }
    }

    match grouped.as_slice() {
        [] => {}
        [(sub, count)] if sub.group() == Group::Radical => {
            write!(out, "({})", radical_formula(sub)).unwrap();
            push_count(&mut out, *count);
        }
        [(sub, count)] => {
            let text = group_formula(sub.group());
            if *count == 1 && hydrogens == 0 {
                out.push_str(text);
            } else if text.len() != 1 && !sub.group().is_halogen() {
                write!(out, "({text})").unwrap();
                push_count(&mut out, *count);
            } else {
                out.push_str(text);
                push_count(&mut out, *count);
            }
        }
        many => {
            for (sub, count) in many {
                if sub.bonds() > 1 {
                    out.push_str(group_formula(sub.group()));
                } else if sub.group() == Group::Radical {
                    write!(out, "({})", radical_formula(sub)).unwrap();
                    push_count(&mut out, *count);
                } else {
                    write!(out, "({})", group_formula(sub.group())).unwrap();
                    push_count(&mut out, *count);
                }
            }
        }
    }
    out
}

fn push_count(buf: &mut String, count: usize) {
    if count != 1 {
        write!(buf, "{count}").unwrap();
    }
}

/// Atoms a group adds after its carbon symbol. Terminal kinds (acid, amide,
/// nitrile, aldehyde) share their carbon with the backbone.
fn group_formula(group: Group) -> &'static str {
    match group {
        Group::Acid => "OOH",
        Group::Carboxyl => "COOH",
        Group::Amide => "ONH2",
        Group::Carbamoyl => "CONH2",
        Group::Nitrile => "N",
        Group::Cyanide => "CN",
        Group::Aldehyde => "HO",
        Group::Ketone => "O",
        Group::Alcohol => "OH",
        Group::Amine => "NH2",
        Group::Nitro => "NO2",
        Group::Bromine => "Br",
        Group::Chlorine => "Cl",
        Group::Fluorine => "F",
        Group::Iodine => "I",
        Group::Hydrogen => "H",
        // never carried by a substituent
        Group::Alkene | Group::Alkyne | Group::Halogen | Group::Radical => "",
    }
}

/// `CH2CH2CH3` for propyl, `CH2CH(CH3)2` for isobutyl.
fn radical_formula(radical: &Substituent) -> String {
    let n = usize::from(radical.carbons());
    if radical.is_iso() {
        format!("{}CH(CH3)2", "CH2".repeat(n.saturating_sub(3)))
    } else {
        format!("{}CH3", "CH2".repeat(n.saturating_sub(1)))
    }
}

/// Atom counts contributed by one substituent.
fn substituent_atoms(sub: &Substituent) -> Vec<(&'static str, u32)> {
    match sub.group() {
        Group::Acid => vec![("O", 2), ("H", 1)],
        Group::Carboxyl => vec![("C", 1), ("O", 2), ("H", 1)],
        Group::Amide => vec![("O", 1), ("N", 1), ("H", 2)],
        Group::Carbamoyl => vec![("C", 1), ("O", 1), ("N", 1), ("H", 2)],
        Group::Nitrile => vec![("N", 1)],
        Group::Cyanide => vec![("C", 1), ("N", 1)],
        Group::Aldehyde => vec![("H", 1), ("O", 1)],
        Group::Ketone => vec![("O", 1)],
        Group::Alcohol => vec![("O", 1), ("H", 1)],
        Group::Amine => vec![("N", 1), ("H", 2)],
        Group::Nitro => vec![("N", 1), ("O", 2)],
        Group::Bromine => vec![("Br", 1)],
        Group::Chlorine => vec![("Cl", 1)],
        Group::Fluorine => vec![("F", 1)],
        Group::Iodine => vec![("I", 1)],
        Group::Hydrogen => vec![("H", 1)],
        Group::Radical => {
            let n = u32::from(sub.carbons());
            vec![("C", n), ("H", 2 * n + 1)]
        }
        Group::Alkene | Group::Alkyne | Group::Halogen => Vec::new(),
    }
}

/// Count every atom of a skeleton by element symbol.
///
/// Free valence is not filled with implicit hydrogens: an unfinished
/// skeleton counts only what has been attached.
pub fn element_counts(carbons: &[Carbon]) -> BTreeMap<&'static str, u32> {
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    for carbon in carbons {
        *counts.entry("C").or_default() += 1;
        for sub in carbon.substituents() {
            for (symbol, n) in substituent_atoms(sub) {
                *counts.entry(symbol).or_default() += n;
            }
        }
    }
    counts
}

/// Compute the molecular formula as a Hill system string.
///
/// C first, then H, then the remaining elements alphabetically.
pub fn molecular_formula(carbons: &[Carbon]) -> String {
    let mut counts = element_counts(carbons);
    let mut result = String::new();

    if let Some(c) = counts.remove("C") {
        append_element(&mut result, "C", c);
        if let Some(h) = counts.remove("H") {
            append_element(&mut result, "H", h);
        }
    }

    for (sym, count) in &counts {
        append_element(&mut result, sym, *count);
    }

    result
}

fn append_element(buf: &mut String, symbol: &str, count: u32) {
    buf.push_str(symbol);
    if count > 1 {
        write!(buf, "{count}").unwrap();
    }
}
