//! Turning a finished skeleton into its systematic name.
//!
//! The pipeline is shared by every skeleton shape:
//!
//! 1. validate the skeleton is complete,
//! 2. discover its functions (distinct kinds in priority order),
//! 3. short-circuit fixed literal names,
//! 4. normalize by applying one rewrite at a time until none applies,
//! 5. pick the numbering direction,
//! 6. assemble prefixes, backbone stem, unsaturation and suffix.
//!
//! A shape plugs into the pipeline by implementing [`Skeleton`]. Every
//! rewrite must strictly decrease the shape's [`Skeleton::Measure`]; the
//! driver checks this and fails with [`ChainError::RewriteDiverged`]
//! instead of looping.

pub(crate) mod assemble;
pub(crate) mod correct;
mod locator;
pub mod numeral;
pub(crate) mod reorder;

use std::fmt;

use log::debug;

use crate::error::ChainError;
use crate::group::Group;
use crate::substituent::Substituent;

pub use correct::ChainMeasure;
pub use locator::{join_prefixes, Locator};
pub use numeral::{greek_prefix, multiplier, quantifier};

/// A skeleton shape the naming pipeline can run over.
pub trait Skeleton: Clone {
    /// Well-founded progress measure for normalization rewrites.
    type Measure: Ord + fmt::Debug;

    /// Reject skeletons that cannot be named yet.
    fn validate(&self) -> Result<(), ChainError>;

    /// Distinct kinds present, in priority order.
    fn functions(&self) -> Vec<Group>;

    /// A fixed name that bypasses the general rules.
    fn special_name(&self, _functions: &[Group]) -> Option<&'static str> {
        None
    }

    /// The first normalization rewrite that applies, if any.
    fn rewrite(&self, functions: &[Group]) -> Result<Option<Rewrite<Self>>, ChainError>;

    fn measure(&self, functions: &[Group]) -> Self::Measure;

    /// The numbering of this skeleton that the name is built from.
    fn reorient(&self, functions: &[Group]) -> Result<Self, ChainError>;

    fn assemble(&self, functions: &[Group]) -> Result<String, ChainError>;
}

/// One applied normalization step.
#[derive(Debug, Clone)]
pub struct Rewrite<S> {
    pub rule: &'static str,
    pub result: S,
}

/// Apply rewrites until none matches.
pub fn normalize<S: Skeleton>(mut skeleton: S) -> Result<S, ChainError> {
    loop {
        let functions = skeleton.functions();
        let Some(Rewrite { rule, result }) = skeleton.rewrite(&functions)? else {
            return Ok(skeleton);
        };
        let before = skeleton.measure(&functions);
        let after = result.measure(&result.functions());
        if after >= before {
            return Err(ChainError::RewriteDiverged { rule });
        }
        debug!("normalize: {rule} ({before:?} -> {after:?})");
        skeleton = result;
    }
}

/// Name `skeleton`, committing the normalized and reoriented form back into
/// it.
pub fn name<S: Skeleton>(skeleton: &mut S) -> Result<String, ChainError> {
    skeleton.validate()?;
    let functions = skeleton.functions();
    if let Some(literal) = skeleton.special_name(&functions) {
        return Ok(literal.to_string());
    }

    let normal = normalize(skeleton.clone())?;
    let functions = normal.functions();
    let oriented = normal.reorient(&functions)?;
    let name = oriented.assemble(&functions)?;
    *skeleton = oriented;
    Ok(name)
}

/// Word-final text for the principal group.
pub fn suffix_text(group: Group) -> Result<&'static str, ChainError> {
    match group {
        Group::Acid => Ok("oico"),
        Group::Amide => Ok("amida"),
        Group::Nitrile => Ok("nitrilo"),
        Group::Aldehyde => Ok("al"),
        Group::Ketone => Ok("ona"),
        Group::Alcohol => Ok("ol"),
        Group::Amine => Ok("amina"),
        other => Err(ChainError::UnknownFunction(other)),
    }
}

/// Text for a group named as a prefix.
pub fn prefix_text(group: Group) -> Result<&'static str, ChainError> {
    match group {
        Group::Carboxyl => Ok("carboxi"),
        Group::Carbamoyl => Ok("carbamoil"),
        Group::Cyanide => Ok("ciano"),
        Group::Ketone => Ok("oxo"),
        Group::Alcohol => Ok("hidroxi"),
        Group::Amine => Ok("amino"),
        Group::Nitro => Ok("nitro"),
        Group::Bromine => Ok("bromo"),
        Group::Chlorine => Ok("cloro"),
        Group::Fluorine => Ok("fluoro"),
        Group::Iodine => Ok("yodo"),
        other => Err(ChainError::UnknownFunction(other)),
    }
}

/// `metil`, `isopropil`, ...
pub fn radical_name(radical: &Substituent) -> Result<String, ChainError> {
    Ok(format!("{}il", radical_stem(radical)?))
}

/// The radical name without its `il` ending.
pub(crate) fn radical_stem(radical: &Substituent) -> Result<String, ChainError> {
    let stem = multiplier(usize::from(radical.carbons()))?;
    Ok(if radical.is_iso() {
        format!("iso{stem}")
    } else {
        stem
    })
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// First lower-case ASCII letter, skipping locants and hyphens.
pub(crate) fn first_letter(s: &str) -> Option<char> {
    s.chars().find(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_only_for_principal_groups() {
        assert_eq!(suffix_text(Group::Acid), Ok("oico"));
        assert_eq!(suffix_text(Group::Amine), Ok("amina"));
        for g in [Group::Nitro, Group::Chlorine, Group::Radical, Group::Cyanide] {
            assert_eq!(suffix_text(g), Err(ChainError::UnknownFunction(g)));
        }
    }

    #[test]
    fn prefixes_exclude_terminal_forms() {
        assert_eq!(prefix_text(Group::Iodine), Ok("yodo"));
        assert_eq!(prefix_text(Group::Ketone), Ok("oxo"));
        for g in [Group::Acid, Group::Amide, Group::Aldehyde, Group::Alkene] {
            assert_eq!(prefix_text(g), Err(ChainError::UnknownFunction(g)));
        }
    }

    #[test]
    fn radical_names() {
        let isobutyl = Substituent::radical(4, true).unwrap();
        assert_eq!(radical_name(&Substituent::METHYL).unwrap(), "metil");
        assert_eq!(radical_name(&isobutyl).unwrap(), "isobutil");
        assert_eq!(radical_stem(&isobutyl).unwrap(), "isobut");
    }

    #[test]
    fn letters() {
        assert_eq!(first_letter("2,3-diol"), Some('d'));
        assert_eq!(first_letter("-1-en"), Some('e'));
        assert_eq!(first_letter(""), None);
        assert!(is_vowel('o'));
        assert!(!is_vowel('n'));
    }
}
