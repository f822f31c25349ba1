//! Kinds of characteristic groups, ranked by nomenclature priority.
//!
//! The declaration order of [`Group`] *is* the priority order: the derived
//! [`Ord`] puts the group that wins the name suffix first. `Alkene` and
//! `Alkyne` never appear on a substituent; they are synthesized from the
//! unsaturation between backbone carbons. `Halogen` is only a menu category
//! offered by `available_substituents`; the concrete halogens carry their
//! own kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Group {
    /// `-C(=O)OH` counted on the terminal carbon itself.
    Acid,
    /// `-COOH` hanging from a carbon.
    Carboxyl,
    /// `-C(=O)NH2` counted on the terminal carbon itself.
    Amide,
    /// `-CONH2` hanging from a carbon.
    Carbamoyl,
    /// `-C≡N` counted on the terminal carbon itself.
    Nitrile,
    /// `-CN` hanging from a carbon.
    Cyanide,
    Aldehyde,
    Ketone,
    Alcohol,
    Amine,
    Alkene,
    Alkyne,
    Nitro,
    Halogen,
    Bromine,
    Chlorine,
    Fluorine,
    Iodine,
    /// A straight or two-way branched carbon side chain.
    Radical,
    Hydrogen,
}

impl Group {
    pub const ALL: [Group; 20] = [
        Group::Acid,
        Group::Carboxyl,
        Group::Amide,
        Group::Carbamoyl,
        Group::Nitrile,
        Group::Cyanide,
        Group::Aldehyde,
        Group::Ketone,
        Group::Alcohol,
        Group::Amine,
        Group::Alkene,
        Group::Alkyne,
        Group::Nitro,
        Group::Halogen,
        Group::Bromine,
        Group::Chlorine,
        Group::Fluorine,
        Group::Iodine,
        Group::Radical,
        Group::Hydrogen,
    ];

    pub fn is_halogen(self) -> bool {
        matches!(
            self,
            Group::Bromine | Group::Chlorine | Group::Fluorine | Group::Iodine
        )
    }

    /// Whether this kind stands for a carbon-carbon multiple bond.
    pub fn is_bond(self) -> bool {
        matches!(self, Group::Alkene | Group::Alkyne)
    }

    /// Lower-case English name, the inverse of [`Group::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Acid => "acid",
            Group::Carboxyl => "carboxyl",
            Group::Amide => "amide",
            Group::Carbamoyl => "carbamoyl",
            Group::Nitrile => "nitrile",
            Group::Cyanide => "cyanide",
            Group::Aldehyde => "aldehyde",
            Group::Ketone => "ketone",
            Group::Alcohol => "alcohol",
            Group::Amine => "amine",
            Group::Alkene => "alkene",
            Group::Alkyne => "alkyne",
            Group::Nitro => "nitro",
            Group::Halogen => "halogen",
            Group::Bromine => "bromine",
            Group::Chlorine => "chlorine",
            Group::Fluorine => "fluorine",
            Group::Iodine => "iodine",
            Group::Radical => "radical",
            Group::Hydrogen => "hydrogen",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ChainError::UnknownGroupName(s.to_string()))
    }
}
