use crate::error::ChainError;
use crate::group::Group;

/// One group or side chain attached to a backbone carbon.
///
/// `bonds` is the valence the substituent consumes on its carbon. Only
/// radicals carry a carbon count and a shape flag: `iso` marks a chain that
/// forks into two terminal methyls at its far end.
///
/// ```text
/// =O                  ketone   { bonds: 2 }
/// -CH2-CH2-CH3        propyl   { carbons: 3, iso: false }
/// -CH2-CH2-CH(CH3)2   isopentyl { carbons: 5, iso: true }
/// ```
///
/// # Examples
///
/// ```
/// use nomencrab::{Group, Substituent};
///
/// let ketone = Substituent::of(Group::Ketone).unwrap();
/// assert_eq!(ketone.bonds(), 2);
///
/// let propyl = Substituent::radical(3, false).unwrap();
/// assert_eq!(propyl.group(), Group::Radical);
/// assert_eq!(propyl.carbons(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Substituent {
    group: Group,
    bonds: u8,
    carbons: u16,
    iso: bool,
}

impl Substituent {
    pub const ACID: Self = Self::group_with_bonds(Group::Acid, 3);
    pub const CARBOXYL: Self = Self::group_with_bonds(Group::Carboxyl, 1);
    pub const AMIDE: Self = Self::group_with_bonds(Group::Amide, 3);
    pub const CARBAMOYL: Self = Self::group_with_bonds(Group::Carbamoyl, 1);
    pub const NITRILE: Self = Self::group_with_bonds(Group::Nitrile, 3);
    pub const CYANIDE: Self = Self::group_with_bonds(Group::Cyanide, 1);
    pub const ALDEHYDE: Self = Self::group_with_bonds(Group::Aldehyde, 3);
    pub const KETONE: Self = Self::group_with_bonds(Group::Ketone, 2);
    pub const ALCOHOL: Self = Self::group_with_bonds(Group::Alcohol, 1);
    pub const AMINE: Self = Self::group_with_bonds(Group::Amine, 1);
    pub const NITRO: Self = Self::group_with_bonds(Group::Nitro, 1);
    pub const BROMINE: Self = Self::group_with_bonds(Group::Bromine, 1);
    pub const CHLORINE: Self = Self::group_with_bonds(Group::Chlorine, 1);
    pub const FLUORINE: Self = Self::group_with_bonds(Group::Fluorine, 1);
    pub const IODINE: Self = Self::group_with_bonds(Group::Iodine, 1);
    pub const HYDROGEN: Self = Self::group_with_bonds(Group::Hydrogen, 1);

    pub const METHYL: Self = Self {
        group: Group::Radical,
        bonds: 1,
        carbons: 1,
        iso: false,
    };

    const fn group_with_bonds(group: Group, bonds: u8) -> Self {
        Self {
            group,
            bonds,
            carbons: 0,
            iso: false,
        }
    }

    /// The canonical instance of a non-radical kind, looked up in [`registry`].
    pub fn of(group: Group) -> Result<Self, ChainError> {
        REGISTRY
            .iter()
            .find(|s| s.group == group)
            .copied()
            .ok_or(ChainError::UnknownFunction(group))
    }

    /// A side chain of `carbons` carbons, two-way branched at its end when `iso`.
    pub fn radical(carbons: u16, iso: bool) -> Result<Self, ChainError> {
        if carbons == 0 || (iso && carbons < 3) {
            return Err(ChainError::InvalidRadical { carbons, iso });
        }
        Ok(Self {
            group: Group::Radical,
            bonds: 1,
            carbons,
            iso,
        })
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn bonds(&self) -> u8 {
        self.bonds
    }

    pub fn carbons(&self) -> u16 {
        self.carbons
    }

    pub fn is_iso(&self) -> bool {
        self.iso
    }

    /// Carbon count used when comparing radical lengths: a fork shortens the
    /// straight run by one.
    pub(crate) fn effective_length(&self) -> u16 {
        self.carbons - u16::from(self.iso)
    }
}

static REGISTRY: [Substituent; 16] = [
    Substituent::ACID,
    Substituent::CARBOXYL,
    Substituent::AMIDE,
    Substituent::CARBAMOYL,
    Substituent::NITRILE,
    Substituent::CYANIDE,
    Substituent::ALDEHYDE,
    Substituent::KETONE,
    Substituent::ALCOHOL,
    Substituent::AMINE,
    Substituent::NITRO,
    Substituent::BROMINE,
    Substituent::CHLORINE,
    Substituent::FLUORINE,
    Substituent::IODINE,
    Substituent::HYDROGEN,
];

/// Canonical instances of every non-radical kind, in priority order.
pub fn registry() -> &'static [Substituent] {
    &REGISTRY
}

/// Valence a kind consumes on its carbon. Radicals always take one bond.
pub(crate) fn valence_cost(group: Group) -> Result<u8, ChainError> {
    match group {
        Group::Radical => Ok(1),
        _ => Substituent::of(group).map(|s| s.bonds),
    }
}
