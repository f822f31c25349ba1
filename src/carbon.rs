use std::fmt;

use crate::error::ChainError;
use crate::group::Group;
use crate::substituent::Substituent;

/// One skeleton carbon: its free valence and the substituents hanging from it.
///
/// Position is implicit (the index in the owning skeleton). In an open chain
/// the free bonds left on every carbon but the last encode the multiple bond
/// towards the next carbon: one free bond is a double bond, two a triple.
///
/// # Examples
///
/// ```
/// use nomencrab::{Carbon, Substituent};
///
/// let mut c = Carbon::new(1).unwrap();
/// c.add_substituent(Substituent::HYDROGEN).unwrap();
/// c.add_substituent(Substituent::ALCOHOL).unwrap();
/// assert_eq!(c.free_bonds(), 1);
/// assert_eq!(c.to_string(), "CH(OH)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carbon {
    substituents: Vec<Substituent>,
    free_bonds: u8,
}

impl Carbon {
    pub const VALENCE: u8 = 4;

    /// A bare carbon with `used_bonds` already taken by neighbouring carbons.
    pub fn new(used_bonds: u8) -> Result<Self, ChainError> {
        let free_bonds =
            Self::VALENCE
                .checked_sub(used_bonds)
                .ok_or(ChainError::ValenceExceeded {
                    requested: used_bonds,
                    available: Self::VALENCE,
                })?;
        Ok(Self {
            substituents: Vec::new(),
            free_bonds,
        })
    }

    /// A bare carbon with `free_bonds` left, at most [`Carbon::VALENCE`].
    pub(crate) fn with_free_bonds(free_bonds: u8) -> Self {
        Self {
            substituents: Vec::new(),
            free_bonds: free_bonds.min(Self::VALENCE),
        }
    }

    pub fn free_bonds(&self) -> u8 {
        self.free_bonds
    }

    pub fn substituents(&self) -> &[Substituent] {
        &self.substituents
    }

    pub fn add_substituent(&mut self, sub: Substituent) -> Result<(), ChainError> {
        self.take_bonds(sub.bonds())?;
        self.substituents.push(sub);
        Ok(())
    }

    /// Consume one bond for a carbon-carbon link.
    pub(crate) fn bond_carbon(&mut self) -> Result<(), ChainError> {
        self.take_bonds(1)
    }

    /// Give back one bond previously used by a carbon-carbon link.
    pub(crate) fn release_bond(&mut self) -> Result<(), ChainError> {
        self.give_bonds(1)
    }

    /// Remove the first substituent equal to `sub` without touching valence:
    /// the freed bond is about to be reused by whatever replaces it.
    pub(crate) fn remove_substituent(&mut self, sub: &Substituent) -> bool {
        match self.substituents.iter().position(|s| s == sub) {
            Some(i) => {
                self.substituents.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove the first substituent equal to `sub` and free its bonds.
    pub(crate) fn remove_substituent_restoring(
        &mut self,
        sub: &Substituent,
    ) -> Result<bool, ChainError> {
        if self.remove_substituent(sub) {
            self.give_bonds(sub.bonds())?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn is_bonded_to(&self, group: Group) -> bool {
        self.substituents.iter().any(|s| s.group() == group)
    }

    pub fn contains(&self, sub: &Substituent) -> bool {
        self.substituents.contains(sub)
    }

    pub fn count_of(&self, group: Group) -> usize {
        self.substituents
            .iter()
            .filter(|s| s.group() == group)
            .count()
    }

    pub fn radicals(&self) -> impl Iterator<Item = &Substituent> + '_ {
        self.substituents
            .iter()
            .filter(|s| s.group() == Group::Radical)
    }

    /// Whether every attached substituent is a hydrogen.
    pub fn is_only_hydrogen(&self) -> bool {
        self.substituents
            .iter()
            .all(|s| s.group() == Group::Hydrogen)
    }

    fn take_bonds(&mut self, n: u8) -> Result<(), ChainError> {
        self.free_bonds =
            self.free_bonds
                .checked_sub(n)
                .ok_or(ChainError::ValenceExceeded {
                    requested: n,
                    available: self.free_bonds,
                })?;
        Ok(())
    }

    fn give_bonds(&mut self, n: u8) -> Result<(), ChainError> {
        match self.free_bonds.checked_add(n) {
            Some(free) if free <= Self::VALENCE => {
                self.free_bonds = free;
                Ok(())
            }
            _ => Err(ChainError::ValenceOverflow),
        }
    }
}

impl fmt::Display for Carbon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formula::carbon_fragment(self))
    }
}
