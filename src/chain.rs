//! Open carbon chains: the mutation API callers grow a molecule with, and
//! the position queries the naming engine reads.

use crate::carbon::Carbon;
use crate::error::ChainError;
use crate::formula::{condensed_formula, molecular_formula, FormulaStyle};
use crate::group::Group;
use crate::naming::{self, Rewrite, Skeleton};
use crate::substituent::Substituent;

/// An acyclic backbone, grown one carbon at a time.
///
/// Substituents are always attached to the last carbon. Free valence left on
/// a carbon when the next one is added becomes the bond order between them.
///
/// # Examples
///
/// ```
/// use nomencrab::{Chain, Substituent};
///
/// let mut chain = Chain::new();
/// for _ in 0..3 {
///     chain.add_substituent(Substituent::HYDROGEN).unwrap();
/// }
/// chain.next_carbon().unwrap();
/// chain.add_substituent(Substituent::HYDROGEN).unwrap();
/// chain.add_substituent(Substituent::HYDROGEN).unwrap();
/// chain.add_substituent(Substituent::ALCOHOL).unwrap();
///
/// assert!(chain.is_done());
/// assert_eq!(chain.formula().unwrap(), "CH3CH2(OH)");
/// assert_eq!(chain.name().unwrap(), "etanol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    carbons: Vec<Carbon>,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// A chain holding one carbon with all four bonds free.
    pub fn new() -> Self {
        Self {
            carbons: vec![Carbon::with_free_bonds(Carbon::VALENCE)],
        }
    }

    pub(crate) fn from_carbons(carbons: Vec<Carbon>) -> Self {
        Self { carbons }
    }

    /// Grow a chain from per-carbon substituent lists, linking each carbon
    /// to the next with whatever valence its list leaves free.
    ///
    /// ```
    /// use nomencrab::{Chain, Substituent};
    ///
    /// const H: Substituent = Substituent::HYDROGEN;
    /// let mut ethene = Chain::build(&[&[H, H], &[H, H]]).unwrap();
    /// assert_eq!(ethene.name().unwrap(), "eteno");
    /// ```
    pub fn build(carbons: &[&[Substituent]]) -> Result<Self, ChainError> {
        let mut chain = Chain::new();
        for (i, subs) in carbons.iter().enumerate() {
            if i > 0 {
                chain.next_carbon()?;
            }
            for sub in *subs {
                chain.add_substituent(*sub)?;
            }
        }
        Ok(chain)
    }

    pub fn carbons(&self) -> &[Carbon] {
        &self.carbons
    }

    pub fn len(&self) -> usize {
        self.carbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carbons.is_empty()
    }

    /// Free valence of the last carbon.
    pub fn free_bonds(&self) -> u8 {
        self.carbons.last().map_or(0, Carbon::free_bonds)
    }

    /// Whether the last carbon has no free valence left.
    pub fn is_done(&self) -> bool {
        self.free_bonds() == 0
    }

    /// Bond a new carbon to the last one.
    ///
    /// Every bond the last carbon still has free after the link goes into the
    /// new carbon-carbon bond: one free bond makes it double, two triple. A
    /// bare carbon cannot be extended because that bond would be quadruple.
    pub fn next_carbon(&mut self) -> Result<(), ChainError> {
        let last = self.carbons.last_mut().ok_or(ChainError::EmptyChain)?;
        if last.free_bonds() == Carbon::VALENCE {
            return Err(ChainError::ValenceExceeded {
                requested: Carbon::VALENCE,
                available: Carbon::VALENCE - 1,
            });
        }
        last.bond_carbon()?;
        let next = Carbon::new(last.free_bonds() + 1)?;
        self.carbons.push(next);
        Ok(())
    }

    /// Attach `sub` to the last carbon.
    pub fn add_substituent(&mut self, sub: Substituent) -> Result<(), ChainError> {
        self.carbons
            .last_mut()
            .ok_or(ChainError::EmptyChain)?
            .add_substituent(sub)
    }

    /// Kinds that still fit on the last carbon.
    pub fn available_substituents(&self) -> Vec<Group> {
        let free = self.free_bonds();
        let mut kinds = Vec::new();
        if free >= 1 {
            kinds.extend([
                Group::Hydrogen,
                Group::Radical,
                Group::Halogen,
                Group::Nitro,
                Group::Amine,
                Group::Alcohol,
            ]);
        }
        if free >= 2 {
            kinds.push(Group::Ketone);
        }
        if free >= 3 {
            kinds.extend([Group::Aldehyde, Group::Nitrile, Group::Amide, Group::Acid]);
        }
        kinds
    }

    /// Condensed formula without bond markers.
    pub fn formula(&self) -> Result<String, ChainError> {
        self.formula_with(FormulaStyle::default())
    }

    pub fn formula_with(&self, style: FormulaStyle) -> Result<String, ChainError> {
        if self.carbons.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(condensed_formula(&self.carbons, style))
    }

    /// Hill-system molecular formula, e.g. `C2H6O` for ethanol.
    pub fn molecular_formula(&self) -> Result<String, ChainError> {
        if self.carbons.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(molecular_formula(&self.carbons))
    }

    /// Name the chain.
    ///
    /// Normalization and reorientation are committed: afterwards the chain
    /// holds the backbone the name describes, and naming it again returns
    /// the same string.
    pub fn name(&mut self) -> Result<String, ChainError> {
        naming::name(self)
    }

    /// The same molecule numbered from the other end, rebuilt by replaying
    /// the carbons backwards through [`Chain::next_carbon`].
    pub fn reversed(&self) -> Result<Self, ChainError> {
        let mut out = Chain::new();
        for (i, carbon) in self.carbons.iter().rev().enumerate() {
            if i > 0 {
                out.next_carbon()?;
            }
            for sub in carbon.substituents() {
                out.add_substituent(*sub)?;
            }
        }
        Ok(out)
    }

    /// Distinct non-hydrogen kinds present, plus `Alkene`/`Alkyne` for any
    /// double or triple backbone bond, in priority order.
    pub fn functions(&self) -> Vec<Group> {
        let mut found: Vec<Group> = Vec::new();
        for (i, carbon) in self.carbons.iter().enumerate() {
            for sub in carbon.substituents() {
                if sub.group() != Group::Hydrogen && !found.contains(&sub.group()) {
                    found.push(sub.group());
                }
            }
            if let Some(bond) = self.bond_after(i) {
                if !found.contains(&bond) {
                    found.push(bond);
                }
            }
        }
        found.sort();
        found
    }

    /// 0-based positions of a kind, once per occurrence. For `Alkene` and
    /// `Alkyne` these are the carbons whose bond to the next one is double
    /// or triple.
    pub fn positions_of(&self, group: Group) -> Vec<usize> {
        let mut positions = Vec::new();
        for (i, carbon) in self.carbons.iter().enumerate() {
            if group.is_bond() {
                if self.bond_after(i) == Some(group) {
                    positions.push(i);
                }
            } else {
                positions.extend(std::iter::repeat(i).take(carbon.count_of(group)));
            }
        }
        positions
    }

    /// Multiple bond between carbon `i` and the next one. Free valence on
    /// the last carbon is still open, not a backbone bond.
    fn bond_after(&self, i: usize) -> Option<Group> {
        if i + 1 >= self.carbons.len() {
            return None;
        }
        match self.carbons[i].free_bonds() {
            1 => Some(Group::Alkene),
            2 => Some(Group::Alkyne),
            _ => None,
        }
    }

    pub(crate) fn positions_of_substituent(&self, sub: &Substituent) -> Vec<usize> {
        self.carbons
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                let count = c.substituents().iter().filter(|s| *s == sub).count();
                std::iter::repeat(i).take(count)
            })
            .collect()
    }

    /// Distinct substituents, hydrogen included, in backbone order.
    pub(crate) fn unique_substituents(&self) -> Vec<Substituent> {
        let mut unique: Vec<Substituent> = Vec::new();
        for sub in self.carbons.iter().flat_map(|c| c.substituents()) {
            if !unique.contains(sub) {
                unique.push(*sub);
            }
        }
        unique
    }

    /// Every radical in backbone order, repeats included.
    pub(crate) fn radicals(&self) -> impl Iterator<Item = &Substituent> + '_ {
        self.carbons.iter().flat_map(|c| c.radicals())
    }

    pub(crate) fn non_hydrogen_count(&self) -> usize {
        self.carbons
            .iter()
            .flat_map(|c| c.substituents())
            .filter(|s| s.group() != Group::Hydrogen)
            .count()
    }

    /// Indices of the backbone ends, first then last.
    pub(crate) fn ends(&self) -> Vec<usize> {
        match self.carbons.len() {
            0 => Vec::new(),
            1 => vec![0],
            n => vec![0, n - 1],
        }
    }
}

#[cfg(test)]
pub(crate) fn chain_of(carbons: &[&[Substituent]]) -> Chain {
    Chain::build(carbons).unwrap()
}

impl Skeleton for Chain {
    type Measure = naming::ChainMeasure;

    fn validate(&self) -> Result<(), ChainError> {
        match self.carbons.last() {
            None => Err(ChainError::EmptyChain),
            Some(last) if last.free_bonds() > 0 => Err(ChainError::Unfinished {
                free_bonds: last.free_bonds(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn functions(&self) -> Vec<Group> {
        Chain::functions(self)
    }

    fn special_name(&self, functions: &[Group]) -> Option<&'static str> {
        (self.carbons.len() == 1 && functions == [Group::Ketone]).then_some("dióxido de carbono")
    }

    fn rewrite(&self, functions: &[Group]) -> Result<Option<Rewrite<Self>>, ChainError> {
        naming::correct::rewrite(self, functions)
    }

    fn measure(&self, functions: &[Group]) -> Self::Measure {
        naming::correct::measure(self, functions)
    }

    fn reorient(&self, functions: &[Group]) -> Result<Self, ChainError> {
        naming::reorder::reorient(self, functions)
    }

    fn assemble(&self, functions: &[Group]) -> Result<String, ChainError> {
        naming::assemble::assemble(self, functions)
    }
}
