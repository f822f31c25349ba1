//! A benzene ring with substituents, named through the same engine as open
//! chains.
//!
//! The ring has no normalization rewrites. Numbering picks, among the twelve
//! rotations and reflections of the ring, the one with the lowest locant set
//! (ties go to the alphabetically first substituent). Two substituents are
//! named with `o-`, `m-` or `p-`.

use crate::carbon::Carbon;
use crate::error::ChainError;
use crate::formula::{carbon_fragment, molecular_formula};
use crate::group::Group;
use crate::naming::{self, join_prefixes, prefix_text, radical_name, Locator, Rewrite, Skeleton};
use crate::substituent::Substituent;

const RING: usize = 6;

const PRINCIPAL: [Group; 3] = [Group::Cyanide, Group::Carbamoyl, Group::Carboxyl];

/// Six aromatic carbons, each with one bond left for a substituent.
///
/// # Examples
///
/// ```
/// use nomencrab::{Benzene, Substituent};
///
/// let mut ring = Benzene::new();
/// for i in 0..6 {
///     let sub = if i == 0 || i == 2 {
///         Substituent::CHLORINE
///     } else {
///         Substituent::HYDROGEN
///     };
///     ring.add_substituent(i, sub).unwrap();
/// }
/// assert_eq!(ring.name().unwrap(), "m-diclorobenceno");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benzene {
    carbons: Vec<Carbon>,
}

impl Default for Benzene {
    fn default() -> Self {
        Self::new()
    }
}

impl Benzene {
    pub fn new() -> Self {
        // two ring neighbours and the aromatic bond leave one free
        Self {
            carbons: vec![Carbon::with_free_bonds(1); RING],
        }
    }

    pub fn carbons(&self) -> &[Carbon] {
        &self.carbons
    }

    fn carbon_mut(&mut self, index: usize) -> Result<&mut Carbon, ChainError> {
        self.carbons
            .get_mut(index)
            .ok_or(ChainError::PositionOutOfRange { index, len: RING })
    }

    pub fn add_substituent(&mut self, index: usize, sub: Substituent) -> Result<(), ChainError> {
        self.carbon_mut(index)?.add_substituent(sub)
    }

    pub fn free_bonds(&self, index: usize) -> Result<u8, ChainError> {
        self.carbons
            .get(index)
            .map(Carbon::free_bonds)
            .ok_or(ChainError::PositionOutOfRange { index, len: RING })
    }

    /// Kinds a ring position can take. The principal groups are offered only
    /// until one of them is on the ring.
    pub fn available_substituents(&self) -> Vec<Group> {
        let mut kinds = vec![
            Group::Hydrogen,
            Group::Radical,
            Group::Halogen,
            Group::Nitro,
            Group::Amine,
            Group::Alcohol,
        ];
        let has_principal = self
            .carbons
            .iter()
            .any(|c| PRINCIPAL.iter().any(|g| c.is_bonded_to(*g)));
        if !has_principal {
            kinds.extend(PRINCIPAL);
        }
        kinds
    }

    /// Ring formula between `~` marks, alternating `=` and `-`, with `C*`
    /// for empty positions.
    pub fn formula(&self) -> String {
        let mut out = String::from("~");
        for (i, carbon) in self.carbons.iter().enumerate() {
            if i > 0 {
                out.push(if i % 2 == 1 { '=' } else { '-' });
            }
            if carbon.substituents().is_empty() {
                out.push_str("C*");
                continue;
            }
            let fragment = carbon_fragment(carbon);
            match fragment.as_bytes().get(1) {
                Some(b'H' | b'(') => out.push_str(&fragment),
                _ => {
                    out.push_str("C(");
                    out.push_str(&fragment[1..]);
                    out.push(')');
                }
            }
        }
        out.push('~');
        out
    }

    pub fn molecular_formula(&self) -> String {
        molecular_formula(&self.carbons)
    }

    /// Name the ring, committing the chosen numbering.
    pub fn name(&mut self) -> Result<String, ChainError> {
        naming::name(self)
    }

    fn positions_of(&self, group: Group) -> Vec<usize> {
        self.carbons
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_bonded_to(group))
            .map(|(i, _)| i)
            .collect()
    }

    /// `(index, substituent)` for every position holding something other
    /// than hydrogen.
    fn substituted(&self) -> Vec<(usize, Substituent)> {
        self.carbons
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                c.substituents()
                    .iter()
                    .filter(|s| s.group() != Group::Hydrogen)
                    .map(move |s| (i, *s))
            })
            .collect()
    }

    /// The ring renumbered so that new position `j` is old position
    /// `map(j)`.
    fn renumbered(&self, map: impl Fn(usize) -> usize) -> Self {
        Self {
            carbons: (0..RING).map(|j| self.carbons[map(j) % RING].clone()).collect(),
        }
    }

    fn symmetries(&self) -> Vec<Self> {
        let mut images = Vec::with_capacity(2 * RING);
        for r in 0..RING {
            images.push(self.renumbered(|j| j + r));
            images.push(self.renumbered(|j| r + RING - j));
        }
        images
    }
}

fn substituent_text(sub: &Substituent) -> Result<String, ChainError> {
    match sub.group() {
        Group::Radical => radical_name(sub),
        group => prefix_text(group).map(str::to_string),
    }
}

impl Skeleton for Benzene {
    type Measure = ();

    fn validate(&self) -> Result<(), ChainError> {
        let free: u8 = self.carbons.iter().map(Carbon::free_bonds).sum();
        if free > 0 {
            return Err(ChainError::Unfinished { free_bonds: free });
        }
        Ok(())
    }

    fn functions(&self) -> Vec<Group> {
        let mut found: Vec<Group> = self.substituted().iter().map(|(_, s)| s.group()).collect();
        found.sort();
        found.dedup();
        found
    }

    fn rewrite(&self, _functions: &[Group]) -> Result<Option<Rewrite<Self>>, ChainError> {
        Ok(None)
    }

    fn measure(&self, _functions: &[Group]) -> Self::Measure {}

    fn reorient(&self, _functions: &[Group]) -> Result<Self, ChainError> {
        let mut best: Option<((Vec<usize>, Vec<String>), Self)> = None;
        for image in self.symmetries() {
            let substituted = image.substituted();
            let positions: Vec<usize> = substituted.iter().map(|(i, _)| *i).collect();
            let names = substituted
                .iter()
                .map(|(_, s)| substituent_text(s))
                .collect::<Result<Vec<_>, _>>()?;
            let key = (positions, names);
            if best.as_ref().map_or(true, |(k, _)| key < *k) {
                best = Some((key, image));
            }
        }
        Ok(best.map_or_else(|| self.clone(), |(_, image)| image))
    }

    fn assemble(&self, functions: &[Group]) -> Result<String, ChainError> {
        let substituted = self.substituted();
        let prefix = match substituted.as_slice() {
            [] => String::new(),
            [(_, sub)] => substituent_text(sub)?,
            [(first, a), (second, b)] => {
                let distance = (second - first).min(RING - (second - first));
                let position = match distance {
                    1 => "o",
                    2 => "m",
                    _ => "p",
                };
                let (text_a, text_b) = (substituent_text(a)?, substituent_text(b)?);
                let locator = if a == b {
                    Locator::new(position, "di", text_a)
                } else if text_a <= text_b {
                    Locator::new(position, "", text_a + &text_b)
                } else {
                    Locator::new(position, "", text_b + &text_a)
                };
                locator.to_string()
            }
            _ => {
                let mut prefixes = Vec::new();
                for &function in functions {
                    if function != Group::Radical {
                        prefixes.push(Locator::at(
                            &self.positions_of(function),
                            prefix_text(function)?,
                        )?);
                    }
                }
                let mut radicals: Vec<Substituent> = Vec::new();
                for (_, sub) in &substituted {
                    if sub.group() == Group::Radical && !radicals.contains(sub) {
                        radicals.push(*sub);
                    }
                }
                for radical in &radicals {
                    let positions: Vec<usize> = substituted
                        .iter()
                        .filter(|(_, s)| s == radical)
                        .map(|(i, _)| *i)
                        .collect();
                    prefixes.push(Locator::at(&positions, &radical_name(radical)?)?);
                }
                join_prefixes(prefixes)
            }
        };
        Ok(format!("{prefix}benceno"))
    }
}
