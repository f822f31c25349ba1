use thiserror::Error;

use crate::group::Group;

/// Errors produced while building, rendering or naming a carbon skeleton.
///
/// Every variant is a deterministic logic error on the caller's side (or an
/// internal invariant surfaced as a value); retrying the same operation on
/// the same skeleton yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A substituent or carbon-carbon bond needs more valence than is free.
    #[error("valence exceeded: {requested} bond(s) requested, {available} free")]
    ValenceExceeded { requested: u8, available: u8 },
    /// A bond was released on a carbon that already has all four bonds free.
    #[error("free valence would exceed four")]
    ValenceOverflow,
    /// No text or canonical instance is registered for this kind.
    #[error("no registered text or canonical substituent for {0:?}")]
    UnknownFunction(Group),
    /// A group name did not match any known kind.
    #[error("unknown group name '{0}'")]
    UnknownGroupName(String),
    /// A radical with no carbons, or a two-way branched radical that is too short to fork.
    #[error("invalid radical: {carbons} carbon(s), iso = {iso}")]
    InvalidRadical { carbons: u16, iso: bool },
    /// The skeleton has no carbons.
    #[error("skeleton has no carbons")]
    EmptyChain,
    /// Naming was requested while some carbon still has unsatisfied valence.
    #[error("skeleton is unfinished: {free_bonds} free bond(s) left")]
    Unfinished { free_bonds: u8 },
    /// A ring position outside the ring.
    #[error("position {index} out of range for a ring of {len}")]
    PositionOutOfRange { index: usize, len: usize },
    /// Numerals are only defined below 10 000.
    #[error("no numeral stem for {0} (only values below 10000 are named)")]
    NumeralOutOfRange(usize),
    /// A normalization rewrite did not make progress towards the normal form.
    #[error("normalization rule '{rule}' did not decrease the rewrite measure")]
    RewriteDiverged { rule: &'static str },
}
