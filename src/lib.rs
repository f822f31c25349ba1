pub mod benzene;
pub mod carbon;
pub mod chain;
pub mod error;
pub mod formula;
pub mod group;
pub mod naming;
pub mod substituent;

pub use benzene::Benzene;
pub use carbon::Carbon;
pub use chain::Chain;
pub use error::ChainError;
pub use formula::{molecular_formula, FormulaStyle};
pub use group::Group;
pub use naming::{multiplier, quantifier, Locator, Skeleton};
pub use substituent::{registry, Substituent};
