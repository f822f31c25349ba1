use std::fmt;

use crate::error::ChainError;
use crate::naming::numeral::quantifier;

/// One name fragment: locants, count prefix and stem.
///
/// Renders as `2,3-dicloro`, or just `dicloro` when no locants are given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locator {
    pub positions: String,
    pub multiplier: String,
    pub text: String,
}

impl Locator {
    pub fn new(
        positions: impl Into<String>,
        multiplier: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            positions: positions.into(),
            multiplier: multiplier.into(),
            text: text.into(),
        }
    }

    /// Explicit 1-based locants for the given 0-based `positions`, with the
    /// matching count prefix.
    pub fn at(positions: &[usize], text: &str) -> Result<Self, ChainError> {
        let locants = positions
            .iter()
            .map(|p| (p + 1).to_string())
            .collect::<Vec<_>>()
            .join(",");
        Ok(Self::new(locants, quantifier(positions.len())?, text))
    }

    /// No locants, only the count prefix.
    pub fn counted(count: usize, text: &str) -> Result<Self, ChainError> {
        Ok(Self::new("", quantifier(count)?, text))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positions.is_empty() {
            write!(f, "{}-", self.positions)?;
        }
        write!(f, "{}{}", self.multiplier, self.text)
    }
}

/// Alphabetize prefixes by stem and join them, hyphenating before any
/// prefix that starts with a locant.
pub fn join_prefixes(mut prefixes: Vec<Locator>) -> String {
    prefixes.sort_by(|a, b| a.text.cmp(&b.text));
    let mut out = String::new();
    for (i, prefix) in prefixes.iter().enumerate() {
        let rendered = prefix.to_string();
        if i > 0 && !rendered.starts_with(|c: char| c.is_ascii_lowercase()) {
            out.push('-');
        }
        out.push_str(&rendered);
    }
    out
}
