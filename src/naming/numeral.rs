//! Numeral stems.
//!
//! Two vocabularies that must never be mixed up: [`multiplier`] names a
//! carbon count (`but` in butano, `pent` in pentilo) and [`quantifier`]
//! counts identical substituents (`di` in dicloro). Counts above four reuse
//! the multiplier with a trailing `a` (`penta`, `hexa`).

use crate::error::ChainError;

const GREEK: [&str; 10] = [
    "", "hen", "do", "tri", "tetra", "pent", "hex", "hept", "oct", "non",
];

/// Greek-derived stem for a single digit.
pub fn greek_prefix(digit: usize) -> Result<&'static str, ChainError> {
    GREEK
        .get(digit)
        .copied()
        .ok_or(ChainError::NumeralOutOfRange(digit))
}

/// Chain-length stem for `n` carbons.
///
/// # Examples
///
/// ```
/// use nomencrab::naming::multiplier;
///
/// assert_eq!(multiplier(4).unwrap(), "but");
/// assert_eq!(multiplier(11).unwrap(), "undec");
/// assert_eq!(multiplier(21).unwrap(), "heneicos");
/// assert_eq!(multiplier(31).unwrap(), "hentriacont");
/// ```
pub fn multiplier(n: usize) -> Result<String, ChainError> {
    let stem = match n {
        0 => String::new(),
        1 => "met".to_string(),
        2 => "et".to_string(),
        3 => "prop".to_string(),
        4 => "but".to_string(),
        5..=9 => greek_prefix(n)?.to_string(),
        11 => "undec".to_string(),
        10..=14 => format!("{}dec", greek_prefix(n % 10)?),
        15..=19 => format!("{}adec", greek_prefix(n % 10)?),
        20 => "icos".to_string(),
        21 => "heneicos".to_string(),
        22..=24 => format!("{}cos", greek_prefix(n % 10)?),
        25..=29 => format!("{}acos", greek_prefix(n % 10)?),
        30..=99 => {
            let (tens, units) = (n / 10, n % 10);
            let mut stem = greek_prefix(units)?.to_string();
            if units > 4 {
                stem.push('a');
            }
            stem.push_str(greek_prefix(tens)?);
            stem.push_str(if tens == 4 { "cont" } else { "acont" });
            stem
        }
        100 => "hect".to_string(),
        101..=999 => {
            let rest = multiplier(n % 100)?;
            match n / 100 {
                1 => format!("{rest}ahect"),
                2 => format!("{rest}adict"),
                3 => format!("{rest}atrict"),
                4 => format!("{rest}atetract"),
                h => format!("{rest}a{}act", greek_prefix(h)?),
            }
        }
        1000..=9999 => {
            let stem = match n / 1000 {
                1 => "kili".to_string(),
                2 => "dili".to_string(),
                3 => "trili".to_string(),
                4 => "tetrali".to_string(),
                k => format!("{}ali", greek_prefix(k)?),
            };
            match n % 1000 {
                0 => stem,
                rest => format!("{}a{stem}", multiplier(rest)?),
            }
        }
        _ => return Err(ChainError::NumeralOutOfRange(n)),
    };
    Ok(stem)
}

/// Count prefix for `n` identical substituents.
pub fn quantifier(n: usize) -> Result<String, ChainError> {
    Ok(match n {
        0 | 1 => String::new(),
        2 => "di".to_string(),
        3 => "tri".to_string(),
        4 => "tetra".to_string(),
        _ => format!("{}a", multiplier(n)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_stems() {
        let expected = [
            "", "met", "et", "prop", "but", "pent", "hex", "hept", "oct", "non",
        ];
        for (n, stem) in expected.iter().enumerate() {
            assert_eq!(multiplier(n).unwrap(), *stem, "n = {n}");
        }
    }

    #[test]
    fn teens_and_twenties() {
        assert_eq!(multiplier(10).unwrap(), "dec");
        assert_eq!(multiplier(11).unwrap(), "undec");
        assert_eq!(multiplier(12).unwrap(), "dodec");
        assert_eq!(multiplier(14).unwrap(), "tetradec");
        assert_eq!(multiplier(16).unwrap(), "hexadec");
        assert_eq!(multiplier(20).unwrap(), "icos");
        assert_eq!(multiplier(21).unwrap(), "heneicos");
        assert_eq!(multiplier(22).unwrap(), "docos");
        assert_eq!(multiplier(25).unwrap(), "pentacos");
    }

    #[test]
    fn tens() {
        assert_eq!(multiplier(30).unwrap(), "triacont");
        assert_eq!(multiplier(31).unwrap(), "hentriacont");
        assert_eq!(multiplier(40).unwrap(), "tetracont");
        assert_eq!(multiplier(43).unwrap(), "tritetracont");
        assert_eq!(multiplier(55).unwrap(), "pentapentacont");
    }

    #[test]
    fn hundreds() {
        assert_eq!(multiplier(100).unwrap(), "hect");
        assert_eq!(multiplier(110).unwrap(), "decahect");
        assert_eq!(multiplier(200).unwrap(), "adict");
        assert_eq!(multiplier(300).unwrap(), "atrict");
        assert_eq!(multiplier(456).unwrap(), "hexapentacontatetract");
        assert_eq!(multiplier(502).unwrap(), "etapentact");
    }

    #[test]
    fn thousands() {
        assert_eq!(multiplier(1000).unwrap(), "kili");
        assert_eq!(multiplier(2000).unwrap(), "dili");
        assert_eq!(multiplier(5000).unwrap(), "pentali");
        assert_eq!(multiplier(1002).unwrap(), "etakili");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(multiplier(10_000), Err(ChainError::NumeralOutOfRange(10_000)));
        assert!(greek_prefix(10).is_err());
    }

    #[test]
    fn quantifiers() {
        assert_eq!(quantifier(1).unwrap(), "");
        assert_eq!(quantifier(2).unwrap(), "di");
        assert_eq!(quantifier(3).unwrap(), "tri");
        assert_eq!(quantifier(4).unwrap(), "tetra");
        assert_eq!(quantifier(5).unwrap(), "penta");
        assert_eq!(quantifier(6).unwrap(), "hexa");
        assert_eq!(quantifier(11).unwrap(), "undeca");
    }
}
