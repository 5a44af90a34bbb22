//! Dotted numeric version parsing and comparison.
//!
//! A version is a non-empty sequence of non-negative integers separated by
//! `.`. Comparison pads the shorter version with zero components, so `2`,
//! `2.0` and `2.0.0` are all equal. Components have no size limit.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons a version string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("missing version")]
    Empty,
    #[error("invalid version component '{0}'")]
    InvalidComponent(String),
}

/// A parsed dotted version that remembers its original text.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    /// Digit strings without leading zeros (`"0"` for zero).
    components: Vec<String>,
}

impl Version {
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if version.is_empty() {
            return Err(VersionError::Empty);
        }
        let components = version
            .split('.')
            .map(parse_component)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            original: version.to_string(),
            components,
        })
    }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Components in canonical decimal form, e.g. `["1", "20"]` for `01.020`.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }
}

fn parse_component(part: &str) -> Result<String, VersionError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidComponent(part.to_string()));
    }
    let digits = part.trim_start_matches('0');
    Ok(if digits.is_empty() { "0" } else { digits }.to_string())
}

/// Numeric order of two canonical digit strings.
fn compare_component(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.components.len().max(other.components.len());
        for i in 0..max_len {
            let a = self.components.get(i).map_or("0", String::as_str);
            let b = other.components.get(i).map_or("0", String::as_str);
            match compare_component(a, b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn basic_ordering() {
        assert!(v("1.0") < v("2.0"));
        assert!(v("1.0.0") < v("1.0.1"));
        assert!(v("1.0.1") < v("1.1.0"));
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(v("2.10") > v("2.1"));
        assert!(v("2.10") > v("2.9"));
        assert!(v("2.10") < v("2.10.5"));
    }

    #[test]
    fn trailing_zeros_equal() {
        assert_eq!(v("2"), v("2.0"));
        assert_eq!(v("2.0.0"), v("2.0"));
        assert_ne!(v("3.0.1"), v("3.1"));
    }

    #[test]
    fn leading_zeros_compare_numerically() {
        assert_eq!(v("01.5"), v("1.5"));
        assert!(v("01.5") > v("1.3"));
    }

    #[test]
    fn keeps_original_text() {
        let version = v("3.0.0");
        assert_eq!(version.to_string(), "3.0.0");
        assert_eq!(version.components().collect::<Vec<_>>(), ["3", "0", "0"]);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert_eq!(
            Version::parse("1..2"),
            Err(VersionError::InvalidComponent(String::new()))
        );
        assert_eq!(
            Version::parse("1.x"),
            Err(VersionError::InvalidComponent("x".to_string()))
        );
        assert!(Version::parse("1.+2").is_err());
        assert!(Version::parse("1.-2").is_err());
        assert!(Version::parse("1.2.").is_err());
    }

    #[test]
    fn components_have_no_size_limit() {
        let huge = v("99999999999999999999999");
        assert_eq!(huge.to_string(), "99999999999999999999999");
        assert!(huge > v("18446744073709551615"));
        assert!(v("18446744073709551616") > v("18446744073709551615"));
        assert!(v("1.100000000000000000000") > v("1.99999999999999999999"));
        assert!(v("1.100000000000000000000") < v("1.100000000000000000000.1"));
        assert_eq!(v("000100000000000000000000"), v("100000000000000000000.0.00"));
    }

    #[test]
    fn components_are_canonical() {
        assert_eq!(v("01.020.0").components().collect::<Vec<_>>(), ["1", "20", "0"]);
        assert_eq!(v("00.0"), v("0"));
    }
}
