//! Comparison operators and single version requirements.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use reqmin_util::errors::ReqminError;
use thiserror::Error;

use crate::version::Version;

/// Comparison operators for version requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (<)
    LessThan = 0,
    /// Less than or equal (<=)
    LessThanOrEqual = 1,
    /// Greater than (>)
    GreaterThan = 2,
    /// Greater than or equal (>=)
    GreaterThanOrEqual = 3,
    /// Equal (==)
    Equal = 4,
    /// Not equal (!=)
    NotEqual = 5,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct InvalidOperatorError(pub String);

use Operator as Op;

/// Result of combining two operators that constrain the *same* version,
/// indexed by `[left as usize][right as usize]`. `None` means the pair has no
/// combination, which includes every operator paired with itself.
const COMBINATIONS: [[Option<Operator>; 6]; 6] = [
    // <
    [None, Some(Op::LessThan), None, None, None, Some(Op::LessThan)],
    // <=
    [
        Some(Op::LessThan),
        None,
        None,
        Some(Op::Equal),
        Some(Op::Equal),
        Some(Op::LessThan),
    ],
    // >
    [None, None, None, Some(Op::GreaterThan), None, Some(Op::GreaterThan)],
    // >=
    [
        None,
        Some(Op::Equal),
        Some(Op::GreaterThan),
        None,
        Some(Op::Equal),
        Some(Op::GreaterThan),
    ],
    // ==
    [None, Some(Op::Equal), None, Some(Op::Equal), None, None],
    // !=
    [
        Some(Op::LessThan),
        Some(Op::LessThan),
        Some(Op::GreaterThan),
        Some(Op::GreaterThan),
        None,
        None,
    ],
];

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 6] = [
        Op::LessThan,
        Op::LessThanOrEqual,
        Op::GreaterThan,
        Op::GreaterThanOrEqual,
        Op::Equal,
        Op::NotEqual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Op::LessThan => "<",
            Op::LessThanOrEqual => "<=",
            Op::GreaterThan => ">",
            Op::GreaterThanOrEqual => ">=",
            Op::Equal => "==",
            Op::NotEqual => "!=",
        }
    }

    /// `<` or `<=`.
    pub fn is_upper(&self) -> bool {
        matches!(self, Op::LessThan | Op::LessThanOrEqual)
    }

    /// `>` or `>=`.
    pub fn is_lower(&self) -> bool {
        matches!(self, Op::GreaterThan | Op::GreaterThanOrEqual)
    }

    /// The single operator equivalent to `self` and `other` applied to the
    /// same version, if there is one.
    pub fn combine(self, other: Operator) -> Option<Operator> {
        COMBINATIONS[self as usize][other as usize]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Op::LessThan),
            "<=" => Ok(Op::LessThanOrEqual),
            ">" => Ok(Op::GreaterThan),
            ">=" => Ok(Op::GreaterThanOrEqual),
            "==" => Ok(Op::Equal),
            "!=" => Ok(Op::NotEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

/// One constraint on an unknown version, e.g. `>=2.1`.
///
/// Requirements are ordered by version only; use [`Requirement::cmp_version`]
/// with a stable sort to keep the input order of requirements that share a
/// version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    operator: Operator,
    version: Version,
}

impl Requirement {
    pub fn new(operator: Operator, version: Version) -> Self {
        Self { operator, version }
    }

    /// Parse a token such as `!=3.0`.
    ///
    /// The operator is everything before the first ASCII digit; the rest must
    /// be a dotted version.
    pub fn parse(token: &str) -> Result<Self, ReqminError> {
        let Some(split) = token.find(|c: char| c.is_ascii_digit()) else {
            return Err(ReqminError::invalid(token, "missing version"));
        };
        let (op, version) = token.split_at(split);
        if op.is_empty() {
            return Err(ReqminError::invalid(token, "empty operator"));
        }
        let operator =
            Operator::from_str(op).map_err(|e| ReqminError::invalid(token, e.to_string()))?;
        let version =
            Version::parse(version).map_err(|e| ReqminError::invalid(token, e.to_string()))?;
        Ok(Self { operator, version })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn cmp_version(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }

    /// Combine two requirements that pin the same version into one.
    ///
    /// The result keeps `self`'s version text. Returns `None` when the
    /// versions differ or the operator pair has no combination.
    pub fn combine_same_pin(&self, other: &Requirement) -> Option<Requirement> {
        if self.version != other.version {
            return None;
        }
        self.operator
            .combine(other.operator)
            .map(|operator| Requirement::new(operator, self.version.clone()))
    }

    /// Check whether a concrete version satisfies this requirement.
    pub fn matches(&self, version: &Version) -> bool {
        let ord = version.cmp(&self.version);
        match self.operator {
            Op::LessThan => ord == Ordering::Less,
            Op::LessThanOrEqual => ord != Ordering::Greater,
            Op::GreaterThan => ord == Ordering::Greater,
            Op::GreaterThanOrEqual => ord != Ordering::Less,
            Op::Equal => ord == Ordering::Equal,
            Op::NotEqual => ord != Ordering::Equal,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Requirement {
    type Err = ReqminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
