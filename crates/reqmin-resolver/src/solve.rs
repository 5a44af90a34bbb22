//! Parse, sort, merge and minimize a whitespace-separated requirement list.

use std::fmt;

use reqmin_core::Requirement;
use reqmin_util::errors::ReqminError;

use crate::conflict::Conflict;
use crate::merge::merge;
use crate::minimize::minimize;

/// Text output for a requirement set no version can satisfy.
pub const UNSATISFIABLE: &str = "unsatisfiable";

/// The outcome of reducing a requirement set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The minimal equivalent requirements, ascending by version.
    Satisfiable(Vec<Requirement>),
    Unsatisfiable(Conflict),
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Solution::Satisfiable(_))
    }

    /// The minimal requirements, or `None` when unsatisfiable.
    pub fn requirements(&self) -> Option<&[Requirement]> {
        match self {
            Solution::Satisfiable(reqs) => Some(reqs),
            Solution::Unsatisfiable(_) => None,
        }
    }

    /// Turn an unsatisfiable outcome into [`ReqminError::Unsatisfiable`].
    pub fn into_result(self) -> Result<Vec<Requirement>, ReqminError> {
        match self {
            Solution::Satisfiable(reqs) => Ok(reqs),
            Solution::Unsatisfiable(conflict) => Err(conflict.into()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Satisfiable(reqs) => {
                for (i, req) in reqs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{req}")?;
                }
                Ok(())
            }
            Solution::Unsatisfiable(_) => f.write_str(UNSATISFIABLE),
        }
    }
}

/// Parse every whitespace-separated token; the first malformed token fails
/// the whole call.
pub fn parse_requirements(text: &str) -> Result<Vec<Requirement>, ReqminError> {
    text.split_whitespace().map(Requirement::parse).collect()
}

/// Reduce already-parsed requirements.
///
/// Requirements are stably sorted by version, so those sharing a version are
/// combined in the order given.
pub fn reduce(mut reqs: Vec<Requirement>) -> Solution {
    reqs.sort_by(Requirement::cmp_version);
    let parsed = reqs.len();
    let result = merge(reqs).and_then(|merged| {
        tracing::debug!("merged {} requirements into {}", parsed, merged.len());
        minimize(merged)
    });
    match result {
        Ok(minimal) => {
            tracing::debug!("minimized to {} requirements", minimal.len());
            Solution::Satisfiable(minimal)
        }
        Err(conflict) => Solution::Unsatisfiable(conflict),
    }
}

/// Reduce a requirement string such as `">2 >=2.1 <4 !=4.5"` to its minimal
/// form (`">=2.1 <4"`), or to `"unsatisfiable"`.
///
/// Empty or whitespace-only input yields an empty string. A malformed token is
/// an error rather than an unsatisfiable result.
pub fn solve(text: &str) -> Result<String, ReqminError> {
    let reqs = parse_requirements(text)?;
    tracing::debug!("parsed {} requirements", reqs.len());
    Ok(reduce(reqs).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(text: &str) -> String {
        solve(text).unwrap()
    }

    #[test]
    fn empty_input() {
        assert_eq!(ok(""), "");
        assert_eq!(ok("   \t "), "");
    }

    #[test]
    fn single_requirement_is_minimal() {
        assert_eq!(ok("!=1"), "!=1");
    }

    #[test]
    fn reduces_mixed_bounds() {
        assert_eq!(ok(">=3 !=3"), ">3");
        assert_eq!(ok(">2 >=2.1 <4 !=4.5"), ">=2.1 <4");
        assert_eq!(ok(">2 >=2.1 <4 !=4.5 !=3.7"), ">=2.1 !=3.7 <4");
        assert_eq!(ok("<5.0.1 >=3.0"), ">=3.0 <5.0.1");
        assert_eq!(ok(">3 >=2.1 <=4.5 !=5.0"), ">3 <=4.5");
    }

    #[test]
    fn brackets_collapse_to_pin() {
        assert_eq!(ok(">=3 <=3.0"), "==3");
        assert_eq!(ok(">=3.0 <=3.0.0"), "==3.0");
        assert_eq!(ok(">=1 <=1"), "==1");
    }

    #[test]
    fn pins_absorb_bounds() {
        assert_eq!(ok(">=1 ==2.1.2"), "==2.1.2");
        assert_eq!(ok("<=3 ==2.1.2"), "==2.1.2");
        assert_eq!(ok(">=1 <=3 ==2.1.2"), "==2.1.2");
    }

    #[test]
    fn unsatisfiable_inputs() {
        for input in ["<1 >2", "<1 >1", "==1 !=1", "==1 ==2", "<3.0 ==3.1"] {
            assert_eq!(ok(input), UNSATISFIABLE, "{input}");
        }
    }

    #[test]
    fn invalid_token_is_an_error() {
        let err = solve(">=1 ~2").unwrap_err();
        assert!(
            matches!(err, ReqminError::InvalidRequirement { ref token, .. } if token == "~2"),
            "{err}"
        );
        assert!(solve(">=1 <2 =>3").is_err());
    }

    #[test]
    fn reduce_reports_conflict() {
        let reqs = parse_requirements("<1 >2").unwrap();
        let solution = reduce(reqs);
        assert!(!solution.is_satisfiable());
        assert!(solution.requirements().is_none());
        let err = solution.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Unsatisfiable requirements: <1 is below >2");
    }

    #[test]
    fn reduce_returns_requirements() {
        let reqs = parse_requirements("<4 >2 >=2.1").unwrap();
        let solution = reduce(reqs);
        let text: Vec<String> = solution
            .requirements()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(text, [">=2.1", "<4"]);
    }
}
