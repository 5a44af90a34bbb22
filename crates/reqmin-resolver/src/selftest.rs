//! Built-in reference cases, run by `reqmin --test`.

use std::fmt;

use crate::solve::solve;

/// `(input, expected output)` pairs.
pub const CASES: &[(&str, &str)] = &[
    ("", ""),
    ("!=1", "!=1"),
    (">=3 !=3", ">3"),
    (">2 >=2.1 <4 !=4.5", ">=2.1 <4"),
    (">2 >=2.1 <4 !=4.5 !=3.7", ">=2.1 !=3.7 <4"),
    ("<5.0.1 >=3.0", ">=3.0 <5.0.1"),
    ("<3.0 <3.1", "<3.0"),
    (">3.0 >3.1", ">3.1"),
    (">3 >=2.1 <=4.5 !=5.0", ">3 <=4.5"),
    (">=3 <=3.0", "==3"),
    (">=3.0 <=3.0.0", "==3.0"),
    (">=1 ==2.1.2", "==2.1.2"),
    ("<=3 ==2.1.2", "==2.1.2"),
    (">=1 <=3 ==2.1.2", "==2.1.2"),
    (">=1 <=1", "==1"),
    ("<1 >2", "unsatisfiable"),
    ("<1 >1", "unsatisfiable"),
    ("==1 !=1", "unsatisfiable"),
    ("==1 ==2", "unsatisfiable"),
    ("<3.0 ==3.1", "unsatisfiable"),
];

/// A case whose output differed from the expected one.
#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Results of running [`CASES`].
#[derive(Debug, Default)]
pub struct SelfTestReport {
    pub total: usize,
    pub failures: Vec<CaseFailure>,
}

impl SelfTestReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "All {} cases passed.", self.total);
        }
        writeln!(f, "{} of {} cases failed:", self.failures.len(), self.total)?;
        for c in &self.failures {
            writeln!(
                f,
                "  '{}': expected '{}' but got '{}'",
                c.input, c.expected, c.actual
            )?;
        }
        Ok(())
    }
}

/// Run every built-in case.
pub fn run() -> SelfTestReport {
    run_cases(CASES)
}

pub fn run_cases(cases: &[(&str, &str)]) -> SelfTestReport {
    let mut report = SelfTestReport::default();
    for (input, expected) in cases {
        report.total += 1;
        let actual = match solve(input) {
            Ok(out) => out,
            Err(e) => e.to_string(),
        };
        if actual != *expected {
            report.failures.push(CaseFailure {
                input: input.to_string(),
                expected: expected.to_string(),
                actual,
            });
        }
    }
    report
}
