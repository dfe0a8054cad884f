//! Check outcomes and failure diagnostics

use emoji_breaks_data::{DataFile, TestVector};
use serde::Serialize;
use std::fmt;

/// The three conformance checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// The vector alone is one cluster
    Isolated,
    /// The vector between `A` and `Z` stays one cluster
    Embedded,
    /// Two adjacent vectors stay two clusters
    Pairwise,
}

impl CheckKind {
    /// All checks in run order
    pub const ALL: [CheckKind; 3] = [CheckKind::Isolated, CheckKind::Embedded, CheckKind::Pairwise];

    /// Short name
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Isolated => "isolated",
            CheckKind::Embedded => "embedded",
            CheckKind::Pairwise => "pairwise",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One mismatch between expected and actual segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Check that failed
    pub check: CheckKind,
    /// Source file of the subject vector
    pub file: DataFile,
    /// Line of the subject vector
    pub line_number: usize,
    /// Expected clusters
    pub expected: Vec<String>,
    /// Clusters the segmenter produced
    pub actual: Vec<String>,
    /// Subject vector's type field
    #[serde(rename = "type")]
    pub kind: String,
    /// Subject vector's shortname
    pub shortname: String,
    /// Subject vector's comment
    pub comment: String,
    /// `file:line` of the second vector in a pairwise check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
}

impl Failure {
    /// Failure for `subject` with the given cluster lists
    pub fn new(check: CheckKind, subject: &TestVector, expected: &[&str], actual: &[&str]) -> Self {
        Self {
            check,
            file: subject.file,
            line_number: subject.line_number,
            expected: expected.iter().map(|s| s.to_string()).collect(),
            actual: actual.iter().map(|s| s.to_string()).collect(),
            kind: subject.kind.clone(),
            shortname: subject.shortname.clone(),
            comment: subject.comment.clone(),
            partner: None,
        }
    }

    /// Record the second vector of a pair
    pub fn with_partner(mut self, partner: &TestVector) -> Self {
        self.partner = Some(partner.location());
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] file: {}, line {}, expected {:?}, but got {:?}, type: {}, shortname: {}, comment: {}",
            self.check,
            self.file,
            self.line_number,
            self.expected,
            self.actual,
            self.kind,
            self.shortname,
            self.comment
        )?;
        if let Some(partner) = &self.partner {
            write!(f, ", followed by: {partner}")?;
        }
        Ok(())
    }
}

/// Result of one check that ran over the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Which check ran
    pub check: CheckKind,
    /// Number of segmentations compared
    pub checked: usize,
    /// Every mismatch, in scan order
    pub failures: Vec<Failure>,
}

impl CheckReport {
    /// Empty report for `check`
    pub fn new(check: CheckKind) -> Self {
        Self {
            check,
            checked: 0,
            failures: Vec::new(),
        }
    }

    /// Compare one segmentation, recording a failure on mismatch
    ///
    /// Returns whether the clusters matched.
    pub fn compare(
        &mut self,
        subject: &TestVector,
        partner: Option<&TestVector>,
        expected: &[&str],
        actual: &[&str],
    ) -> bool {
        self.checked += 1;
        if expected == actual {
            return true;
        }

        let mut failure = Failure::new(self.check, subject, expected, actual);
        if let Some(partner) = partner {
            failure = failure.with_partner(partner);
        }
        log::debug!("{failure}");
        self.failures.push(failure);
        false
    }

    /// Whether no comparison failed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} check: {} checked, {} failed",
            self.check,
            self.checked,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The check ran over the corpus
    Completed(CheckReport),
    /// The data files were unavailable
    Skipped {
        /// Check that was skipped
        check: CheckKind,
        /// Why it was skipped
        reason: String,
    },
}

impl CheckOutcome {
    /// Which check this is
    pub fn check(&self) -> CheckKind {
        match self {
            CheckOutcome::Completed(report) => report.check,
            CheckOutcome::Skipped { check, .. } => *check,
        }
    }

    /// The report, if the check ran
    pub fn report(&self) -> Option<&CheckReport> {
        match self {
            CheckOutcome::Completed(report) => Some(report),
            CheckOutcome::Skipped { .. } => None,
        }
    }

    /// Whether the check was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped { .. })
    }

    /// Whether the check ran without failures
    pub fn passed(&self) -> bool {
        self.report().is_some_and(CheckReport::passed)
    }

    /// Failures of a completed check; empty when skipped
    pub fn failures(&self) -> &[Failure] {
        self.report()
            .map(|report| report.failures.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Completed(report) => write!(f, "{report}"),
            CheckOutcome::Skipped { check, reason } => write!(f, "{check} check: skipped ({reason})"),
        }
    }
}

/// Outcomes of all three checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// One outcome per check, in run order
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Whether every check was skipped
    pub fn is_skipped(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_skipped)
    }

    /// Whether no check recorded a failure
    ///
    /// A skipped suite has no failures and therefore passes.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.failures().is_empty())
    }

    /// Total failures across all checks
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.failures().len()).sum()
    }

    /// Outcome of one check
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check() == check)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{outcome}")?;
        }
        Ok(())
    }
}
