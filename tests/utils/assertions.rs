//! Test assertion helpers - fluent API for verifying rename outcomes
#![allow(dead_code)] // Test utilities may not all be used in every test

use card_renamer::{RenameOutcome, RenameReport};

pub struct OutcomeAssertion<'a> {
    report: &'a RenameReport,
    original: &'a str,
}

impl<'a> OutcomeAssertion<'a> {
    pub fn for_entry(report: &'a RenameReport, original: &'a str) -> Self {
        Self { report, original }
    }

    fn outcome(&self) -> &'a RenameOutcome {
        self.report
            .find(self.original)
            .unwrap_or_else(|| panic!("no outcome recorded for {}", self.original))
    }

    pub fn was_renamed_to(self, expected: &str) {
        match self.outcome() {
            RenameOutcome::Renamed { renamed, .. } => assert_eq!(renamed, expected),
            other => panic!("expected {} to be renamed, got {:?}", self.original, other),
        }
    }

    pub fn was_skipped(self) {
        assert!(
            self.outcome().is_skipped(),
            "expected {} to be skipped, got {:?}",
            self.original,
            self.outcome()
        );
        assert!(
            self.outcome().report_line().is_none(),
            "skipped entries are not reported"
        );
    }

    /// Asserts a failure and returns its report line
    pub fn failed(self) -> String {
        match self.outcome() {
            RenameOutcome::Failed { .. } => self
                .outcome()
                .report_line()
                .expect("failures are always reported"),
            other => panic!("expected {} to fail, got {:?}", self.original, other),
        }
    }
}
