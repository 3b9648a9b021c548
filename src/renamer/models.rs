use super::RenameError;

/// Result of processing a single directory entry
#[derive(Debug)]
pub enum RenameOutcome {
    /// Entry was renamed to its compact card name
    Renamed { original: String, renamed: String },
    /// Joker images are left alone and not reported
    Skipped { original: String },
    /// Entry was left unchanged because something went wrong
    Failed {
        original: String,
        error: RenameError,
    },
}

impl RenameOutcome {
    pub fn original(&self) -> &str {
        match self {
            RenameOutcome::Renamed { original, .. }
            | RenameOutcome::Skipped { original }
            | RenameOutcome::Failed { original, .. } => original,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RenameOutcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RenameOutcome::Failed { .. })
    }

    /// Human-readable line for standard output. Skipped entries produce none.
    pub fn report_line(&self) -> Option<String> {
        match self {
            RenameOutcome::Renamed { original, renamed } => {
                Some(format!("✅ {} -> {}", original, renamed))
            }
            RenameOutcome::Skipped { .. } => None,
            RenameOutcome::Failed { original, error } => {
                Some(format!("❌ Skip {}: {}", original, error))
            }
        }
    }
}

/// Every outcome of one run, in processing order
#[derive(Debug, Default)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: RenameOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_renamed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RenameOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn find(&self, original: &str) -> Option<&RenameOutcome> {
        self.outcomes.iter().find(|o| o.original() == original)
    }

    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes.iter().filter_map(RenameOutcome::report_line)
    }
}
