use std::ffi::OsString;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    filename::{is_joker, parse_card_filename},
    repository::CardDirectory,
    RenameError, RenameOutcome, RenameReport,
};

/// Renames long-form card images in one directory to their compact codes
pub struct RenameService {
    directory: Arc<dyn CardDirectory + Send + Sync>,
}

impl RenameService {
    pub fn new(directory: Arc<dyn CardDirectory + Send + Sync>) -> Self {
        Self { directory }
    }

    /// Processes every entry of the directory in filename order.
    ///
    /// Per-entry failures are recorded in the report and never stop the run.
    /// Only a failure to list the directory is returned as an error.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<RenameReport, RenameError> {
        let mut names = self.directory.list_entries()?;
        names.sort();

        let mut report = RenameReport::new();
        for name in names {
            report.push(self.process_entry(name));
        }

        info!(
            renamed = report.renamed_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            "Finished renaming card images"
        );

        Ok(report)
    }

    pub fn process_entry(&self, name: OsString) -> RenameOutcome {
        let original = match name.into_string() {
            Ok(original) => original,
            Err(raw) => {
                let original = raw.to_string_lossy().into_owned();
                warn!(file_name = %original, "Skipping non UTF-8 file name");
                return RenameOutcome::Failed {
                    error: RenameError::InvalidFileName(original.clone()),
                    original,
                };
            }
        };

        if is_joker(&original) {
            debug!(file_name = %original, "Skipping joker");
            return RenameOutcome::Skipped { original };
        }

        match self.rename_card(&original) {
            Ok(renamed) => {
                debug!(file_name = %original, renamed = %renamed, "Renamed card image");
                RenameOutcome::Renamed { original, renamed }
            }
            Err(error) => {
                debug!(file_name = %original, error = %error, "Failed to rename card image");
                RenameOutcome::Failed { original, error }
            }
        }
    }

    fn rename_card(&self, original: &str) -> Result<String, RenameError> {
        let renamed = parse_card_filename(original)?.file_name();

        // Never overwrite: a duplicate asset must not clobber an already converted card
        if renamed != original && self.directory.contains(&renamed)? {
            return Err(RenameError::TargetExists(renamed));
        }

        self.directory.rename(original, &renamed)?;
        Ok(renamed)
    }
}
