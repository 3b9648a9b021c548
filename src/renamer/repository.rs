use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::RenameError;

/// Trait for the flat directory of card images being renamed
pub trait CardDirectory {
    /// Names of the immediate entries. No recursion.
    fn list_entries(&self) -> Result<Vec<OsString>, RenameError>;

    /// Whether an entry with this name exists. Lookup failures other than
    /// "not found" are errors, never "absent".
    fn contains(&self, name: &str) -> Result<bool, RenameError>;

    /// Renames `from` to `to` within the same directory
    fn rename(&self, from: &str, to: &str) -> Result<(), RenameError>;
}

/// Card directory backed by the local filesystem
pub struct LocalCardDirectory {
    root: PathBuf,
}

impl LocalCardDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn root_name(&self) -> String {
        self.root.display().to_string()
    }
}

impl CardDirectory for LocalCardDirectory {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn list_entries(&self) -> Result<Vec<OsString>, RenameError> {
        let entries = fs::read_dir(&self.root).map_err(|e| RenameError::io(self.root_name(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RenameError::io(self.root_name(), e))?;
            names.push(entry.file_name());
        }

        debug!(count = names.len(), "Listed card directory");
        Ok(names)
    }

    fn contains(&self, name: &str) -> Result<bool, RenameError> {
        match fs::symlink_metadata(self.root.join(name)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RenameError::io(name, e)),
        }
    }

    #[instrument(skip(self))]
    fn rename(&self, from: &str, to: &str) -> Result<(), RenameError> {
        fs::rename(self.root.join(from), self.root.join(to)).map_err(|e| RenameError::io(from, e))
    }
}

/// In-memory implementation of CardDirectory for development and testing
pub struct InMemoryCardDirectory {
    entries: Mutex<BTreeSet<String>>,
}

impl Default for InMemoryCardDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCardDirectory {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn with_entries<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Current entry names, sorted
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }
}

impl CardDirectory for InMemoryCardDirectory {
    fn list_entries(&self) -> Result<Vec<OsString>, RenameError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().map(OsString::from).collect())
    }

    fn contains(&self, name: &str) -> Result<bool, RenameError> {
        Ok(self.entries.lock().unwrap().contains(name))
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), RenameError> {
        let mut entries = self.entries.lock().unwrap();
        if !entries.remove(from) {
            return Err(RenameError::io(
                from,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ));
        }
        entries.insert(to.to_string());
        Ok(())
    }
}
