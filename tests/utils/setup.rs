use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use card_renamer::{LocalCardDirectory, RenameReport, RenameService};
use tempfile::TempDir;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub dir: TempDir,
    pub service: RenameService,
}

impl TestSetup {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn run(&self) -> RenameReport {
        self.service.run().expect("listing the card folder should succeed")
    }

    /// Sorted names currently in the folder
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("card folder should be readable")
            .map(|entry| {
                entry
                    .expect("entry should be readable")
                    .file_name()
                    .into_string()
                    .expect("test names are UTF-8")
            })
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).expect("file should exist")
    }
}

pub struct TestSetupBuilder {
    files: Vec<(String, String)>,
    subdirectories: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            files: vec![],
            subdirectories: vec![],
        }
    }

    /// Adds files whose content is their own name, so moves can be traced
    pub fn with_files(mut self, names: Vec<&str>) -> Self {
        self.files.extend(names.into_iter().map(|n| (n.to_string(), n.to_string())));
        self
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_subdirectory(mut self, name: &str) -> Self {
        self.subdirectories.push(name.to_string());
        self
    }

    pub fn with_full_deck(self) -> Self {
        let names: Vec<String> = card_renamer::Card::all_cards()
            .iter()
            .map(|card| card.verbose_file_name())
            .collect();
        self.with_files(names.iter().map(String::as_str).collect())
    }

    pub fn build(self) -> TestSetup {
        let dir = tempfile::tempdir().expect("temp dir should be created");

        for (name, content) in &self.files {
            fs::write(dir.path().join(name), content).expect("file should be written");
        }
        for name in &self.subdirectories {
            fs::create_dir(dir.path().join(name)).expect("subdirectory should be created");
        }

        let directory = Arc::new(LocalCardDirectory::new(PathBuf::from(dir.path())));
        let service = RenameService::new(directory);

        TestSetup { dir, service }
    }
}
