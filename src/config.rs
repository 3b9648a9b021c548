use clap::Parser;
use std::path::PathBuf;

/// Folder holding the card images when none is given on the command line
pub const DEFAULT_CARD_FOLDER: &str = "./public/cards/";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "card_renamer=info";

/// Rename verbose card images (ace_of_spades.png) to compact codes (AS.png)
#[derive(Debug, Parser)]
#[command(name = "card-renamer", version, about)]
pub struct Config {
    /// Directory containing the card images
    #[arg(default_value = DEFAULT_CARD_FOLDER)]
    pub folder: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_folder() {
        let config = Config::try_parse_from(["card-renamer"]).unwrap();
        assert_eq!(config.folder, PathBuf::from(DEFAULT_CARD_FOLDER));
    }

    #[test]
    fn test_folder_override() {
        let config = Config::try_parse_from(["card-renamer", "assets/deck"]).unwrap();
        assert_eq!(config.folder, PathBuf::from("assets/deck"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Config::try_parse_from(["card-renamer", "--dry-run"]).is_err());
    }
}
