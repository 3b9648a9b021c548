pub mod filename;
pub mod models;
pub mod repository;
pub mod service;

mod errors;

pub use errors::RenameError;
pub use filename::{is_joker, normalize, parse_card_filename};
pub use models::{RenameOutcome, RenameReport};
pub use repository::{CardDirectory, InMemoryCardDirectory, LocalCardDirectory};
pub use service::RenameService;
