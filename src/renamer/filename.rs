//! Pure filename handling: joker detection, normalization and parsing of
//! long-form card names. Nothing in here touches the filesystem.

use crate::cards::{Card, Rank, Suit, IMAGE_EXTENSION};

use super::RenameError;

/// Separator between the rank token and the suit token
pub const TOKEN_SEPARATOR: &str = "_of_";

/// Marker for the second art variant of a card. Removed wherever it appears.
pub const VARIANT_MARKER: &str = "_2";

const JOKER: &str = "joker";

pub fn is_joker(file_name: &str) -> bool {
    file_name.to_lowercase().contains(JOKER)
}

/// Lowercases the name and strips every `.png` and `_2` occurrence.
///
/// `10_of_hearts_2.png` becomes `10_of_hearts`.
pub fn normalize(file_name: &str) -> String {
    file_name
        .to_lowercase()
        .replace(IMAGE_EXTENSION, "")
        .replace(VARIANT_MARKER, "")
}

pub fn parse_card_filename(file_name: &str) -> Result<Card, RenameError> {
    let normalized = normalize(file_name);

    let parts: Vec<&str> = normalized.split(TOKEN_SEPARATOR).collect();
    let [rank_token, suit_token] = parts.as_slice() else {
        return Err(RenameError::UnrecognizedFormat(normalized.clone()));
    };

    let rank = Rank::from_token(rank_token)
        .ok_or_else(|| RenameError::UnknownRank(rank_token.to_string()))?;
    let suit = Suit::from_token(suit_token)
        .ok_or_else(|| RenameError::UnknownSuit(suit_token.to_string()))?;

    Ok(Card::new(rank, suit))
}
