//! Fixed value pools every generated field is drawn from.
//!
//! None of the entries contain a comma, a quote or a line break, so a record
//! serializes to a CSV row without any quoting.

/// First word of a product name
pub const NAME_ADJECTIVES: [&str; 6] = ["Pro", "Lite", "Ultra", "Super", "Eco", "Mini"];

/// Second word of a product name
pub const NAME_NOUNS: [&str; 4] = ["System", "Device", "Controller", "Machine"];

pub const SKU_PREFIX: &str = "SKU-";
pub const SKU_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SKU_DIGITS: &[u8; 10] = b"0123456789";
pub const SKU_LETTER_COUNT: usize = 4;
pub const SKU_DIGIT_COUNT: usize = 3;

pub const DESCRIPTION_VERBS: [&str; 9] = [
    "monetize",
    "iterate",
    "facilitate",
    "whiteboard",
    "productize",
    "orchestrate",
    "deliver",
    "disintermediate",
    "streamline",
];

pub const DESCRIPTION_ADJECTIVES: [&str; 9] = [
    "user-centric",
    "customized",
    "plug-and-play",
    "cross-media",
    "turn-key",
    "open-source",
    "vertical",
    "extensible",
    "real-time",
];

pub const DESCRIPTION_NOUNS: [&str; 9] = [
    "markets",
    "models",
    "technologies",
    "content",
    "platforms",
    "deliverables",
    "mindshare",
    "infrastructures",
    "methodologies",
];

/// Prices are drawn in whole cents from `[MIN_PRICE_CENTS, MAX_PRICE_CENTS)`
pub const MIN_PRICE_CENTS: i64 = 10_000;
pub const MAX_PRICE_CENTS: i64 = 100_000;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// 2023-09-01 00:00:00 UTC
pub const LAST_UPDATED_START: i64 = 1_693_526_400;
/// 2023-10-31 00:00:00 UTC, exclusive
pub const LAST_UPDATED_END: i64 = 1_698_710_400;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
