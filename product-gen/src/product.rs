use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::pools::{PRICE_DECIMAL_PLACES, TIMESTAMP_FORMAT};

/// One synthetic product row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub sku: Sku,
    pub description: String,
    pub price: Price,
    pub last_updated: LastUpdated,
}

/// Identifier of the shape `SKU-XXXX-NNN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku(String);

/// Price in whole cents, rendered as `$123.45`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

/// Second-precision UTC timestamp, rendered as `YYYY-MM-DD HH:MM:SS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LastUpdated(DateTime<Utc>);

impl Sku {
    pub(crate) fn new(sku: String) -> Self {
        Sku(sku)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Price {
    pub(crate) fn from_cents(cents: i64) -> Self {
        Price(Decimal::new(cents, PRICE_DECIMAL_PLACES))
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl LastUpdated {
    /// # Panics
    /// Only if `secs` is outside the range chrono can represent, which the
    /// generator's fixed window never is
    pub(crate) fn from_unix(secs: i64) -> Self {
        LastUpdated(DateTime::from_timestamp(secs, 0).expect("timestamp out of range"))
    }

    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.name, self.sku, self.description, self.price, self.last_updated
        )
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl fmt::Display for LastUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Sku {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for LastUpdated {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
