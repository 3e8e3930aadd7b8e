use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pools::{
    DESCRIPTION_ADJECTIVES, DESCRIPTION_NOUNS, DESCRIPTION_VERBS, LAST_UPDATED_END,
    LAST_UPDATED_START, MAX_PRICE_CENTS, MIN_PRICE_CENTS, NAME_ADJECTIVES, NAME_NOUNS,
    SKU_DIGITS, SKU_DIGIT_COUNT, SKU_LETTERS, SKU_LETTER_COUNT, SKU_PREFIX,
};
use crate::product::{LastUpdated, Price, ProductRecord, Sku};

/// Samples product records from the fixed value pools.
///
/// The random source is owned by the generator and never shared, so a seeded
/// generator always produces the same sequence of records.
#[derive(Debug, Clone)]
pub struct RecordGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RecordGenerator<StdRng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        RecordGenerator::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the current wall clock time
    #[must_use]
    pub fn from_time() -> Self {
        RecordGenerator::from_seed(time_seed())
    }
}

impl<R: Rng> RecordGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        RecordGenerator { rng }
    }

    pub fn generate_name(&mut self) -> String {
        let adjective = pick(&mut self.rng, &NAME_ADJECTIVES);
        let noun = pick(&mut self.rng, &NAME_NOUNS);
        format!("{} {}", adjective, noun)
    }

    pub fn generate_sku(&mut self) -> Sku {
        let mut sku =
            String::with_capacity(SKU_PREFIX.len() + SKU_LETTER_COUNT + 1 + SKU_DIGIT_COUNT);
        sku.push_str(SKU_PREFIX);
        for _ in 0..SKU_LETTER_COUNT {
            sku.push(char::from(SKU_LETTERS[self.rng.gen_range(0..SKU_LETTERS.len())]));
        }
        sku.push('-');
        for _ in 0..SKU_DIGIT_COUNT {
            sku.push(char::from(SKU_DIGITS[self.rng.gen_range(0..SKU_DIGITS.len())]));
        }
        Sku::new(sku)
    }

    pub fn generate_description(&mut self) -> String {
        let verb = pick(&mut self.rng, &DESCRIPTION_VERBS);
        let adjective = pick(&mut self.rng, &DESCRIPTION_ADJECTIVES);
        let noun = pick(&mut self.rng, &DESCRIPTION_NOUNS);
        format!("This is a {} {} {} product with features.", verb, adjective, noun)
    }

    pub fn generate_price(&mut self) -> Price {
        Price::from_cents(self.rng.gen_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS))
    }

    pub fn generate_last_updated(&mut self) -> LastUpdated {
        LastUpdated::from_unix(self.rng.gen_range(LAST_UPDATED_START..LAST_UPDATED_END))
    }

    pub fn generate_record(&mut self) -> ProductRecord {
        ProductRecord {
            name: self.generate_name(),
            sku: self.generate_sku(),
            description: self.generate_description(),
            price: self.generate_price(),
            last_updated: self.generate_last_updated(),
        }
    }
}

/// Never ends; bound it with `take`
impl<R: Rng> Iterator for RecordGenerator<R> {
    type Item = ProductRecord;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_record())
    }
}

/// Renders `record` as one newline-terminated CSV line
#[must_use]
pub fn format_record(record: &ProductRecord) -> String {
    format!("{}\n", record)
}

/// Nanoseconds since the Unix epoch, or 0 if the clock is before it
#[must_use]
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            elapsed
                .as_secs()
                .wrapping_mul(1_000_000_000)
                .wrapping_add(u64::from(elapsed.subsec_nanos()))
        })
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDateTime;
    use regex::Regex;
    use rust_decimal::Decimal;

    use super::*;
    use crate::pools::TIMESTAMP_FORMAT;

    const SAMPLES: usize = 10_000;

    #[test]
    fn test_generate_name() {
        let mut generator = RecordGenerator::from_seed(7);
        for _ in 0..SAMPLES {
            let name = generator.generate_name();
            let (adjective, noun) = name.split_once(' ').unwrap();
            assert!(NAME_ADJECTIVES.contains(&adjective));
            assert!(NAME_NOUNS.contains(&noun));
        }
    }

    #[test]
    fn test_generate_name_covers_pools() {
        let mut generator = RecordGenerator::from_seed(11);
        let names: HashSet<String> = (0..SAMPLES).map(|_| generator.generate_name()).collect();
        assert_eq!(names.len(), NAME_ADJECTIVES.len() * NAME_NOUNS.len());
    }

    #[test]
    fn test_generate_sku() {
        let pattern = Regex::new(r"^SKU-[A-Z]{4}-[0-9]{3}$").unwrap();
        let mut generator = RecordGenerator::from_seed(42);
        for _ in 0..SAMPLES {
            let sku = generator.generate_sku();
            assert!(pattern.is_match(sku.as_str()), "bad sku {}", sku);
        }
    }

    #[test]
    fn test_generate_description() {
        let pattern =
            Regex::new(r"^This is a ([a-z-]+) ([a-z-]+) ([a-z-]+) product with features\.$")
                .unwrap();
        let mut generator = RecordGenerator::from_seed(3);
        for _ in 0..SAMPLES {
            let description = generator.generate_description();
            let captures = pattern.captures(&description).unwrap();
            assert!(DESCRIPTION_VERBS.contains(&&captures[1]));
            assert!(DESCRIPTION_ADJECTIVES.contains(&&captures[2]));
            assert!(DESCRIPTION_NOUNS.contains(&&captures[3]));
        }
    }

    #[test]
    fn test_generate_price() {
        let pattern = Regex::new(r"^\$[0-9]{3}\.[0-9]{2}$").unwrap();
        let min = Decimal::new(100, 0);
        let max = Decimal::new(1000, 0);
        let mut generator = RecordGenerator::from_seed(5);
        for _ in 0..SAMPLES {
            let price = generator.generate_price();
            assert!(price.amount() >= min && price.amount() < max);
            assert!(pattern.is_match(&price.to_string()), "bad price {}", price);
        }
    }

    #[test]
    fn test_generate_last_updated() {
        let mut generator = RecordGenerator::from_seed(9);
        for _ in 0..SAMPLES {
            let last_updated = generator.generate_last_updated();
            let parsed =
                NaiveDateTime::parse_from_str(&last_updated.to_string(), TIMESTAMP_FORMAT)
                    .unwrap();
            let secs = parsed.and_utc().timestamp();
            assert_eq!(secs, last_updated.timestamp());
            assert!((LAST_UPDATED_START..LAST_UPDATED_END).contains(&secs));
        }
    }

    #[test]
    fn test_format_record() {
        let mut generator = RecordGenerator::from_seed(13);
        for _ in 0..SAMPLES {
            let line = format_record(&generator.generate_record());
            assert!(line.ends_with('\n'));
            assert_eq!(line.matches('\n').count(), 1);
            assert_eq!(line.trim_end().split(',').count(), 5);
        }
    }

    #[test]
    fn test_same_seed_same_records() {
        let first: Vec<ProductRecord> = RecordGenerator::from_seed(1234).take(100).collect();
        let second: Vec<ProductRecord> = RecordGenerator::from_seed(1234).take(100).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_records() {
        let first: Vec<ProductRecord> = RecordGenerator::from_seed(1).take(100).collect();
        let second: Vec<ProductRecord> = RecordGenerator::from_seed(2).take(100).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_custom_rng() {
        let mut generator = RecordGenerator::new(rand::rngs::mock::StepRng::new(0, 0));
        assert_eq!(generator.generate_sku().as_str(), "SKU-AAAA-000");
        assert_eq!(generator.generate_price().to_string(), "$100.00");
        assert_eq!(
            generator.generate_last_updated().to_string(),
            "2023-09-01 00:00:00"
        );
    }
}
