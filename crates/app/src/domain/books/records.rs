//! Book Records

use jiff::Timestamp;
use serde::Serialize;

use crate::uuids::TypedUuid;

/// Book UUID
pub type BookUuid = TypedUuid<BookRecord>;

/// Book Record
#[derive(Debug, Clone, Serialize)]
pub struct BookRecord {
    pub uuid: BookUuid,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub cover_img: Option<String>,
    pub price: u64,
    pub discounted_price: u64,
    pub discount_check: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BookRecord {
    #[must_use]
    pub fn pricing(&self) -> BookPricing {
        BookPricing {
            price: self.price,
            discounted_price: self.discounted_price,
            discount_check: self.discount_check,
        }
    }

    #[must_use]
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            cover_img: self.cover_img.clone(),
        }
    }
}

/// The catalog's current pricing for a book, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookPricing {
    pub price: u64,
    pub discounted_price: u64,
    pub discount_check: bool,
}

impl BookPricing {
    /// Price a single copy sells for right now.
    #[must_use]
    pub const fn unit_price(&self) -> u64 {
        if self.discount_check {
            self.discounted_price
        } else {
            self.price
        }
    }
}

/// Limited book metadata shown alongside cart items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub cover_img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_price_uses_discount_when_eligible() {
        let pricing = BookPricing {
            price: 20_00,
            discounted_price: 15_00,
            discount_check: true,
        };

        assert_eq!(pricing.unit_price(), 15_00);
    }

    #[test]
    fn unit_price_ignores_discount_when_not_eligible() {
        let pricing = BookPricing {
            price: 20_00,
            discounted_price: 15_00,
            discount_check: false,
        };

        assert_eq!(pricing.unit_price(), 20_00);
    }
}
