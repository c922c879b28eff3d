//! Book Data

use crate::domain::books::records::{BookPricing, BookUuid};

/// New Book Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub uuid: BookUuid,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub cover_img: Option<String>,
    pub pricing: BookPricing,
}
