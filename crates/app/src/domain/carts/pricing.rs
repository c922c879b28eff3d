//! Cart item pricing and lookup.

use crate::domain::{
    books::records::{BookPricing, BookUuid},
    carts::{errors::CartsServiceError, records::CartItemRecord},
};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9_999;

/// Prices written to a cart item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrice {
    pub unit_price: u64,
    pub total_price: u64,
}

/// Rejects quantities outside `1..=MAX_QUANTITY_PER_ITEM`.
pub fn validate_quantity(quantity: u32) -> Result<u32, CartsServiceError> {
    if quantity == 0 || quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CartsServiceError::InvalidQuantity(quantity));
    }

    Ok(quantity)
}

/// Price `quantity` copies of a book at its current catalog price.
pub fn price_line(pricing: BookPricing, quantity: u32) -> Result<LinePrice, CartsServiceError> {
    let quantity = validate_quantity(quantity)?;
    let unit_price = pricing.unit_price();

    let total_price = unit_price
        .checked_mul(u64::from(quantity))
        .ok_or(CartsServiceError::PriceOverflow)?;

    Ok(LinePrice {
        unit_price,
        total_price,
    })
}

/// Locate the item for `book` among items already loaded for one cart.
pub fn find_item_by_book(items: &[CartItemRecord], book: BookUuid) -> Option<&CartItemRecord> {
    items.iter().find(|item| item.book_uuid == book)
}
