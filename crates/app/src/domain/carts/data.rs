//! Cart Data

use crate::domain::{
    books::records::BookUuid,
    carts::records::{CartItemUuid, CartUuid},
    users::records::UserUuid,
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub user: Option<UserUuid>,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub book_uuid: BookUuid,
    pub quantity: u32,
}

/// Book and quantity to put in a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCartItem {
    pub book_uuid: BookUuid,
    pub quantity: u32,
}

/// Cart Item Update Data, addressed by (cart, book).
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemUpdate {
    pub cart_uuid: CartUuid,
    pub book_uuid: BookUuid,
    pub quantity: u32,
}

/// Cart line update as requested against a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineUpdate {
    pub cart_uuid: CartUuid,
    pub item_uuid: CartItemUuid,
    pub book_uuid: BookUuid,
    pub quantity: u32,
}

impl From<&CartLineUpdate> for CartItemUpdate {
    fn from(update: &CartLineUpdate) -> Self {
        Self {
            cart_uuid: update.cart_uuid,
            book_uuid: update.book_uuid,
            quantity: update.quantity,
        }
    }
}
