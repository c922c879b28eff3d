//! Cart Records

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{
        books::records::{BookSummary, BookUuid},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Who a cart belongs to. Fixed when the cart is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "user_uuid")]
pub enum CartOwner {
    Anonymous,
    User(UserUuid),
}

impl CartOwner {
    #[must_use]
    pub fn from_user(user: Option<UserUuid>) -> Self {
        user.map_or(Self::Anonymous, Self::User)
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    #[must_use]
    pub const fn user(&self) -> Option<UserUuid> {
        match self {
            Self::Anonymous => None,
            Self::User(user) => Some(*user),
        }
    }
}

/// Cart Record
#[derive(Debug, Clone, Serialize)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub owner: CartOwner,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
///
/// `price` is the unit price captured from the catalog the last time the item
/// was written; `total_price` is always `price * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub book_uuid: BookUuid,
    pub quantity: u32,
    pub price: u64,
    pub total_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cart item together with the book metadata shown in cart views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemDetails {
    #[serde(flatten)]
    pub item: CartItemRecord,
    pub book: BookSummary,
}

/// Cart view: the cart, its items and their combined total.
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    pub uuid: CartUuid,
    pub owner: CartOwner,
    pub is_anonymous: bool,
    pub items: Vec<CartItemDetails>,
    pub total: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Assemble a view from a cart record and its detailed items.
    ///
    /// Returns `None` when the item totals overflow `u64`.
    #[must_use]
    pub fn assemble(record: CartRecord, items: Vec<CartItemDetails>) -> Option<Self> {
        let total = items
            .iter()
            .try_fold(0_u64, |sum, details| sum.checked_add(details.item.total_price))?;

        Some(Self {
            uuid: record.uuid,
            owner: record.owner,
            is_anonymous: record.owner.is_anonymous(),
            items,
            total,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(book: BookUuid, quantity: u32, price: u64) -> CartItemDetails {
        let now = Timestamp::now();

        CartItemDetails {
            item: CartItemRecord {
                uuid: CartItemUuid::new(),
                cart_uuid: CartUuid::new(),
                book_uuid: book,
                quantity,
                price,
                total_price: price * u64::from(quantity),
                created_at: now,
                updated_at: now,
            },
            book: BookSummary {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                publisher: "Chilton".to_string(),
                cover_img: None,
            },
        }
    }

    fn record(owner: CartOwner) -> CartRecord {
        let now = Timestamp::now();

        CartRecord {
            uuid: CartUuid::new(),
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn owner_from_user_sets_anonymity() {
        let user = UserUuid::new();

        assert!(CartOwner::from_user(None).is_anonymous());
        assert!(!CartOwner::from_user(Some(user)).is_anonymous());
        assert_eq!(CartOwner::from_user(Some(user)).user(), Some(user));
        assert_eq!(CartOwner::Anonymous.user(), None);
    }

    #[test]
    fn assemble_sums_item_totals() {
        let items = vec![
            details(BookUuid::new(), 3, 15_00),
            details(BookUuid::new(), 1, 9_99),
        ];

        let cart = Cart::assemble(record(CartOwner::Anonymous), items);

        assert!(
            matches!(cart, Some(ref cart) if cart.total == 54_99 && cart.is_anonymous),
            "unexpected cart view: {cart:?}"
        );
    }

    #[test]
    fn assemble_empty_cart_has_zero_total() {
        let user = UserUuid::new();
        let cart = Cart::assemble(record(CartOwner::User(user)), Vec::new());

        assert!(
            matches!(cart, Some(ref cart) if cart.total == 0 && !cart.is_anonymous),
            "unexpected cart view: {cart:?}"
        );
    }

    #[test]
    fn assemble_rejects_overflowing_totals() {
        let mut big = details(BookUuid::new(), 1, 0);
        big.item.total_price = u64::MAX;

        let items = vec![big, details(BookUuid::new(), 1, 1)];

        assert!(Cart::assemble(record(CartOwner::Anonymous), items).is_none());
    }

    #[test]
    fn cart_item_details_serialize_flat_with_book() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(details(BookUuid::new(), 2, 5_00))?;

        assert_eq!(value["quantity"], 2);
        assert_eq!(value["total_price"], 10_00);
        assert_eq!(value["book"]["title"], "Dune");

        Ok(())
    }
}
