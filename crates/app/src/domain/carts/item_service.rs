//! Cart items service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        books::{records::BookUuid, repository::PgBooksRepository},
        carts::{
            data::{CartItemUpdate, NewCartItem},
            errors::CartsServiceError,
            pricing::{self, find_item_by_book},
            records::{CartItemDetails, CartItemRecord, CartItemUuid, CartUuid},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartItemsService {
    db: Db,
    carts: PgCartsRepository,
    items: PgCartItemsRepository,
    books: PgBooksRepository,
}

impl PgCartItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts: PgCartsRepository::new(),
            items: PgCartItemsRepository::new(),
            books: PgBooksRepository::new(),
        }
    }

    /// Price and insert a new item inside the caller's transaction.
    pub(crate) async fn create_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        pricing::validate_quantity(item.quantity)?;

        self.carts.lock_cart(tx, item.cart_uuid).await?;

        let book = self.books.get_book_pricing(tx, item.book_uuid).await?;
        let line = pricing::price_line(book, item.quantity)?;

        Ok(self.items.create_cart_item(tx, item, line).await?)
    }

    /// Re-price the item for (cart, book) with the new quantity.
    pub(crate) async fn update_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        update: CartItemUpdate,
    ) -> Result<CartItemRecord, CartsServiceError> {
        pricing::validate_quantity(update.quantity)?;

        let existing = self
            .locked_item_for_book(tx, update.cart_uuid, update.book_uuid)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        self.reprice(tx, &existing, update.quantity).await
    }

    /// The item for (cart, book), row-locked for the rest of the transaction.
    pub(crate) async fn locked_item_for_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        book: BookUuid,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        Ok(self.items.lock_cart_item_for_book(tx, cart, book).await?)
    }

    pub(crate) async fn locked_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        Ok(self.items.lock_cart_item(tx, item).await?)
    }

    pub(crate) async fn remove_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        Ok(self.items.delete_cart_item(tx, item).await?)
    }

    pub(crate) async fn details_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItemDetails>, CartsServiceError> {
        Ok(self.items.list_cart_item_details(tx, cart).await?)
    }

    async fn reprice(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        existing: &CartItemRecord,
        quantity: u32,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let book = self.books.get_book_pricing(tx, existing.book_uuid).await?;
        let line = pricing::price_line(book, quantity)?;

        Ok(self
            .items
            .update_cart_item(tx, existing.uuid, quantity, line)
            .await?)
    }
}

#[async_trait]
impl CartItemsService for PgCartItemsService {
    #[tracing::instrument(
        name = "cart_items.service.create_item",
        skip(self, item),
        fields(
            item_uuid = %item.uuid,
            cart_uuid = %item.cart_uuid,
            book_uuid = %item.book_uuid,
            quantity = item.quantity
        ),
        err
    )]
    async fn create_item(&self, item: NewCartItem) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.create_in(&mut tx, item).await?;

        tx.commit().await?;

        info!(
            item_uuid = %created.uuid,
            unit_price = created.price,
            total_price = created.total_price,
            "created cart item"
        );

        Ok(created)
    }

    async fn list_items(&self) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let items = self.items.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn list_cart_items(
        &self,
        cart: CartUuid,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.carts.get_cart(&mut tx, cart).await?;

        let items = self.items.list_cart_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn find_item_for_book(
        &self,
        cart: CartUuid,
        book: BookUuid,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        let items = self.list_cart_items(cart).await?;

        Ok(find_item_by_book(&items, book).cloned())
    }

    async fn get_item(&self, item: CartItemUuid) -> Result<CartItemDetails, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let details = self.items.get_cart_item_details(&mut tx, item).await?;

        tx.commit().await?;

        Ok(details)
    }

    #[tracing::instrument(
        name = "cart_items.service.update_item",
        skip(self, update),
        fields(
            cart_uuid = %update.cart_uuid,
            book_uuid = %update.book_uuid,
            quantity = update.quantity
        ),
        err
    )]
    async fn update_item(
        &self,
        update: CartItemUpdate,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self.update_in(&mut tx, update).await?;

        tx.commit().await?;

        info!(item_uuid = %updated.uuid, "updated cart item");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "cart_items.service.update_item_quantity",
        skip(self),
        fields(item_uuid = %item),
        err
    )]
    async fn update_item_quantity(
        &self,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemRecord, CartsServiceError> {
        pricing::validate_quantity(quantity)?;

        let mut tx = self.db.begin_transaction().await?;

        let existing = self.locked_item(&mut tx, item).await?;
        let updated = self.reprice(&mut tx, &existing, quantity).await?;

        tx.commit().await?;

        info!(item_uuid = %updated.uuid, "updated cart item quantity");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "cart_items.service.connect_new_owner",
        skip(self),
        fields(item_uuid = %item, cart_uuid = %cart),
        err
    )]
    async fn connect_new_owner(
        &self,
        item: CartItemUuid,
        cart: CartUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.carts.lock_cart(&mut tx, cart).await?;

        let moved = self.items.move_cart_item(&mut tx, item, cart).await?;

        tx.commit().await?;

        info!(item_uuid = %moved.uuid, cart_uuid = %moved.cart_uuid, "moved cart item");

        Ok(moved)
    }

    #[tracing::instrument(
        name = "cart_items.service.remove_item",
        skip(self),
        fields(item_uuid = %item),
        err
    )]
    async fn remove_item(&self, item: CartItemUuid) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let removed = self.remove_in(&mut tx, item).await?;

        tx.commit().await?;

        info!(item_uuid = %removed.uuid, "removed cart item");

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartItemsService: Send + Sync {
    /// Price a book from the catalog and add it to a cart as a new item.
    async fn create_item(&self, item: NewCartItem) -> Result<CartItemRecord, CartsServiceError>;

    /// Every cart item across all carts.
    async fn list_items(&self) -> Result<Vec<CartItemRecord>, CartsServiceError>;

    /// All items of one cart. Unknown carts are `NotFound`.
    async fn list_cart_items(&self, cart: CartUuid)
    -> Result<Vec<CartItemRecord>, CartsServiceError>;

    /// The item holding `book` in `cart`, if there is one. Unknown carts are
    /// `NotFound`.
    async fn find_item_for_book(
        &self,
        cart: CartUuid,
        book: BookUuid,
    ) -> Result<Option<CartItemRecord>, CartsServiceError>;

    /// A single item with its book's title, author, publisher and cover.
    async fn get_item(&self, item: CartItemUuid) -> Result<CartItemDetails, CartsServiceError>;

    /// Set the quantity of the item for (cart, book) and re-price it.
    async fn update_item(&self, update: CartItemUpdate)
    -> Result<CartItemRecord, CartsServiceError>;

    /// Set the quantity of an item addressed by UUID and re-price it.
    async fn update_item_quantity(
        &self,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Move an item to another cart.
    async fn connect_new_owner(
        &self,
        item: CartItemUuid,
        cart: CartUuid,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Delete an item, returning what was removed.
    async fn remove_item(&self, item: CartItemUuid) -> Result<CartItemRecord, CartsServiceError>;
}
