//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        books::records::BookUuid,
        carts::{
            data::{AddCartItem, CartItemUpdate, CartLineUpdate, NewCart, NewCartItem},
            errors::CartsServiceError,
            item_service::PgCartItemsService,
            records::{Cart, CartItemRecord, CartItemUuid, CartRecord, CartUuid},
            repositories::PgCartsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items: PgCartItemsService,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            items: PgCartItemsService::new(db.clone()),
            carts_repository: PgCartsRepository::new(),
            db,
        }
    }

    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: CartRecord,
    ) -> Result<Cart, CartsServiceError> {
        let items = self.items.details_in(tx, record.uuid).await?;

        Cart::assemble(record, items).ok_or(CartsServiceError::PriceOverflow)
    }

    /// Resolve and lock the cart of the user with `username`.
    async fn lock_user_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
    ) -> Result<CartRecord, CartsServiceError> {
        let cart = self.carts_repository.find_user_cart(tx, username).await?;

        Span::current().record("cart_uuid", tracing::field::display(cart.uuid));

        Ok(self.carts_repository.lock_cart(tx, cart.uuid).await?)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    #[tracing::instrument(
        name = "carts.service.create_cart",
        skip(self, cart),
        fields(cart_uuid = %cart.uuid, anonymous = cart.user.is_none()),
        err
    )]
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.carts_repository.create_cart(&mut tx, cart).await?;

        tx.commit().await?;

        info!(cart_uuid = %record.uuid, "created cart");

        Cart::assemble(record, Vec::new()).ok_or(CartsServiceError::PriceOverflow)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.carts_repository.get_cart(&mut tx, cart).await?;
        let cart = self.load_cart(&mut tx, record).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_user_cart(&self, username: String) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .carts_repository
            .find_user_cart(&mut tx, &username)
            .await?;

        let cart = self.load_cart(&mut tx, record).await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(
            book_uuid = %item.book_uuid,
            quantity = item.quantity,
            cart_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn add_item(
        &self,
        username: String,
        item: AddCartItem,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.lock_user_cart(&mut tx, &username).await?;

        let existing = self
            .items
            .locked_item_for_book(&mut tx, cart.uuid, item.book_uuid)
            .await?;

        let written = match existing {
            None => {
                self.items
                    .create_in(
                        &mut tx,
                        NewCartItem {
                            uuid: CartItemUuid::new(),
                            cart_uuid: cart.uuid,
                            book_uuid: item.book_uuid,
                            quantity: item.quantity,
                        },
                    )
                    .await?
            }
            Some(_) => {
                self.items
                    .update_in(
                        &mut tx,
                        CartItemUpdate {
                            cart_uuid: cart.uuid,
                            book_uuid: item.book_uuid,
                            quantity: item.quantity,
                        },
                    )
                    .await?
            }
        };

        let view = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        info!(
            item_uuid = %written.uuid,
            total_price = written.total_price,
            "added book to cart"
        );

        Ok(view)
    }

    #[tracing::instrument(
        name = "carts.service.update_item",
        skip(self, update),
        fields(
            cart_uuid = %update.cart_uuid,
            item_uuid = %update.item_uuid,
            quantity = update.quantity
        ),
        err
    )]
    async fn update_item(&self, update: CartLineUpdate) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .carts_repository
            .lock_cart(&mut tx, update.cart_uuid)
            .await?;

        let target = self.items.locked_item(&mut tx, update.item_uuid).await?;

        if target.cart_uuid != cart.uuid || target.book_uuid != update.book_uuid {
            return Err(CartsServiceError::NotFound);
        }

        let updated = self
            .items
            .update_in(&mut tx, CartItemUpdate::from(&update))
            .await?;

        let view = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        info!(item_uuid = %updated.uuid, "updated cart item");

        Ok(view)
    }

    #[tracing::instrument(
        name = "carts.service.delete_item",
        skip(self),
        fields(book_uuid = %book, cart_uuid = tracing::field::Empty),
        err
    )]
    async fn delete_item(
        &self,
        username: String,
        book: BookUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.lock_user_cart(&mut tx, &username).await?;

        let item = self
            .items
            .locked_item_for_book(&mut tx, cart.uuid, book)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        let removed = self.items.remove_in(&mut tx, item.uuid).await?;

        tx.commit().await?;

        info!(item_uuid = %removed.uuid, "removed book from cart");

        Ok(removed)
    }

    #[tracing::instrument(
        name = "carts.service.delete_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.carts_repository.delete_cart(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(cart_uuid = %cart, "deleted cart");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a cart, anonymous unless a user is given.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Retrieve a cart with its items and their book details.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Retrieve the most recently created cart of the user with `username`.
    async fn get_user_cart(&self, username: String) -> Result<Cart, CartsServiceError>;

    /// Put a book in the user's cart. A book already in the cart has its
    /// quantity replaced and is re-priced instead of being added twice.
    async fn add_item(&self, username: String, item: AddCartItem)
    -> Result<Cart, CartsServiceError>;

    /// Change the quantity of an existing item of a cart.
    async fn update_item(&self, update: CartLineUpdate) -> Result<Cart, CartsServiceError>;

    /// Remove a book from the user's cart, returning the removed item.
    async fn delete_item(
        &self,
        username: String,
        book: BookUuid,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Deletes a cart together with all of its items.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}
