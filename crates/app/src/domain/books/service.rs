//! Books service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::books::{
        data::NewBook,
        errors::BooksServiceError,
        records::{BookPricing, BookRecord, BookUuid},
        repository::PgBooksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBooksService {
    db: Db,
    repository: PgBooksRepository,
}

impl PgBooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBooksRepository::new(),
        }
    }
}

#[async_trait]
impl BooksService for PgBooksService {
    #[tracing::instrument(
        name = "books.service.create_book",
        skip(self, book),
        fields(book_uuid = %book.uuid),
        err
    )]
    async fn create_book(&self, book: NewBook) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_book(&mut tx, book).await?;

        tx.commit().await?;

        info!(book_uuid = %created.uuid, "created book");

        Ok(created)
    }

    async fn get_book(&self, book: BookUuid) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(book)
    }

    #[tracing::instrument(
        name = "books.service.update_pricing",
        skip(self, pricing),
        fields(book_uuid = %book),
        err
    )]
    async fn update_pricing(
        &self,
        book: BookUuid,
        pricing: BookPricing,
    ) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_book_pricing(&mut tx, book, pricing)
            .await?;

        tx.commit().await?;

        info!(book_uuid = %book, "updated book pricing");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait BooksService: Send + Sync {
    /// Adds a book to the catalog.
    async fn create_book(&self, book: NewBook) -> Result<BookRecord, BooksServiceError>;

    /// Retrieve a single book, including its current pricing.
    async fn get_book(&self, book: BookUuid) -> Result<BookRecord, BooksServiceError>;

    /// Replace the price, discounted price and discount flag of a book.
    ///
    /// Existing cart items keep the price snapshotted when they were last
    /// written.
    async fn update_pricing(
        &self,
        book: BookUuid,
        pricing: BookPricing,
    ) -> Result<BookRecord, BooksServiceError>;
}
