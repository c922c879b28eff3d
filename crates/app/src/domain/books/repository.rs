//! Books Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{try_bind_amount, try_get_amount},
    domain::books::{
        data::NewBook,
        records::{BookPricing, BookRecord, BookUuid},
    },
};

const CREATE_BOOK_SQL: &str = include_str!("sql/create_book.sql");
const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const GET_BOOK_PRICING_SQL: &str = include_str!("sql/get_book_pricing.sql");
const UPDATE_BOOK_PRICING_SQL: &str = include_str!("sql/update_book_pricing.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBooksRepository;

impl PgBooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: NewBook,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(CREATE_BOOK_SQL)
            .bind(book.uuid.into_uuid())
            .bind(book.title)
            .bind(book.author)
            .bind(book.publisher)
            .bind(book.cover_img)
            .bind(try_bind_amount(book.pricing.price)?)
            .bind(try_bind_amount(book.pricing.discounted_price)?)
            .bind(book.pricing.discount_check)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(GET_BOOK_SQL)
            .bind(book.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Catalog lookup used while pricing cart items.
    pub(crate) async fn get_book_pricing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<BookPricing, sqlx::Error> {
        query_as::<Postgres, BookPricing>(GET_BOOK_PRICING_SQL)
            .bind(book.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_book_pricing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        pricing: BookPricing,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(UPDATE_BOOK_PRICING_SQL)
            .bind(book.into_uuid())
            .bind(try_bind_amount(pricing.price)?)
            .bind(try_bind_amount(pricing.discounted_price)?)
            .bind(pricing.discount_check)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookPricing {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            price: try_get_amount(row, "price")?,
            discounted_price: try_get_amount(row, "discounted_price")?,
            discount_check: row.try_get("discount_check")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for BookRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BookUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            publisher: row.try_get("publisher")?,
            cover_img: row.try_get("cover_img")?,
            price: try_get_amount(row, "price")?,
            discounted_price: try_get_amount(row, "discounted_price")?,
            discount_check: row.try_get("discount_check")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
