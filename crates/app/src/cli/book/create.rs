use bookcart_app::{
    context::AppContext,
    domain::books::{
        data::NewBook,
        records::{BookPricing, BookUuid},
    },
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateBookArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    author: String,

    #[arg(long)]
    publisher: String,

    /// Cover image URL
    #[arg(long)]
    cover_img: Option<String>,

    /// List price in minor currency units
    #[arg(long)]
    price: u64,

    /// Discounted price in minor units; defaults to the list price
    #[arg(long)]
    discounted_price: Option<u64>,

    /// Sell at the discounted price
    #[arg(long)]
    discount: bool,

    /// Optional book UUID; generated when omitted
    #[arg(long)]
    book_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateBookArgs, ctx: &AppContext) -> Result<String, String> {
    if args.discount && args.discounted_price.is_none() {
        return Err("--discount requires --discounted-price".to_string());
    }

    let pricing = BookPricing {
        price: args.price,
        discounted_price: args.discounted_price.unwrap_or(args.price),
        discount_check: args.discount,
    };

    let book = ctx
        .books
        .create_book(NewBook {
            uuid: args.book_uuid.map_or_else(BookUuid::new, BookUuid::from),
            title: args.title,
            author: args.author,
            publisher: args.publisher,
            cover_img: args.cover_img,
            pricing,
        })
        .await
        .map_err(|error| format!("failed to create book: {error}"))?;

    Ok(format!(
        "book_uuid: {}\ntitle: {}\nunit_price: {}",
        book.uuid,
        book.title,
        book.pricing().unit_price()
    ))
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::books::{MockBooksService, records::BookRecord};
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::cli::test_support;

    use super::*;

    fn args(discounted_price: Option<u64>, discount: bool) -> CreateBookArgs {
        CreateBookArgs {
            title: "Kindred".to_string(),
            author: "Octavia E. Butler".to_string(),
            publisher: "Doubleday".to_string(),
            cover_img: None,
            price: 20,
            discounted_price,
            discount,
            book_uuid: None,
        }
    }

    fn echo_book(book: NewBook) -> BookRecord {
        BookRecord {
            uuid: book.uuid,
            title: book.title,
            author: book.author,
            publisher: book.publisher,
            cover_img: book.cover_img,
            price: book.pricing.price,
            discounted_price: book.pricing.discounted_price,
            discount_check: book.pricing.discount_check,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn discounted_book_reports_discounted_unit_price() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_create_book()
            .withf(|book| book.pricing.discount_check && book.pricing.discounted_price == 15)
            .times(1)
            .returning(|book| Ok(echo_book(book)));

        let output = run(args(Some(15), true), &test_support::books_context(books)).await?;

        assert!(output.ends_with("unit_price: 15"));

        Ok(())
    }

    #[tokio::test]
    async fn discounted_price_defaults_to_list_price() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_create_book()
            .withf(|book| book.pricing.discounted_price == 20)
            .returning(|book| Ok(echo_book(book)));

        let output = run(args(None, false), &test_support::books_context(books)).await?;

        assert!(output.ends_with("unit_price: 20"));

        Ok(())
    }

    #[tokio::test]
    async fn discount_without_discounted_price_is_rejected() {
        let mut books = MockBooksService::new();

        books.expect_create_book().never();

        let result = run(args(None, true), &test_support::books_context(books)).await;

        assert!(result.is_err());
    }
}
