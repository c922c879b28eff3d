//! Test Helpers

use crate::{
    domain::{
        books::{
            BooksService, BooksServiceError,
            data::NewBook,
            records::{BookPricing, BookRecord, BookUuid},
        },
        carts::{
            CartsService, CartsServiceError,
            data::NewCart,
            records::{Cart, CartUuid},
        },
        users::records::UserUuid,
    },
    test::TestContext,
};

pub(crate) async fn create_book(
    ctx: &TestContext,
    pricing: BookPricing,
) -> Result<BookRecord, BooksServiceError> {
    let uuid = BookUuid::new();

    ctx.books
        .create_book(NewBook {
            uuid,
            title: format!("Book {uuid}"),
            author: "Ursula K. Le Guin".to_string(),
            publisher: "Ace Books".to_string(),
            cover_img: None,
            pricing,
        })
        .await
}

pub(crate) async fn create_cart(
    ctx: &TestContext,
    user: Option<UserUuid>,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .create_cart(NewCart {
            uuid: CartUuid::new(),
            user,
        })
        .await
}
