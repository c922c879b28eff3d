use bookcart_app::{
    context::AppContext,
    domain::{
        books::records::BookUuid,
        carts::{
            data::CartLineUpdate,
            records::{CartItemUuid, CartUuid},
        },
    },
};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct UpdateItemArgs {
    #[arg(long)]
    cart_uuid: Uuid,

    #[arg(long)]
    item_uuid: Uuid,

    #[arg(long)]
    book_uuid: Uuid,

    #[arg(long)]
    quantity: u32,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: UpdateItemArgs, ctx: &AppContext) -> Result<String, String> {
    let cart = ctx
        .carts
        .update_item(CartLineUpdate {
            cart_uuid: CartUuid::from(args.cart_uuid),
            item_uuid: CartItemUuid::from(args.item_uuid),
            book_uuid: BookUuid::from(args.book_uuid),
            quantity: args.quantity,
        })
        .await
        .map_err(|error| format!("failed to update item: {error}"))?;

    render::cart(&cart, args.format)
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::carts::{CartsServiceError, MockCartsService, records::CartOwner};
    use testresult::TestResult;

    use crate::cli::{render::fixtures, test_support};

    use super::*;

    fn args(cart_uuid: Uuid, item_uuid: Uuid, quantity: u32) -> UpdateItemArgs {
        UpdateItemArgs {
            cart_uuid,
            item_uuid,
            book_uuid: Uuid::now_v7(),
            quantity,
            format: OutputFormat::Text,
        }
    }

    #[tokio::test]
    async fn updates_line_and_prints_cart() -> TestResult {
        let cart_uuid = CartUuid::new();
        let item = fixtures::item(cart_uuid, 5, 15);
        let item_uuid = item.uuid;
        let view = fixtures::cart(CartOwner::Anonymous, vec![item]);

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .withf(move |update| {
                update.cart_uuid == cart_uuid
                    && update.item_uuid == item_uuid
                    && update.quantity == 5
            })
            .times(1)
            .returning(move |_| Ok(view.clone()));

        let output = run(
            args(cart_uuid.into(), item_uuid.into(), 5),
            &test_support::carts_context(carts),
        )
        .await?;

        assert!(output.ends_with("total: 75"));

        Ok(())
    }

    #[tokio::test]
    async fn item_of_another_cart_is_reported() {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .returning(|_| Err(CartsServiceError::NotFound));

        let result = run(
            args(Uuid::now_v7(), Uuid::now_v7(), 1),
            &test_support::carts_context(carts),
        )
        .await;

        assert!(result.is_err_and(|error| error.starts_with("failed to update item")));
    }
}
