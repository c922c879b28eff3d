use bookcart_app::{
    context::AppContext,
    domain::{
        carts::{data::NewCart, records::CartUuid},
        users::records::UserUuid,
    },
};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct CreateCartArgs {
    /// Owning user; the cart is anonymous when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,

    /// Optional cart UUID; generated when omitted
    #[arg(long)]
    cart_uuid: Option<Uuid>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: CreateCartArgs, ctx: &AppContext) -> Result<String, String> {
    let cart = ctx
        .carts
        .create_cart(NewCart {
            uuid: args.cart_uuid.map_or_else(CartUuid::new, CartUuid::from),
            user: args.user_uuid.map(UserUuid::from),
        })
        .await
        .map_err(|error| format!("failed to create cart: {error}"))?;

    render::cart(&cart, args.format)
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::carts::{
        CartsServiceError, MockCartsService, records::CartOwner,
    };
    use testresult::TestResult;

    use crate::cli::{render::fixtures, test_support};

    use super::*;

    #[tokio::test]
    async fn creates_anonymous_cart_without_user() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_create_cart()
            .withf(|cart| cart.user.is_none())
            .times(1)
            .returning(|_| Ok(fixtures::cart(CartOwner::Anonymous, Vec::new())));

        let output = run(
            CreateCartArgs {
                user_uuid: None,
                cart_uuid: None,
                format: OutputFormat::Text,
            },
            &test_support::carts_context(carts),
        )
        .await?;

        assert!(output.contains("owner: anonymous"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let mut carts = MockCartsService::new();

        carts
            .expect_create_cart()
            .withf(|cart| cart.user.is_some())
            .returning(|_| Err(CartsServiceError::InvalidReference));

        let result = run(
            CreateCartArgs {
                user_uuid: Some(Uuid::now_v7()),
                cart_uuid: None,
                format: OutputFormat::Text,
            },
            &test_support::carts_context(carts),
        )
        .await;

        assert_eq!(
            result,
            Err("failed to create cart: related resource not found".to_string())
        );
    }
}
