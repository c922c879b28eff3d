use bookcart_app::{context::AppContext, domain::carts::records::CartUuid};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteCartArgs {
    #[arg(long)]
    cart_uuid: Uuid,
}

pub(crate) async fn run(args: DeleteCartArgs, ctx: &AppContext) -> Result<String, String> {
    ctx.carts
        .delete_cart(CartUuid::from(args.cart_uuid))
        .await
        .map_err(|error| format!("failed to delete cart: {error}"))?;

    Ok(format!("deleted cart {}", args.cart_uuid))
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::carts::{CartsServiceError, MockCartsService};
    use testresult::TestResult;

    use crate::cli::test_support;

    use super::*;

    #[tokio::test]
    async fn deletes_cart() -> TestResult {
        let cart_uuid = Uuid::now_v7();
        let mut carts = MockCartsService::new();

        carts
            .expect_delete_cart()
            .withf(move |cart| Uuid::from(*cart) == cart_uuid)
            .times(1)
            .returning(|_| Ok(()));

        let output = run(DeleteCartArgs { cart_uuid }, &test_support::carts_context(carts)).await?;

        assert_eq!(output, format!("deleted cart {cart_uuid}"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_is_reported() {
        let mut carts = MockCartsService::new();

        carts
            .expect_delete_cart()
            .returning(|_| Err(CartsServiceError::NotFound));

        let result = run(
            DeleteCartArgs {
                cart_uuid: Uuid::now_v7(),
            },
            &test_support::carts_context(carts),
        )
        .await;

        assert!(result.is_err());
    }
}
