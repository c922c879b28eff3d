use bookcart_app::{context::AppContext, domain::carts::records::CartUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    #[arg(long, conflicts_with = "username", required_unless_present = "username")]
    cart_uuid: Option<Uuid>,

    /// Show the most recently created cart of this user
    #[arg(long)]
    username: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: ShowCartArgs, ctx: &AppContext) -> Result<String, String> {
    let cart = match (args.cart_uuid, args.username) {
        (Some(cart), _) => ctx.carts.get_cart(CartUuid::from(cart)).await,
        (None, Some(username)) => ctx.carts.get_user_cart(username).await,
        (None, None) => return Err("either --cart-uuid or --username is required".to_string()),
    }
    .map_err(|error| format!("failed to load cart: {error}"))?;

    render::cart(&cart, args.format)
}
