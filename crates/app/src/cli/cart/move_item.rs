use bookcart_app::{
    context::AppContext,
    domain::carts::records::{CartItemUuid, CartUuid},
};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct MoveItemArgs {
    #[arg(long)]
    item_uuid: Uuid,

    /// Cart that takes ownership of the item
    #[arg(long)]
    cart_uuid: Uuid,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: MoveItemArgs, ctx: &AppContext) -> Result<String, String> {
    let item = ctx
        .items
        .connect_new_owner(
            CartItemUuid::from(args.item_uuid),
            CartUuid::from(args.cart_uuid),
        )
        .await
        .map_err(|error| format!("failed to move item: {error}"))?;

    render::item(&item, args.format)
}
