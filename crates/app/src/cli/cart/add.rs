use bookcart_app::{
    context::AppContext,
    domain::{books::records::BookUuid, carts::data::AddCartItem},
};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct AddItemArgs {
    /// Owner of the cart to add to
    #[arg(long)]
    username: String,

    #[arg(long)]
    book_uuid: Uuid,

    /// Quantity to set; replaces the quantity when the book is already in the cart
    #[arg(long)]
    quantity: u32,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: AddItemArgs, ctx: &AppContext) -> Result<String, String> {
    let cart = ctx
        .carts
        .add_item(
            args.username,
            AddCartItem {
                book_uuid: BookUuid::from(args.book_uuid),
                quantity: args.quantity,
            },
        )
        .await
        .map_err(|error| format!("failed to add item: {error}"))?;

    render::cart(&cart, args.format)
}
