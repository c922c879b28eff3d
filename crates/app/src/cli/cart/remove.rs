use bookcart_app::{context::AppContext, domain::books::records::BookUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct RemoveItemArgs {
    /// Owner of the cart to remove from
    #[arg(long)]
    username: String,

    #[arg(long)]
    book_uuid: Uuid,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub(crate) async fn run(args: RemoveItemArgs, ctx: &AppContext) -> Result<String, String> {
    let removed = ctx
        .carts
        .delete_item(args.username, BookUuid::from(args.book_uuid))
        .await
        .map_err(|error| format!("failed to remove item: {error}"))?;

    render::item(&removed, args.format)
}
