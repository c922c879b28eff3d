use bookcart_app::context::AppContext;
use clap::{Args, Subcommand};

mod add;
mod create;
mod delete;
mod move_item;
mod remove;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Create a cart, anonymous unless a user is given
    Create(create::CreateCartArgs),
    /// Print a cart with its items and total
    Show(show::ShowCartArgs),
    /// Put a book in a user's cart
    Add(add::AddItemArgs),
    /// Change the quantity of a cart item
    Update(update::UpdateItemArgs),
    /// Remove a book from a user's cart
    Remove(remove::RemoveItemArgs),
    /// Move an item to another cart
    MoveItem(move_item::MoveItemArgs),
    /// Delete a cart and its items
    Delete(delete::DeleteCartArgs),
}

pub(crate) async fn run(command: CartCommand, ctx: &AppContext) -> Result<String, String> {
    match command.command {
        CartSubcommand::Create(args) => create::run(args, ctx).await,
        CartSubcommand::Show(args) => show::run(args, ctx).await,
        CartSubcommand::Add(args) => add::run(args, ctx).await,
        CartSubcommand::Update(args) => update::run(args, ctx).await,
        CartSubcommand::Remove(args) => remove::run(args, ctx).await,
        CartSubcommand::MoveItem(args) => move_item::run(args, ctx).await,
        CartSubcommand::Delete(args) => delete::run(args, ctx).await,
    }
}
