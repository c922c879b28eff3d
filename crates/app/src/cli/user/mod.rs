use bookcart_app::context::AppContext;
use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register a user that carts can belong to
    Create(create::CreateUserArgs),
}

pub(crate) async fn run(command: UserCommand, ctx: &AppContext) -> Result<String, String> {
    match command.command {
        UserSubcommand::Create(args) => create::run(args, ctx).await,
    }
}
