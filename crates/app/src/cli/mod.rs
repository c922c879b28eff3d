use bookcart_app::{
    config::{DatabaseConfig, LoggingConfig},
    context::AppContext,
};
use clap::{Parser, Subcommand};

mod book;
mod cart;
mod db;
mod render;
mod user;

#[derive(Debug, Parser)]
#[command(name = "bookcart-app", about = "Bookstore cart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Book(book::BookCommand),
    Cart(cart::CartCommand),
}

impl Cli {
    /// Run the selected command, returning what should be printed.
    pub(crate) async fn run(self) -> Result<String, String> {
        let url = self.database.url()?;

        match self.command {
            Commands::Db(command) => db::run(command, url).await,
            Commands::User(command) => user::run(command, &connect(url).await?).await,
            Commands::Book(command) => book::run(command, &connect(url).await?).await,
            Commands::Cart(command) => cart::run(command, &connect(url).await?).await,
        }
    }
}

async fn connect(url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(url).await.map_err(|error| {
        let source = std::error::Error::source(&error)
            .map_or_else(String::new, |source| format!(": {source}"));

        format!("{error}{source}")
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use bookcart_app::{
        context::AppContext,
        domain::{
            books::MockBooksService,
            carts::{MockCartItemsService, MockCartsService},
            users::MockUsersService,
        },
    };

    /// App context where only the given mocks have expectations.
    pub(crate) fn context(
        books: MockBooksService,
        users: MockUsersService,
        carts: MockCartsService,
        items: MockCartItemsService,
    ) -> AppContext {
        AppContext {
            books: Arc::new(books),
            users: Arc::new(users),
            carts: Arc::new(carts),
            items: Arc::new(items),
        }
    }

    pub(crate) fn users_context(users: MockUsersService) -> AppContext {
        context(
            MockBooksService::new(),
            users,
            MockCartsService::new(),
            MockCartItemsService::new(),
        )
    }

    pub(crate) fn books_context(books: MockBooksService) -> AppContext {
        context(
            books,
            MockUsersService::new(),
            MockCartsService::new(),
            MockCartItemsService::new(),
        )
    }

    pub(crate) fn carts_context(carts: MockCartsService) -> AppContext {
        context(
            MockBooksService::new(),
            MockUsersService::new(),
            carts,
            MockCartItemsService::new(),
        )
    }

    pub(crate) fn items_context(items: MockCartItemsService) -> AppContext {
        context(
            MockBooksService::new(),
            MockUsersService::new(),
            MockCartsService::new(),
            items,
        )
    }
}
