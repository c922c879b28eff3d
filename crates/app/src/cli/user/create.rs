use bookcart_app::{
    context::AppContext,
    domain::users::{data::NewUser, records::UserUuid},
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Unique username
    #[arg(long)]
    username: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateUserArgs, ctx: &AppContext) -> Result<String, String> {
    if args.username.trim().is_empty() {
        return Err("username cannot be empty".to_string());
    }

    let user = ctx
        .users
        .create_user(NewUser {
            uuid: args.user_uuid.map_or_else(UserUuid::new, UserUuid::from),
            username: args.username,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    Ok(format!(
        "user_uuid: {}\nusername: {}",
        user.uuid, user.username
    ))
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::users::{MockUsersService, UsersServiceError, records::UserRecord};
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::cli::test_support;

    use super::*;

    #[tokio::test]
    async fn creates_user_with_given_uuid() -> TestResult {
        let uuid = Uuid::now_v7();
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .withf(move |user| user.username == "ada" && Uuid::from(user.uuid) == uuid)
            .times(1)
            .returning(|user| {
                Ok(UserRecord {
                    uuid: user.uuid,
                    username: user.username,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                })
            });

        let output = run(
            CreateUserArgs {
                username: "ada".to_string(),
                user_uuid: Some(uuid),
            },
            &test_support::users_context(users),
        )
        .await?;

        assert_eq!(output, format!("user_uuid: {uuid}\nusername: ada"));

        Ok(())
    }

    #[tokio::test]
    async fn blank_username_is_rejected_before_the_service() {
        let mut users = MockUsersService::new();

        users.expect_create_user().never();

        let result = run(
            CreateUserArgs {
                username: "  ".to_string(),
                user_uuid: None,
            },
            &test_support::users_context(users),
        )
        .await;

        assert_eq!(result, Err("username cannot be empty".to_string()));
    }

    #[tokio::test]
    async fn duplicate_username_is_reported() {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .returning(|_| Err(UsersServiceError::AlreadyExists));

        let result = run(
            CreateUserArgs {
                username: "ada".to_string(),
                user_uuid: None,
            },
            &test_support::users_context(users),
        )
        .await;

        assert!(result.is_err_and(|error| error.starts_with("failed to create user")));
    }
}
