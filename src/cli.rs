use anyhow::{Context, bail};
use chrono::{TimeDelta, Utc};
use clap::{Parser, Subcommand};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::config::AppConfig;
use crate::entities::v1::{personal_access_tokens, users};
use crate::responses::v1::user::User;
use crate::{database, server};

#[derive(Debug, Parser)]
#[command(name = "lighter-sanctum", version, about = "Token guarded current-user API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations
    Migrate,
    /// Manage users
    #[command(subcommand)]
    User(UserCommand),
    /// Manage personal access tokens
    #[command(subcommand)]
    Token(TokenCommand),
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user and print it as JSON
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a token, the plain-text value is printed once
    Issue {
        #[arg(long)]
        user_id: i32,
        #[arg(long, default_value = "cli")]
        name: String,
        /// May be repeated, defaults to `*`
        #[arg(long = "ability")]
        abilities: Vec<String>,
        /// Lifetime in minutes
        #[arg(long)]
        expires_in: Option<u32>,
    },
    /// Delete a token by id
    Revoke {
        #[arg(long)]
        id: i32,
    },
}

impl Cli {
    pub async fn run(self, config: AppConfig) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Serve) {
            Command::Serve => server::run(config).await,
            Command::Migrate => {
                let db = database::connect(&config.database).await?;
                database::migrate(&db).await?;

                Ok(())
            }
            Command::User(UserCommand::Create { name, email }) => {
                let db = connect(&config).await?;
                let user = users::Model::create(&db, &name, &email)
                    .await
                    .context("Failed to create user")?;

                println!("{}", serde_json::to_string_pretty(&User::from(user))?);

                Ok(())
            }
            Command::Token(TokenCommand::Issue {
                user_id,
                name,
                abilities,
                expires_in,
            }) => {
                let db = connect(&config).await?;

                if users::Entity::find_by_id(user_id).one(&db).await?.is_none() {
                    bail!("User {user_id} not found");
                }

                let expires_at =
                    expires_in.map(|minutes| Utc::now() + TimeDelta::minutes(i64::from(minutes)));
                let issued = personal_access_tokens::Model::issue(
                    &db,
                    user_id,
                    &name,
                    &abilities,
                    expires_at,
                    &config.auth.token_prefix,
                )
                .await
                .context("Failed to issue token")?;

                println!("{}", issued.plain_text);

                Ok(())
            }
            Command::Token(TokenCommand::Revoke { id }) => {
                let db = connect(&config).await?;

                if !personal_access_tokens::Model::revoke(&db, id).await? {
                    bail!("Token {id} not found");
                }

                ::tracing::info!(token_id = id, "Token revoked");

                Ok(())
            }
        }
    }
}

async fn connect(config: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = database::connect(&config.database).await?;

    if config.database.migrate {
        database::migrate(&db).await?;
    }

    Ok(db)
}
