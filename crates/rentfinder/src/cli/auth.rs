//! Mock account CLI commands.

use clap::{Parser, Subcommand};

use super::Context;
use crate::output::{pretty, render};
use crate::state::AppState;

/// Account commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available account actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Sign in; any email with a password of at least 6 characters works.
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "RENTFINDER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check credentials for a new account without signing in.
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long, env = "RENTFINDER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the signed-in user.
    SignOut,
    /// Show the signed-in user.
    Whoami,
}

impl AuthCommand {
    pub async fn run(self, state: &AppState, ctx: Context) -> anyhow::Result<Option<String>> {
        let auth = &state.auth;
        let output = match self.action {
            AuthAction::SignIn { email, password } => {
                let user = auth.sign_in(&email, &password).await?;
                render(&user, ctx.format, |u| format!("Signed in:\n{}", pretty::format_user(u)))
            }
            AuthAction::SignUp { email, password } => {
                let user = auth.sign_up(&email, &password).await?;
                render(&user, ctx.format, |user| {
                    format!("Account ready, sign in to continue:\n{}", pretty::format_user(user))
                })
            }
            AuthAction::SignOut => {
                auth.sign_out().await?;
                return Ok(ctx.notice("Signed out".to_string()));
            }
            AuthAction::Whoami => {
                let user = auth.current_user().await?;
                render(&user, ctx.format, |user| match user {
                    Some(user) => pretty::format_user(user),
                    None => "Not signed in.".to_string(),
                })
            }
        };
        Ok(Some(output))
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use crate::config::Config;
    use crate::state::AppState;
    use clap::Parser;

    async fn run(state: &AppState, args: &[&str]) -> anyhow::Result<Option<String>> {
        let cli = Cli::try_parse_from(std::iter::once("rentfinder").chain(args.iter().copied()))?;
        cli.run(state).await
    }

    #[tokio::test]
    async fn test_sign_in_whoami_sign_out() {
        let state = AppState::in_memory(&Config {
            db_path: "unused.db".to_string(),
            db_key: "rentfinder_db".to_string(),
            auth_key: "auth_user".to_string(),
            in_memory: true,
        });

        run(&state, &["auth", "sign-in", "--email", "sam@example.com", "--password", "secret1"])
            .await
            .unwrap();
        let whoami = run(&state, &["auth", "whoami"]).await.unwrap().unwrap();
        assert!(whoami.starts_with("sam\n"));

        let signed_out = run(&state, &["--quiet", "auth", "sign-out"]).await.unwrap();
        assert_eq!(signed_out, None);

        let whoami = run(&state, &["--format", "json", "auth", "whoami"])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(whoami, "null");
    }

    #[tokio::test]
    async fn test_sign_in_rejects_short_password() {
        let state = AppState::in_memory(&Config {
            db_path: "unused.db".to_string(),
            db_key: "rentfinder_db".to_string(),
            auth_key: "auth_user".to_string(),
            in_memory: true,
        });

        let result = run(&state, &["auth", "sign-in", "--email", "sam@example.com", "--password", "123"]).await;

        assert!(result.is_err());
    }
}
