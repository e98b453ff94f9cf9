//! One function per subcommand. Output goes to the supplied writer so the
//! commands can run against a mock backend in tests.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use api::auth::{LOGIN_FAILED, REGISTRATION_FAILED};
use api::{ApiClient, Transport};
use wire::{Credentials, Registration};

use crate::error::CliError;
use crate::render;

/// Subcommands that are a single request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Login { email: String, password: String },
    Register { username: String, email: String, password: String },
    Logout,
    Feed,
    Profile { user_id: String },
    Analytics,
    Notifications,
}

pub async fn execute<T: Transport, W: Write>(
    client: &ApiClient<T>,
    request: Request,
    out: &mut W,
) -> Result<(), CliError> {
    let lines = match request {
        Request::Login { email, password } => {
            if let Err(e) = client.login(&Credentials { email, password }).await {
                tracing::debug!(error = %e, "login failed");
                return Err(CliError::Rejected(LOGIN_FAILED));
            }
            vec!["Logged in".to_owned()]
        }
        Request::Register { username, email, password } => {
            let registration = Registration { username, email, password };
            if let Err(e) = client.register(&registration).await {
                tracing::debug!(error = %e, "registration failed");
                return Err(CliError::Rejected(REGISTRATION_FAILED));
            }
            vec!["Registered. Log in to continue.".to_owned()]
        }
        Request::Logout => {
            client.logout()?;
            vec!["Logged out".to_owned()]
        }
        Request::Feed => render::posts(&client.fetch_posts().await?),
        Request::Profile { user_id } => render::profile(&client.fetch_profile(&user_id).await?),
        Request::Analytics => render::analytics(&client.fetch_analytics().await?),
        Request::Notifications => render::notifications(&client.fetch_notifications().await?),
    };

    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
