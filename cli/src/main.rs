mod chat;
mod commands;
mod error;
mod render;
mod socket;
mod store;
mod transport;

#[cfg(test)]
mod test_support;


use std::io::{self, Write};
use std::path::PathBuf;

use api::{ApiClient, Messenger, Session};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::commands::Request;
use crate::error::CliError;
use crate::socket::TungsteniteConnector;
use crate::store::FileTokenStore;
use crate::transport::ReqwestTransport;

#[derive(Parser, Debug)]
#[command(name = "pulse", about = "Pulse social backend from the terminal")]
struct Cli {
    #[arg(long, env = "PULSE_API_BASE", default_value = "http://localhost:5000/api")]
    api_base: String,

    #[arg(long, env = "PULSE_REALTIME_ORIGIN", default_value = "http://localhost:5000")]
    realtime_origin: String,

    /// File holding the session token between invocations.
    #[arg(long, env = "PULSE_TOKEN_FILE", default_value = ".pulse-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token and store it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Remove the stored session token.
    Logout,
    Feed,
    Profile {
        user_id: String,
    },
    Analytics,
    Notifications,
    /// Send stdin lines as chat messages and print received ones until EOF.
    Chat,
}

impl Command {
    fn into_request(self) -> Option<Request> {
        Some(match self {
            Self::Login { email, password } => Request::Login { email, password },
            Self::Register { username, email, password } => Request::Register { username, email, password },
            Self::Logout => Request::Logout,
            Self::Feed => Request::Feed,
            Self::Profile { user_id } => Request::Profile { user_id },
            Self::Analytics => Request::Analytics,
            Self::Notifications => Request::Notifications,
            Self::Chat => return None,
        })
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = run(Cli::parse()).await;
    let code = report(result, &mut io::stderr().lock());
    // The stdin reader thread never finishes on its own; exit without waiting for it.
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session = Session::new(FileTokenStore::new(&cli.token_file));
    let mut out = io::stdout().lock();

    match cli.command.into_request() {
        Some(request) => {
            let client = ApiClient::new(cli.api_base, session, ReqwestTransport::default());
            commands::execute(&client, request, &mut out).await?;
        }
        None => {
            let endpoint = api::realtime::socket_endpoint(&cli.realtime_origin)
                .ok_or_else(|| CliError::InvalidOrigin(cli.realtime_origin.clone()))?;
            let messenger = Messenger::new(TungsteniteConnector, endpoint, session);
            chat::run(messenger, BufReader::new(tokio::io::stdin()), &mut out).await?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print a failure as `error: <message>` and return the process exit code.
fn report<W: Write>(result: Result<(), CliError>, err: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            // Nothing left to report to if stderr itself fails.
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}
