use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use writers_unblocker::api::{self, AppState};
use writers_unblocker::models::Config;
use writers_unblocker::ui::{self, HttpBackend, Layout, Osc52Clipboard};

#[derive(Debug, Parser)]
#[command(name = "writers-unblocker")]
#[command(about = "Find inspiration. Write scenes. Defeat the blank page.")]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the quote and scene generation API (default).
    Serve {
        /// Interface to bind; overrides HOST.
        #[arg(long)]
        host: Option<String>,
        /// Port to bind; overrides PORT.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Pick a quote and write a scene from the terminal.
    Write {
        /// Base URL of a running server.
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,
        /// Show quotes, form and scene together instead of one step at a time.
        #[arg(long)]
        single_page: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "writers_unblocker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => serve(host, port).await,
        Command::Write {
            server,
            single_page,
        } => write(server, single_page).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    info!("Starting writers-unblocker server");

    let config = Config::from_env()?;
    let host = host.unwrap_or_else(|| config.host.clone());
    let port = port.unwrap_or(config.port);

    let app = api::router(AppState::from_config(&config));

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid HOST:PORT combination {}:{}", host, port))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn write(server: String, single_page: bool) -> Result<()> {
    let backend = HttpBackend::new(server);
    let layout = if single_page {
        Layout::SinglePage
    } else {
        Layout::Stepped
    };
    let download_dir = std::env::current_dir()?;
    let mut clipboard = Osc52Clipboard::new(std::io::stdout());
    let mut out = std::io::stdout();

    ui::terminal::run(
        &backend,
        layout,
        BufReader::new(tokio::io::stdin()),
        &mut out,
        &mut clipboard,
        &download_dir,
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, Command};
    use clap::Parser;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let args = CliArgs::try_parse_from(["writers-unblocker"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_serve_port_flag() {
        let args = CliArgs::try_parse_from(["writers-unblocker", "serve", "--port", "8080"]).unwrap();
        match args.command {
            Some(Command::Serve { port, .. }) => assert_eq!(port, Some(8080)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_write_defaults_to_local_server() {
        let args = CliArgs::try_parse_from(["writers-unblocker", "write"]).unwrap();
        match args.command {
            Some(Command::Write {
                server,
                single_page,
            }) => {
                assert_eq!(server, "http://127.0.0.1:3000");
                assert!(!single_page);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
