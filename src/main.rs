use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use livechat_agents::api::{self, AppState};
use livechat_agents::{App, Settings, pipeline};

#[derive(Debug, Parser)]
#[command(name = "livechat-agents", version, about = "Livechat department agents app backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the host-facing HTTP API (default)
    Serve,
    /// Print the configured department's agents and their status
    Agents,
    /// List departments that can be selected
    Departments,
    /// Notify and close a livechat room
    Close {
        /// Room id to close
        room_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let settings = Settings::new().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let app = App::from_settings(settings.application.clone())
        .context("failed to initialize chat server client")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&settings, app).await?,
        Command::Agents => {
            let report = pipeline::department_report(app.client(), app.settings()).await?;
            println!("{}", report.title());
            for line in &report.lines {
                println!("- {}", line);
            }
        }
        Command::Departments => {
            let departments = pipeline::selectable_departments(app.client(), app.settings()).await?;
            for department in departments {
                println!("{}\t{}", department.id, department.name);
            }
        }
        Command::Close { room_id } => {
            pipeline::close_conversation(app.client(), app.settings(), &room_id).await?;
            println!("closed room {}", room_id);
        }
    }

    Ok(())
}

async fn serve(settings: &Settings, app: App) -> anyhow::Result<()> {
    info!(
        server_url = %app.client().base_url(),
        department = %settings.application.department,
        "Starting livechat agents app"
    );

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Starting server on http://{}", addr);

    axum::serve(listener, api::router(AppState::new(app))).await?;
    Ok(())
}
