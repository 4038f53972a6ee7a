use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use jewelry_finder::auth::{CredentialVerifier, StaticCredentialVerifier};
use jewelry_finder::client::SearchClient;
use jewelry_finder::config::AppConfig;
use jewelry_finder::controller::SearchModeController;
use jewelry_finder::error::AppError;
use jewelry_finder::model::{ImagePayload, SearchMode};
use jewelry_finder::projector::StatusProjector;
use jewelry_finder::search_clients::http::HttpSearchBackend;
use jewelry_finder::session::{require_admin, SessionState, SessionStore};
use jewelry_finder::upload::AdminUploader;

#[derive(Parser)]
#[command(name = "jewelry-finder", about = "Search the jewelry catalog by text or image")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog with a text query
    Search { query: String },
    /// Search the catalog with an image; the backend decodes its text
    SearchImage { file: std::path::PathBuf },
    /// Log in to unlock the admin commands
    Login { username: String, password: String },
    /// Log out
    Logout,
    /// Upload a new catalog image (requires login)
    Upload { file: std::path::PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new()?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting jewelry-finder");

    match cli.command {
        Command::Search { query } => run_text_search(&config, query).await?,
        Command::SearchImage { file } => run_image_search(&config, &file).await?,
        Command::Login { username, password } => run_login(&config, &username, &password)?,
        Command::Logout => run_logout(&config)?,
        Command::Upload { file } => run_upload(&config, &file).await?,
    }

    Ok(())
}

fn new_controller(config: &AppConfig) -> Result<SearchModeController> {
    let backend = Arc::new(HttpSearchBackend::new(config)?);
    Ok(SearchModeController::new(SearchClient::new(backend)))
}

async fn run_text_search(config: &AppConfig, query: String) -> Result<()> {
    let mut controller = new_controller(config)?;
    controller.set_mode(SearchMode::Text);
    controller.set_query_text(query);
    log::debug!("Submitting one {:?} search attempt", controller.mode());

    if let Err(e) = controller.submit_text().await {
        return report_submit_error(e);
    }
    render(config, &controller)?;
    Ok(())
}

async fn run_image_search(config: &AppConfig, file: &Path) -> Result<()> {
    let mut controller = new_controller(config)?;
    controller.set_mode(SearchMode::Image);
    controller.set_image_payload(ImagePayload::from_file(file)?);
    log::debug!("Submitting one {:?} search attempt", controller.mode());

    if let Err(e) = controller.submit_image().await {
        return report_submit_error(e);
    }
    render(config, &controller)?;
    Ok(())
}

// Usage errors are inline prompts, not failures.
fn report_submit_error(e: AppError) -> Result<()> {
    if e.is_usage_error() {
        println!("{}", e);
        return Ok(());
    }
    Err(e.into())
}

fn render(config: &AppConfig, controller: &SearchModeController) -> Result<()> {
    let projector = StatusProjector::from_config(config)?;
    let view = projector.project(controller.outcome());

    if !view.status_line.is_empty() {
        println!("{}", view.status_line);
    }
    for url in &view.gallery {
        println!("{}", url);
    }
    Ok(())
}

fn run_login(config: &AppConfig, username: &str, password: &str) -> Result<()> {
    if !StaticCredentialVerifier.verify(username, password) {
        return Err(AppError::InvalidCredentials.into());
    }

    let store = SessionStore::from_config(config)?;
    store.save(SessionState { is_logged_in: true })?;
    info!("Operator {} logged in", username);
    println!("Login successful.");
    Ok(())
}

fn run_logout(config: &AppConfig) -> Result<()> {
    let store = SessionStore::from_config(config)?;
    store.save(SessionState {
        is_logged_in: false,
    })?;
    println!("Logged out.");
    Ok(())
}

async fn run_upload(config: &AppConfig, file: &Path) -> Result<()> {
    let store = SessionStore::from_config(config)?;
    require_admin(&store.load()?)?;

    let payload = ImagePayload::from_file(file)?;
    let uploader = AdminUploader::new(config)?;
    let receipt = uploader.upload(&payload).await?;

    println!("Uploaded to the {} folder.", receipt.metal);
    Ok(())
}
