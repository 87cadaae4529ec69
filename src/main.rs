use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use employee_maintenance::connector::api::Router;
use employee_maintenance::connector::configured_server_url;
use employee_maintenance::{Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "employee-maintenance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Server targeted by the employee and department commands
    /// [default: $EMPLOYEE_API_URL or http://localhost:8080]
    #[arg(long, global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Container::new(ContainerConfig {
        server_url: cli.server_url.unwrap_or_else(configured_server_url),
    });

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
