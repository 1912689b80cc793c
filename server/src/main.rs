use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("server running on http://{addr}");
    todo_server::run(listener).await?;
    Ok(())
}
