use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use todo_api::{Config, InMemoryStore, TodoItemService, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    config.logging.init();

    let store = InMemoryStore::new();
    for item in config.seed_items() {
        store.insert(item).await?;
    }
    info!(count = config.seed.len(), "seeded store");

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    todo_api::run(listener, TodoItemService::new(store)).await?;
    Ok(())
}
