use anyhow::Result;

mod app;
mod fixtures;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
