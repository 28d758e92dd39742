#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flipdeck_server::run().await
}
