#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = studyhub_api::run().await {
        eprintln!("studyhub-api fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
