use petrel::config::Config;
use petrel::server::listener::Listener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_args(std::env::args().skip(1));

    let listener = Listener::bind(&cfg).await?;

    tokio::select! {
        res = listener.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
