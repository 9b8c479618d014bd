use staticd::config::Config;
use staticd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_args(std::env::args()).unwrap_or_else(|err| {
        eprintln!("{err}");
        eprintln!("usage: staticd <port> <doc-root>");
        std::process::exit(1);
    });

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("httpd stopped");

    Ok(())
}
