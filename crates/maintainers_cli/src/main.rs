use clap::Parser;
use maintainers_cli::{execute, GenerateArgs};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout carries only the document
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("MAINTAINERS_LOG")
                .from_env_lossy(),
        )
        .init();

    let args = GenerateArgs::parse();
    if let Err(e) = execute(&args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
