use anyhow::Result;
use clap::Parser;
use credibility_hub::{config::Config, web::serve};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "credibility-hub")]
#[command(about = "Simulated image and headline credibility scoring service")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Fixed RNG seed for reproducible demo runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable development mode
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Media Credibility Hub...");
    tracing::info!("Bind address: {}", args.bind);
    if args.dev {
        tracing::info!("Development mode enabled");
    }
    if let Some(seed) = args.seed {
        tracing::info!("Deterministic RNG seed: {}", seed);
    }

    // 创建配置
    let config = Config::new(args.bind, args.dev, args.seed)?;

    // 启动服务器
    serve(config).await?;

    Ok(())
}
