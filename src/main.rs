//! # channelpack CLI
//!
//! Command-line interface for the channelpack library.

use std::process;
use std::time::Instant;

use clap::Parser;

use channelpack::ChannelpackError;
use channelpack::clean::clean_file;
use channelpack::cli::{CleanArgs, Cli, Command, ScrapeArgs};
use channelpack::config::{ApiCredentials, CleanConfig, ScrapeConfig};
use channelpack::export::Exporter;
use channelpack::telegram::TelegramSource;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ChannelpackError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scrape(args) => run_scrape(args).await,
        Command::Clean(args) => run_clean(&args),
    }
}

async fn run_scrape(args: ScrapeArgs) -> Result<(), ChannelpackError> {
    let total_start = Instant::now();
    let config: ScrapeConfig = args.into();

    println!("📦 channelpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📡 Channels: {}", config.channels.len());
    println!("🔢 Limit:    {} messages per channel", config.message_limit);
    println!("💾 Output:   {}", config.output_path.display());
    if config.download_media {
        println!("🖼️  Media:    {}", config.media_dir.display());
    } else {
        println!("⏭️  Media:    skipped (--skip-media)");
    }
    println!();

    let credentials = ApiCredentials::from_env()?;

    println!("⏳ Connecting to Telegram...");
    let source = TelegramSource::connect(&credentials, &config.session_file).await?;

    println!("📡 Scraping channels...");
    let exporter = Exporter::new(source, config);
    let summary = exporter.run().await?;

    println!();
    println!(
        "✅ Done! Output saved to {}",
        exporter.config().output_path.display()
    );
    println!();
    println!("📊 Summary:");
    println!(
        "   Channels:  {} scraped, {} skipped",
        summary.channels_scraped, summary.channels_skipped
    );
    println!("   Rows:      {}", summary.rows_written);
    println!("   Photos:    {}", summary.photos_downloaded);
    println!("   Time:      {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn run_clean(args: &CleanArgs) -> Result<(), ChannelpackError> {
    let total_start = Instant::now();
    let config = CleanConfig::from(args);

    println!("📦 channelpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    if config.remove_stopwords {
        println!("🔍 Mode:    stopword removal enabled");
    }
    println!();

    println!("🧹 Cleaning messages...");
    let summary = clean_file(&args.input, &args.output, &config)?;

    println!();
    println!("✅ Done! Output saved to {}", args.output.display());
    println!();
    println!("📊 Summary:");
    println!("   Rows:  {}", summary.rows);
    println!("   Time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
