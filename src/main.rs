//! fumen-render binary.
//!
//! Renders one fumen from the command line and writes the image to disk.
//! Settings come from `FUMEN_RENDER_*` environment variables, then flags.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use fumen_render::{handle_request, logging, parse_cli, Command, RenderConfig, USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    let config = RenderConfig::from_env();
    logging::init(&config.log_level);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &RenderConfig) -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_cli(&args, &config.render_defaults())?;

    let request = match cli.command {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Render(request) => request,
    };

    let image = handle_request(&request).await?;

    let path = cli.out.unwrap_or_else(|| {
        config
            .out_dir
            .join(format!("output.{}", image.format.extension()))
    });
    tokio::fs::write(&path, &image.bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "wrote image");
    println!("{}", path.display());
    Ok(())
}
