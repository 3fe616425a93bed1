mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospekt-cli")]
#[command(about = "Fetch a brochure listing page and save its entries as JSON")]
struct Cli {
    /// Listing page to fetch (overrides `PROSPEKT_SOURCE_URL`)
    #[arg(long)]
    url: Option<String>,

    /// Output JSON file (overrides `PROSPEKT_OUTPUT_PATH`)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut prospekt_core::AppConfig) {
        if let Some(url) = &self.url {
            config.source_url.clone_from(url);
        }
        if let Some(output) = &self.output {
            config.output_path.clone_from(output);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = prospekt_core::load_app_config()?;
    cli.apply_overrides(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "loaded configuration");

    run::run_pipeline(&config, cli.dry_run, &mut std::io::stdout().lock()).await
}

#[cfg(test)]
mod tests;
