//! The single linear run: fetch, extract, check, write.
//!
//! A fetch failure aborts the run before anything is written. Per-entry
//! problems are already folded into sentinel values by extraction and only
//! show up in the completeness notice.

use std::io::Write;

use anyhow::Context;
use prospekt_core::AppConfig;
use prospekt_scraper::{
    check_completeness, extract_brochures, to_json_string, write_json, ProspektClient,
};

/// Runs the pipeline once against `config.source_url`, writing operator
/// messages (notice, confirmation, dry-run JSON) to `console`.
///
/// When `dry_run` is `true` the JSON document goes to `console` and the
/// output file is left untouched.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the page fetch fails,
/// or the output cannot be serialized or written.
pub(crate) async fn run_pipeline<W: Write>(
    config: &AppConfig,
    dry_run: bool,
    console: &mut W,
) -> anyhow::Result<()> {
    let client = ProspektClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;

    let html = client
        .fetch_page(&config.source_url)
        .await
        .with_context(|| format!("failed to fetch {}", config.source_url))?;

    let records = extract_brochures(&html);
    let notice = check_completeness(&records);

    if dry_run {
        writeln!(console, "{}", to_json_string(&records)?)?;
    } else {
        write_json(&config.output_path, &records)?;
    }

    if !notice.is_empty() {
        writeln!(console, "{notice}")?;
    }

    if dry_run {
        writeln!(
            console,
            "dry-run: {} brochures, {} not written",
            records.len(),
            config.output_path.display()
        )?;
    } else {
        writeln!(
            console,
            "Data has been saved to {}",
            config.output_path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
