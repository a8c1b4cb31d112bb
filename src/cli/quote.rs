// ABOUTME: One-shot quote computation without the interactive widget
// Reads organization config from a file or the endpoint, prints the breakdown

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::api::types::OrgConfig;
use crate::api::QuoteApiClient;
use crate::cli::{Cli, OutputFormat};
use crate::models::{FormData, Frequency, LawnSize};
use crate::pricing;

/// Arguments for the quote command
#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Read organization config from a JSON file instead of the endpoint
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lawn size (tier name or label, e.g. "Large (300-600m²)")
    #[arg(long, default_value = "Medium")]
    pub size: String,

    /// Service frequency (One-off, Weekly, Fortnightly, Monthly)
    #[arg(long, default_value = "One-off")]
    pub frequency: String,

    /// Extra service to include (repeatable)
    #[arg(long = "extra")]
    pub extras: Vec<String>,
}

pub async fn execute(args: QuoteArgs, cli: &Cli) -> Result<()> {
    let config = load_config(&args, cli).await?;

    let form = FormData {
        lawn_size: LawnSize::from_label(&args.size),
        frequency: Frequency::from_label(&args.frequency),
        extras: args.extras.clone(),
        ..FormData::default()
    };

    let quote = pricing::compute_quote(&form, &config);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        OutputFormat::Text => {
            let currency = &config.currency;
            println!("Quote from {}", config.business_name);
            println!("  Lawn size:  {}", form.lawn_size.label());
            println!("  Frequency:  {}", form.frequency.label());
            println!("  Base:       {}{}", currency, quote.base);
            println!("  Extras:     {}{}", currency, quote.extras_total);
            if !quote.discount.is_zero() {
                println!("  Discount:  -{}{}", currency, quote.discount);
            }
            println!("  Price:      {}{}", currency, quote.price);
            println!("  Duration:   {} minutes", quote.duration_minutes);
        }
    }

    Ok(())
}

async fn load_config(args: &QuoteArgs, cli: &Cli) -> Result<OrgConfig> {
    if let Some(path) = &args.config {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()));
    }

    let org_id = cli
        .org
        .as_deref()
        .ok_or_else(|| anyhow!("--org is required when no --config file is given"))?;

    let client = QuoteApiClient::new(&cli.endpoint)?;
    let config = client
        .fetch_config(org_id)
        .await
        .context("failed to fetch organization config")?;
    Ok(config)
}
