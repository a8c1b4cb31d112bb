// ABOUTME: CLI argument parsing and command routing for mowquote
//
// Provides command-line interface for:
// - Launching the interactive quote widget (default)
// - One-shot quote computation without the TUI (quote)

pub mod quote;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::DEFAULT_ENDPOINT;

/// Terminal quote widget for lawn-care lead capture
#[derive(Parser)]
#[command(name = "mowquote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Organization identifier the widget is configured for
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Accent color as #rrggbb
    #[arg(long, global = true)]
    pub accent: Option<String>,

    /// Backend endpoint serving config and accepting leads
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Attribution URL recorded with submitted leads
    #[arg(long, global = true, default_value = "terminal://mowquote")]
    pub source_url: String,

    /// Output format for non-interactive commands
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for non-interactive commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive quote widget (default if no command given)
    Widget,

    /// Compute a one-shot quote without the TUI
    Quote(quote::QuoteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_can_be_taken_before_reading_globals() {
        // Dispatch takes the command out of the parsed args, then the
        // handlers borrow the remaining globals; both must stay usable.
        let mut cli = Cli::parse_from(["mowquote", "--org", "org-1", "quote", "--size", "Large"]);

        let command = cli.command.take();

        let Some(Commands::Quote(quote_args)) = command else {
            panic!("expected the quote subcommand");
        };
        assert_eq!(quote_args.size, "Large");
        assert_eq!(cli.org.as_deref(), Some("org-1"));
        assert_eq!(cli.source_url, "terminal://mowquote");
    }

    #[test]
    fn test_no_command_defaults_to_widget() {
        let cli = Cli::parse_from(["mowquote", "--org", "org-1"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.endpoint, crate::api::DEFAULT_ENDPOINT);
    }
}
