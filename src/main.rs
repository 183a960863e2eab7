//! affilink CLI
//!
//! Generates affiliate tracking links: rewrites URLs embedded in free text,
//! or expands a pasted URL list (one per line, optionally `Name | URL`).

use anyhow::Result;
use clap::{Parser, Subcommand};

use affilink::generate::{run_generate, GenerateArgs};
use affilink::programs::{run_programs, ProgramsArgs};
use affilink::session::InputMode;

#[derive(Parser)]
#[command(name = "affilink")]
#[command(version)]
#[command(about = "Generate affiliate tracking links from pasted text or URL lists")]
#[command(
    long_about = "Wraps every destination URL in the tracking redirector template.\n\nCommands:\n  rewrite    Replace URLs inside free text with their tracked form\n  links      Expand a URL list (one per line, optionally 'Name | URL')\n  programs   List the advertiser directory"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace every URL inside a block of free text with its tracked form
    Rewrite(GenerateArgs),
    /// Expand a URL list into tracked links, one result per line
    Links(GenerateArgs),
    /// List the advertiser directory
    Programs(ProgramsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite(args) => run_generate(InputMode::FreeText, args).await,
        Commands::Links(args) => run_generate(InputMode::LinkList, args).await,
        Commands::Programs(args) => run_programs(args).await,
    }
}
