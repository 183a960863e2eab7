//! programs command: dump the advertiser directory.

use crate::directory::{self, DEFAULT_PROGRAMS_URL};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ProgramsArgs {
    /// Programs endpoint
    #[arg(long, env = "AFFILINK_PROGRAMS_URL", default_value = DEFAULT_PROGRAMS_URL)]
    pub endpoint: String,

    /// Output format: json (default) or yaml
    #[arg(long, short, default_value = "json")]
    pub format: String,
}

pub async fn run_programs(args: ProgramsArgs) -> Result<()> {
    eprintln!("Fetching programs from {}...", args.endpoint);
    let programs = directory::fetch_programs(&args.endpoint).await?;
    eprintln!("Loaded {} program(s)", programs.len());

    let rendered = match args.format.as_str() {
        "yaml" | "yml" => serde_yaml::to_string(&programs)?,
        _ => serde_json::to_string_pretty(&programs)?,
    };
    println!("{}", rendered);

    Ok(())
}
