//! rewrite / links commands: one generation shell parameterized over the
//! input mode.
//!
//! The plain output is the clipboard form (pipe it to `xclip`/`pbcopy`);
//! `--format json|yaml` emits a structured report instead.

use crate::directory::{self, DEFAULT_PROGRAMS_URL};
use crate::rewrite;
use crate::schema::{Advertiser, TrackedLink};
use crate::session::{Action, InputMode, Output, Session};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// File with the source text (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Source text passed inline instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Advertiser program id
    #[arg(long, short = 'p')]
    pub progid: Option<String>,

    /// Advertiser name or id, resolved against the directory
    #[arg(long, short = 'a', conflicts_with = "progid")]
    pub advertiser: Option<String>,

    /// Partner id
    #[arg(long)]
    pub partid: Option<String>,

    /// Programs endpoint used for --advertiser resolution
    #[arg(long, env = "AFFILINK_PROGRAMS_URL", default_value = DEFAULT_PROGRAMS_URL)]
    pub endpoint: String,

    /// Output format: text (clipboard form, default), json or yaml
    #[arg(long, short, default_value = "text")]
    pub format: String,
}

/// Structured report for --format json/yaml
#[derive(Debug, Serialize)]
struct GenerateReport {
    generated_at: String,
    progid: String,
    partid: String,
    mode: &'static str,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<Vec<TrackedLink>>,
}

pub async fn run_generate(mode: InputMode, args: GenerateArgs) -> Result<()> {
    let source = read_source(&args).await?;

    let mut session = Session::new();

    if let Some(query) = &args.advertiser {
        eprintln!("Loading advertiser directory...");
        let programs = directory::load_or_empty(&args.endpoint).await;
        eprintln!("Loaded {} program(s)", programs.len());

        let advertiser = directory::resolve(&programs, query)
            .cloned()
            .with_context(|| format!("advertiser '{}' not found in the directory", query))?;
        session.apply(Action::DirectoryLoaded(programs))?;
        session.apply(Action::Select(advertiser))?;
    } else {
        session.apply(Action::DirectoryLoaded(Vec::new()))?;
        if let Some(progid) = &args.progid {
            session.apply(Action::Select(Advertiser {
                id: progid.clone(),
                name: progid.clone(),
            }))?;
        }
    }

    if let Some(partid) = args.partid.clone() {
        session.apply(Action::SetPartnerId(partid))?;
    }
    session.apply(Action::SetSource(source))?;
    session.apply(Action::Generate(mode))?;

    match &session.output {
        Some(Output::Text(_)) => {
            eprintln!(
                "Replaced {} URL(s)",
                rewrite::count_candidates(&session.source)
            );
        }
        Some(Output::Links(links)) => eprintln!("Generated {} link(s)", links.len()),
        None => {}
    }

    match args.format.as_str() {
        "json" | "yaml" | "yml" => {
            let report = build_report(mode, &session);
            let rendered = match args.format.as_str() {
                "yaml" | "yml" => serde_yaml::to_string(&report)?,
                _ => serde_json::to_string_pretty(&report)?,
            };
            println!("{}", rendered);
        }
        _ => println!("{}", session.export()?),
    }

    Ok(())
}

/// Source text from --text, a file, or stdin, in that priority.
async fn read_source(args: &GenerateArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(file) = &args.file {
        return tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

fn build_report(mode: InputMode, session: &Session) -> GenerateReport {
    let progid = session
        .selected
        .as_ref()
        .map(|a| a.id.clone())
        .unwrap_or_default();

    let (total, text, links) = match &session.output {
        Some(Output::Text(text)) => (
            rewrite::count_candidates(&session.source),
            Some(text.clone()),
            None,
        ),
        Some(Output::Links(list)) => (list.len(), None, Some(list.clone())),
        None => (0, None, None),
    };

    GenerateReport {
        generated_at: Utc::now().to_rfc3339(),
        progid,
        partid: session.partid.clone(),
        mode: match mode {
            InputMode::FreeText => "rewrite",
            InputMode::LinkList => "links",
        },
        total,
        text,
        links,
    }
}
