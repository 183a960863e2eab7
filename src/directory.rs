//! Advertiser directory loader: one GET against the programs endpoint at
//! startup, degrading to an empty directory on any failure.

use crate::schema::{Advertiser, Condition};
use serde_json::Value;
use url::Url;

/// Default programs endpoint; override with `--endpoint` or
/// `AFFILINK_PROGRAMS_URL`.
pub const DEFAULT_PROGRAMS_URL: &str = "https://partners.example.com/api/programs";

const USER_AGENT: &str = concat!("affilink/", env!("CARGO_PKG_VERSION"));

/// Fetch the advertiser directory.
///
/// Non-2xx responses and transport errors surface as
/// `DirectoryLoadFailure`. An unexpected JSON shape is zero advertisers,
/// not an error. No retries.
pub async fn fetch_programs(endpoint: &str) -> Result<Vec<Advertiser>, Condition> {
    let endpoint = Url::parse(endpoint)
        .map_err(|e| Condition::DirectoryLoadFailure(format!("invalid endpoint: {}", e)))?;

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Condition::DirectoryLoadFailure(e.to_string()))?;

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| Condition::DirectoryLoadFailure(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Condition::DirectoryLoadFailure(format!(
            "HTTP {}",
            response.status()
        )));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| Condition::DirectoryLoadFailure(e.to_string()))?;

    Ok(parse_programs(payload))
}

/// Accept `[ {id, name}, ... ]` or `{ "programs": [ ... ] }`; anything else
/// is an empty directory.
pub fn parse_programs(payload: Value) -> Vec<Advertiser> {
    let list = match payload {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("programs") {
            Some(Value::Array(items)) => Value::Array(items),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    serde_json::from_value(list).unwrap_or_default()
}

/// Degrade path for the generation shell: warn and continue with an empty
/// directory, marking the load complete either way.
pub async fn load_or_empty(endpoint: &str) -> Vec<Advertiser> {
    match fetch_programs(endpoint).await {
        Ok(programs) => programs,
        Err(condition) => {
            eprintln!("warning: {}", condition);
            Vec::new()
        }
    }
}

/// Resolve a selection against the directory: exact id match first, then
/// case-insensitive name match. First hit wins.
pub fn resolve<'a>(programs: &'a [Advertiser], query: &str) -> Option<&'a Advertiser> {
    programs.iter().find(|p| p.id == query).or_else(|| {
        let query = query.to_lowercase();
        programs.iter().find(|p| p.name.to_lowercase() == query)
    })
}
