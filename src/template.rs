//! Tracked-link template: wraps a destination URL in the fixed `clic.php`
//! query-string template.

use crate::schema::Condition;

/// Tracking redirector endpoint. Downstream consumers string-match the
/// output, so the base and the progid/partid/dpl parameter order are fixed.
pub const TRACKING_BASE: &str = "https://tracking.example.com/clic.php";

/// Trim both identifiers, rejecting the pair when either is blank.
///
/// The rewriter and the line-list parser both run this before touching any
/// source text, so a missing selection fails the whole operation up front.
pub fn require_ids(progid: &str, partid: &str) -> Result<(String, String), Condition> {
    let progid = progid.trim();
    let partid = partid.trim();
    if progid.is_empty() || partid.is_empty() {
        return Err(Condition::MissingSelection);
    }
    Ok((progid.to_string(), partid.to_string()))
}

/// Build the tracked form of one destination URL.
///
/// The destination is not validated beyond being non-empty; it is encoded
/// as an opaque query-parameter value.
pub fn build_tracked_url(
    progid: &str,
    partid: &str,
    destination: &str,
) -> Result<String, Condition> {
    let (progid, partid) = require_ids(progid, partid)?;
    if destination.is_empty() {
        return Err(Condition::NoContent);
    }
    Ok(render(&progid, &partid, destination))
}

/// Format the template for already-validated identifiers.
pub(crate) fn render(progid: &str, partid: &str, destination: &str) -> String {
    format!(
        "{}?progid={}&partid={}&dpl={}",
        TRACKING_BASE,
        progid,
        partid,
        urlencoding::encode(destination)
    )
}
