//! Line-list parser: one destination URL per line, optionally annotated as
//! `Name | URL`.

use crate::schema::{Condition, TrackedLink};
use crate::template;

/// Parse a pasted URL list into tracked links.
///
/// Lines are trimmed and blank lines dropped. A `|` splits the line at its
/// first occurrence into display name (left) and URL (right). The whole
/// batch shares one advertiser/partner selection and fails atomically when
/// it is missing. Output order matches input line order; no dedup.
pub fn parse_link_list(
    progid: &str,
    partid: &str,
    input: &str,
) -> Result<Vec<TrackedLink>, Condition> {
    let (progid, partid) = template::require_ids(progid, partid)?;

    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(Condition::NoContent);
    }

    let mut links = Vec::with_capacity(lines.len());
    for line in lines {
        let (name, url) = match line.split_once('|') {
            Some((name, url)) => (Some(name.trim()), url.trim()),
            None => (None, line),
        };
        let tracked = template::build_tracked_url(&progid, &partid, url)?;
        links.push(TrackedLink {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            url: url.to_string(),
            tracked,
        });
    }

    Ok(links)
}

/// Clipboard export: one line per result, in result order.
pub fn format_clipboard(links: &[TrackedLink]) -> String {
    links
        .iter()
        .map(TrackedLink::clipboard_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_bare_lines() {
        let input = "Promo | https://fnac.com\nhttps://auchan.fr";
        let links = parse_link_list("5", "2", input).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name.as_deref(), Some("Promo"));
        assert_eq!(links[0].url, "https://fnac.com");
        assert_eq!(
            links[0].tracked,
            "https://tracking.example.com/clic.php?progid=5&partid=2&dpl=https%3A%2F%2Ffnac.com"
        );
        assert_eq!(links[1].name, None);
        assert_eq!(
            links[1].tracked,
            "https://tracking.example.com/clic.php?progid=5&partid=2&dpl=https%3A%2F%2Fauchan.fr"
        );
    }

    #[test]
    fn test_blank_lines_dropped_order_kept() {
        let input = "\nhttps://a.com\n\n  \nB | https://b.com\n\n";
        let links = parse_link_list("1", "1", input).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://a.com");
        assert_eq!(links[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn test_split_at_first_pipe_only() {
        let links = parse_link_list("1", "1", "Name | https://a.com/?q=a|b").unwrap();
        assert_eq!(links[0].name.as_deref(), Some("Name"));
        assert_eq!(links[0].url, "https://a.com/?q=a|b");
    }

    #[test]
    fn test_empty_name_is_none() {
        let links = parse_link_list("1", "1", "| https://a.com").unwrap();
        assert_eq!(links[0].name, None);
        assert_eq!(links[0].url, "https://a.com");
    }

    #[test]
    fn test_no_url_validation() {
        let links = parse_link_list("1", "1", "not-a-url").unwrap();
        assert_eq!(links[0].url, "not-a-url");
        assert!(links[0].tracked.ends_with("dpl=not-a-url"));
    }

    #[test]
    fn test_missing_selection_fails_whole_batch() {
        assert_eq!(
            parse_link_list("", "2", "https://a.com\nhttps://b.com"),
            Err(Condition::MissingSelection)
        );
    }

    #[test]
    fn test_empty_input_is_no_content() {
        assert_eq!(parse_link_list("1", "1", ""), Err(Condition::NoContent));
        assert_eq!(parse_link_list("1", "1", "\n  \n"), Err(Condition::NoContent));
    }

    #[test]
    fn test_format_clipboard() {
        let links = parse_link_list("5", "2", "Promo | https://fnac.com\nhttps://auchan.fr").unwrap();
        let text = format_clipboard(&links);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Promo | https://tracking.example.com/"));
        assert!(lines[1].starts_with("https://tracking.example.com/"));
    }
}
