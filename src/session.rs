//! Session state for the generation shell: an explicit in-memory state
//! record updated only through named transitions. Transitions are pure; the
//! directory fetch and all I/O stay with the caller.

use crate::batch;
use crate::rewrite;
use crate::schema::{Advertiser, Condition, TrackedLink};

/// Which of the two input modes a generation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Free text with embedded URLs, rewritten in place
    FreeText,
    /// One URL per line, optionally `Name | URL`
    LinkList,
}

/// Generated output, held for display/copy until the next generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Links(Vec<TrackedLink>),
}

/// Named state transitions.
#[derive(Debug, Clone)]
pub enum Action {
    DirectoryLoaded(Vec<Advertiser>),
    DirectoryFailed,
    Select(Advertiser),
    SetPartnerId(String),
    SetSource(String),
    Generate(InputMode),
    Clear,
}

/// Per-session state; discarded when the process exits.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub programs: Vec<Advertiser>,
    pub loading: bool,
    pub selected: Option<Advertiser>,
    pub partid: String,
    pub source: String,
    pub output: Option<Output>,
}

impl Session {
    /// Fresh session, directory not yet loaded.
    pub fn new() -> Self {
        Session {
            loading: true,
            ..Session::default()
        }
    }

    /// Apply one transition. A failed `Generate` leaves every field,
    /// including any previous output, untouched. A later directory load
    /// simply overwrites the earlier one.
    pub fn apply(&mut self, action: Action) -> Result<(), Condition> {
        match action {
            Action::DirectoryLoaded(programs) => {
                self.programs = programs;
                self.loading = false;
            }
            Action::DirectoryFailed => {
                self.programs = Vec::new();
                self.loading = false;
            }
            Action::Select(advertiser) => self.selected = Some(advertiser),
            Action::SetPartnerId(partid) => self.partid = partid,
            Action::SetSource(source) => self.source = source,
            Action::Generate(mode) => {
                let progid = self.selected.as_ref().map(|a| a.id.as_str()).unwrap_or("");
                let output = match mode {
                    InputMode::FreeText => {
                        Output::Text(rewrite::rewrite_text(progid, &self.partid, &self.source)?)
                    }
                    InputMode::LinkList => Output::Links(batch::parse_link_list(
                        progid,
                        &self.partid,
                        &self.source,
                    )?),
                };
                self.output = Some(output);
            }
            Action::Clear => {
                self.source.clear();
                self.output = None;
            }
        }
        Ok(())
    }

    /// Export the current output in clipboard form: free-text output
    /// verbatim, line-list output one `clipboard_line` per result.
    pub fn export(&self) -> Result<String, Condition> {
        match &self.output {
            None => Err(Condition::NothingToCopy),
            Some(Output::Text(text)) => Ok(text.clone()),
            Some(Output::Links(links)) => Ok(batch::format_clipboard(links)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adv(id: &str, name: &str) -> Advertiser {
        Advertiser {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session
            .apply(Action::DirectoryLoaded(vec![adv("5", "Fnac")]))
            .unwrap();
        session.apply(Action::Select(adv("5", "Fnac"))).unwrap();
        session
            .apply(Action::SetPartnerId("2".to_string()))
            .unwrap();
        session
    }

    #[test]
    fn test_directory_load_clears_loading() {
        let mut session = Session::new();
        assert!(session.loading);
        session.apply(Action::DirectoryLoaded(Vec::new())).unwrap();
        assert!(!session.loading);

        let mut failed = Session::new();
        failed.apply(Action::DirectoryFailed).unwrap();
        assert!(!failed.loading);
        assert!(failed.programs.is_empty());
    }

    #[test]
    fn test_later_load_overwrites() {
        let mut session = Session::new();
        session
            .apply(Action::DirectoryLoaded(vec![adv("1", "A")]))
            .unwrap();
        session
            .apply(Action::DirectoryLoaded(vec![adv("2", "B"), adv("3", "C")]))
            .unwrap();
        assert_eq!(session.programs.len(), 2);
    }

    #[test]
    fn test_generate_free_text() {
        let mut session = ready_session();
        session
            .apply(Action::SetSource("go to https://a.com now".to_string()))
            .unwrap();
        session.apply(Action::Generate(InputMode::FreeText)).unwrap();

        let exported = session.export().unwrap();
        assert!(exported.starts_with("go to https://tracking.example.com/"));
        assert!(exported.ends_with(" now"));
    }

    #[test]
    fn test_generate_link_list_export_format() {
        let mut session = ready_session();
        session
            .apply(Action::SetSource(
                "Promo | https://fnac.com\nhttps://auchan.fr".to_string(),
            ))
            .unwrap();
        session.apply(Action::Generate(InputMode::LinkList)).unwrap();

        let exported = session.export().unwrap();
        let lines: Vec<&str> = exported.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Promo | https://tracking.example.com/"));
        assert!(lines[1].starts_with("https://tracking.example.com/"));
    }

    #[test]
    fn test_failed_generate_keeps_previous_output() {
        let mut session = ready_session();
        session
            .apply(Action::SetSource("https://a.com".to_string()))
            .unwrap();
        session.apply(Action::Generate(InputMode::FreeText)).unwrap();
        let before = session.output.clone();

        session.apply(Action::SetSource("   ".to_string())).unwrap();
        assert_eq!(
            session.apply(Action::Generate(InputMode::FreeText)),
            Err(Condition::NoContent)
        );
        assert_eq!(session.output, before);
    }

    #[test]
    fn test_generate_without_selection() {
        let mut session = Session::new();
        session.apply(Action::DirectoryLoaded(Vec::new())).unwrap();
        session
            .apply(Action::SetSource("https://a.com".to_string()))
            .unwrap();
        assert_eq!(
            session.apply(Action::Generate(InputMode::FreeText)),
            Err(Condition::MissingSelection)
        );
    }

    #[test]
    fn test_export_before_generation() {
        let session = ready_session();
        assert_eq!(session.export(), Err(Condition::NothingToCopy));
    }

    #[test]
    fn test_clear_drops_source_and_output() {
        let mut session = ready_session();
        session
            .apply(Action::SetSource("https://a.com".to_string()))
            .unwrap();
        session.apply(Action::Generate(InputMode::FreeText)).unwrap();
        session.apply(Action::Clear).unwrap();

        assert!(session.source.is_empty());
        assert_eq!(session.export(), Err(Condition::NothingToCopy));
        // Selection survives a clear
        assert!(session.selected.is_some());
    }
}
