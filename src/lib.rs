//! affilink: affiliate tracking-link generation
//!
//! Core transforms:
//! - template: wrap one destination URL in the fixed tracking template
//! - rewrite: replace every URL inside free text with its tracked form
//! - batch: expand a `Name | URL` line list into tracked links
//! - directory: advertiser directory, fetched once at startup
//! - session: the state record and named transitions driving a generation

pub mod batch;
pub mod directory;
pub mod generate;
pub mod programs;
pub mod rewrite;
pub mod schema;
pub mod session;
pub mod template;

pub use batch::{format_clipboard, parse_link_list};
pub use rewrite::rewrite_text;
pub use schema::{Advertiser, Condition, TrackedLink};
pub use session::{Action, InputMode, Session};
pub use template::build_tracked_url;
