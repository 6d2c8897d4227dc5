//! Publish the top-level READMEs into the locale documentation directories.
//!
//! Each README is read whole, passed through a fixed, ordered rule table that
//! fixes up links which only make sense from the repository root, and written
//! to `docs/<locale>/README.md`.

pub mod error;
pub mod localize;
pub mod pairs;
pub mod rules;

pub use error::LocalizeError;
pub use localize::{localize, localize_pair};
pub use pairs::{readme_pairs, FilePair};
pub use rules::{apply_all, readme_rules, Replacement, Rule, Scope};
