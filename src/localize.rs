//! Read → rewrite → write driver for README pairs.
//!
//! Pairs are processed sequentially in table order. The first failure stops
//! the run; copies written before it are left in place.

use crate::error::LocalizeError;
use crate::pairs::FilePair;
use crate::rules::{self, Rule};
use std::fs;
use std::path::{Path, PathBuf};

/// Localize one pair and return the resolved (source, destination) paths.
///
/// The destination is created or truncated; its parent directory must exist.
pub fn localize_pair(
    root: &Path,
    pair: &FilePair,
    rules: &[Rule],
) -> Result<(PathBuf, PathBuf), LocalizeError> {
    let (source_path, dest_path) = pair.resolve(root);

    let text = match fs::read_to_string(&source_path) {
        Ok(text) => text,
        Err(cause) => {
            return Err(LocalizeError::ReadFailure {
                source_path,
                dest_path,
                cause,
            })
        }
    };

    let localized = rules::apply_all(rules, &text);

    if let Err(cause) = fs::write(&dest_path, localized) {
        return Err(LocalizeError::WriteFailure {
            source_path,
            dest_path,
            cause,
        });
    }

    Ok((source_path, dest_path))
}

/// Localize every pair in order, printing one progress line per copy.
///
/// Returns the number of pairs written.
pub fn localize(root: &Path, pairs: &[FilePair], rules: &[Rule]) -> Result<usize, LocalizeError> {
    for pair in pairs {
        let (source_path, dest_path) = localize_pair(root, pair, rules)?;
        println!("{} -> {}", source_path.display(), dest_path.display());
    }
    Ok(pairs.len())
}
