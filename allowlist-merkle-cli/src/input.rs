//! Reading address lists.

use std::{fs, path::Path};

use allowlist_merkle_tree::{Address, AllowlistTreeError};

use crate::CliError;

/// Read addresses from `path`.
///
/// Accepts either a JSON array of address strings or plain text with one
/// address per line. In plain text, `#` starts a comment and blank lines
/// are skipped.
pub fn read_addresses(path: &Path) -> Result<Vec<Address>, CliError> {
    let text = read_to_string(path)?;
    if text.trim_start().starts_with('[') {
        let entries: Vec<String> = serde_json::from_str(&text)?;
        return entries
            .iter()
            .enumerate()
            .map(|(position, entry)| parse_at(path, position + 1, entry))
            .collect();
    }

    let mut addresses = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        addresses.push(parse_at(path, number + 1, content)?);
    }
    Ok(addresses)
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_at(path: &Path, line: usize, text: &str) -> Result<Address, CliError> {
    text.parse::<Address>()
        .map_err(|source: AllowlistTreeError| CliError::Input {
            path: path.to_path_buf(),
            line,
            source,
        })
}
