use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A single raw `keyword value` line, before any keyword normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Keyword exactly as spelled in the source text
    pub keyword: String,
    pub value: String,
    /// 1-based line number in the source text
    pub line: usize,
}

/// Parse SSH-style configuration text into raw entries.
///
/// Blank lines and `#` comments are skipped. The keyword is separated from
/// its value by whitespace or an optional `=`; a double-quoted value has its
/// quotes removed. Keywords are carried through in their original spelling
/// so callers can observe what the file actually said.
pub fn parse_str(input: &str) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, rest) = split_entry(line);

        if keyword.is_empty() {
            return Err(ConfigError::Syntax {
                line: line_no,
                message: "missing keyword before separator".to_string(),
            });
        }
        if rest.is_empty() {
            return Err(ConfigError::Syntax {
                line: line_no,
                message: format!("keyword {:?} has no value", keyword),
            });
        }

        entries.push(ConfigEntry {
            keyword: keyword.to_string(),
            value: unquote(rest).to_string(),
            line: line_no,
        });
    }

    Ok(entries)
}

/// Split a non-empty line into keyword and value text.
fn split_entry(line: &str) -> (&str, &str) {
    match line.find(|c: char| c == '=' || c.is_ascii_whitespace()) {
        Some(pos) => {
            let (keyword, rest) = line.split_at(pos);
            let rest = rest.trim_start();
            // Tolerate `key = value` as well as `key=value` and `key value`.
            let rest = rest.strip_prefix('=').map(str::trim_start).unwrap_or(rest);
            (keyword, rest)
        }
        None => (line, ""),
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
