use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::keyword;
use crate::parser::{self, ConfigEntry};
use crate::settings::HostSettings;

/// One `Host` block: the patterns it applies to plus its settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostBlock {
    pub patterns: Vec<String>,
    pub settings: HostSettings,
}

/// A fully loaded configuration: global defaults plus per-host blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SshConfig {
    pub global: HostSettings,
    pub hosts: Vec<HostBlock>,
}

impl SshConfig {
    /// Settings currently being populated: the open host block if one has
    /// started, the global section otherwise.
    fn current_settings(&mut self) -> &mut HostSettings {
        match self.hosts.last_mut() {
            Some(block) => &mut block.settings,
            None => &mut self.global,
        }
    }
}

/// Load configuration from SSH-style text.
///
/// Every raw keyword is normalized to its canonical spelling before it is
/// applied, so `identity_file`, `port` and friends populate the same fields
/// their canonical forms would.
pub fn load_str(input: &str) -> Result<SshConfig> {
    let entries = parser::parse_str(input)?;
    build(entries)
}

/// Load configuration from a file on disk.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<SshConfig> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

fn build(entries: Vec<ConfigEntry>) -> Result<SshConfig> {
    let mut config = SshConfig::default();

    for entry in entries {
        let canonical = keyword::sanitize(&entry.keyword);
        if canonical != entry.keyword {
            debug!("normalized keyword {} -> {}", entry.keyword, canonical);
        }

        if canonical == "Host" {
            let patterns = entry
                .value
                .split_ascii_whitespace()
                .map(|p| p.to_string())
                .collect();
            config.hosts.push(HostBlock {
                patterns,
                settings: HostSettings::default(),
            });
            continue;
        }

        config.current_settings().apply(&canonical, &entry.value, entry.line)?;
    }

    Ok(config)
}
