use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Typed settings for one host block (or the global section).
///
/// Field names mirror the canonical keywords that populate them. Canonical
/// keywords without a dedicated field are kept verbatim in `extras` rather
/// than rejected, since deciding which keywords are meaningful is the
/// consumer's job, not the loader's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostSettings {
    pub host_name: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub identity_file: Option<String>,
    pub hash_known_hosts: Option<bool>,
    pub forward_agent: Option<bool>,
    pub strict_host_key_checking: Option<String>,
    pub proxy_command: Option<String>,
    /// Keywords with no dedicated field, keyed by canonical spelling
    pub extras: BTreeMap<String, String>,
}

impl HostSettings {
    /// Route one canonical keyword to its typed field.
    ///
    /// Value conversion is the only thing that can fail here; unknown
    /// keywords are stored in `extras` untouched.
    pub fn apply(&mut self, keyword: &str, value: &str, line: usize) -> Result<()> {
        match keyword {
            "HostName" => self.host_name = Some(value.to_string()),
            "Port" => self.port = Some(parse_port(keyword, value, line)?),
            "User" => self.user = Some(value.to_string()),
            "IdentityFile" => self.identity_file = Some(value.to_string()),
            "HashKnownHosts" => self.hash_known_hosts = Some(parse_flag(keyword, value, line)?),
            "ForwardAgent" => self.forward_agent = Some(parse_flag(keyword, value, line)?),
            "StrictHostKeyChecking" => {
                self.strict_host_key_checking = Some(value.to_string());
            }
            "ProxyCommand" => self.proxy_command = Some(value.to_string()),
            other => {
                debug!("no dedicated field for {}, keeping as extra", other);
                self.extras.insert(other.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// Number of settings carried by this record, typed fields and extras
    pub fn len(&self) -> usize {
        let typed = [
            self.host_name.is_some(),
            self.port.is_some(),
            self.user.is_some(),
            self.identity_file.is_some(),
            self.hash_known_hosts.is_some(),
            self.forward_agent.is_some(),
            self.strict_host_key_checking.is_some(),
            self.proxy_command.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        typed + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_port(keyword: &str, value: &str, line: usize) -> Result<u16> {
    value.parse::<u16>().map_err(|_| ConfigError::Value {
        keyword: keyword.to_string(),
        value: value.to_string(),
        line,
    })
}

/// SSH-style boolean flags are spelled `yes`/`no`.
fn parse_flag(keyword: &str, value: &str, line: usize) -> Result<bool> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ConfigError::Value {
            keyword: keyword.to_string(),
            value: value.to_string(),
            line,
        }),
    }
}
