//! Environment configuration for the CLI
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CHARFORGE_MAX_NAME_LENGTH` | Character name cap, or `none`/`off` | `20` |
//! | `RUST_LOG` | Log filter | `charforge=info` |

use anyhow::Context;
use charforge_domain::ValidationConfig;

pub const MAX_NAME_LENGTH_VAR: &str = "CHARFORGE_MAX_NAME_LENGTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub max_name_length: Option<usize>,
}

impl CliConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = ValidationConfig::default();
        let max_name_length = match lookup(MAX_NAME_LENGTH_VAR) {
            Some(raw) => parse_max_name_length(&raw)
                .with_context(|| format!("invalid {}", MAX_NAME_LENGTH_VAR))?,
            None => defaults.max_name_length,
        };
        Ok(Self { max_name_length })
    }

    pub fn validation(&self) -> ValidationConfig {
        ValidationConfig::default().with_max_name_length(self.max_name_length)
    }
}

fn parse_max_name_length(raw: &str) -> anyhow::Result<Option<usize>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    let max = raw
        .parse::<usize>()
        .with_context(|| format!("expected a whole number or \"none\", got {:?}", raw))?;
    Ok(Some(max))
}
