//! Charforge - builds the sample character and prints it as JSON.

use anyhow::Context;
use charforge_domain::CharacterValidator;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod demo;

use config::CliConfig;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so stdout carries only the rendered character.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env().context("loading configuration")?;
    tracing::info!(max_name_length = ?config.max_name_length, "Starting Charforge");

    let validator = CharacterValidator::new(config.validation());
    let rendered = render(&validator, &demo::sample_character_input())?;
    println!("{}", rendered);
    Ok(())
}

/// Validate `raw` and render the character as pretty JSON.
fn render(validator: &CharacterValidator, raw: &Value) -> anyhow::Result<String> {
    match validator.validate(raw) {
        Ok(character) => {
            tracing::info!(
                character = %character.name(),
                class = %character.cls(),
                equipped = character.equipment().iter().count(),
                "Character validated"
            );
            serde_json::to_string_pretty(&character).context("serializing character")
        }
        Err(errors) => {
            for (path, error) in errors.leaves() {
                tracing::warn!(field = %path, code = error.code(), "{}", error);
            }
            anyhow::bail!("character rejected: {}", errors)
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
