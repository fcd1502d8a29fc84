//! `chroma config` subcommands.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal;

use crate::cli::ConfigAction;
use crate::config::{global_env_path, mask_key, ChromaConfig, Provider};
use crate::output;

pub fn handle(action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => show(),
        ConfigAction::Api { provider } => configure_api(provider),
    }
}

fn show() -> Result<()> {
    let config = ChromaConfig::from_env()?;
    let rows = describe(&config);

    if output::is_json() {
        let map: BTreeMap<&str, &str> = rows.iter().map(|(k, v)| (*k, v.as_str())).collect();
        output::data("config", &map);
        return Ok(());
    }

    output::header("Effective configuration");
    for (key, value) in &rows {
        output::kv(key, value);
    }
    Ok(())
}

/// Display rows for a config. Keys are masked.
pub fn describe(config: &ChromaConfig) -> Vec<(&'static str, String)> {
    let key = |k: Option<&str>| k.map(mask_key).unwrap_or_else(|| "(not set)".to_string());
    let or_default = |v: &Option<String>| v.clone().unwrap_or_else(|| "(default)".to_string());

    vec![
        ("provider", config.provider.to_string()),
        ("model", config.effective_model().to_string()),
        ("gemini key", key(config.gemini_api_key.as_deref())),
        ("openai key", key(config.openai_api_key.as_deref())),
        ("image model", or_default(&config.image_model)),
        ("gemini url", or_default(&config.gemini_base_url)),
        ("openai url", or_default(&config.openai_base_url)),
        ("image url", or_default(&config.image_base_url)),
        ("timeout", format!("{}s", config.timeout.as_secs())),
        ("image timeout", format!("{}s", config.image_timeout.as_secs())),
    ]
}

fn configure_api(provider: Option<Provider>) -> Result<()> {
    let provider = match provider {
        Some(p) => p,
        None => select_provider()?,
    };

    output::header(&format!("Configure {provider}"));
    println!("  {}", provider.description());
    println!();

    if let Ok(current) = std::env::var(provider.key_var()) {
        println!("  Current: {}", mask_key(&current));
        println!();
    }

    let key = prompt_api_key(provider)?;
    if key.is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    let path = global_env_path().ok_or_else(|| anyhow!("Could not find home directory"))?;
    save_api_key(&path, provider.key_var(), &key)?;
    output::success(&format!("Saved {} to {}", provider.key_var(), path.display()));
    Ok(())
}

fn select_provider() -> Result<Provider> {
    println!("Select a provider to configure:\n");
    for (i, provider) in Provider::ALL.iter().enumerate() {
        let status = if std::env::var(provider.key_var()).is_ok() {
            console::style("(configured)").green()
        } else {
            console::style("(not set)").dim()
        };
        println!("  {}) {} {} - {}", i + 1, provider, status, provider.description());
    }
    println!();

    print!("Enter choice [1-{}]: ", Provider::ALL.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let choice: usize = input.trim().parse().map_err(|_| anyhow!("Invalid choice"))?;

    choice
        .checked_sub(1)
        .and_then(|i| Provider::ALL.get(i).copied())
        .ok_or_else(|| anyhow!("Choice must be 1-{}", Provider::ALL.len()))
}

/// Read a key without echoing it. Ctrl-C returns an empty string.
fn prompt_api_key(provider: Provider) -> Result<String> {
    println!("Enter API key for {provider}:");
    print!("> ");
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;
    let result = read_masked();
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn read_masked() -> Result<String> {
    let mut key = String::new();
    loop {
        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(k) = event::read()? else {
            continue;
        };
        match k.code {
            KeyCode::Enter => return Ok(key),
            KeyCode::Backspace => {
                if key.pop().is_some() {
                    print!("\x08 \x08");
                    io::stdout().flush()?;
                }
            }
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(String::new());
            }
            KeyCode::Char(c) => {
                key.push(c);
                print!("*");
                io::stdout().flush()?;
            }
            _ => {}
        }
    }
}

/// Insert or replace `NAME="value"` in a dotenv file, keeping other entries.
pub fn save_api_key(path: &Path, env_var: &str, key: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?
    } else {
        String::new()
    };

    let mut entries: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let line = line.strip_prefix("export ").unwrap_or(line);
            if line.starts_with('#') {
                return None;
            }
            let (name, value) = line.split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect();
    entries.insert(env_var.to_string(), format!("\"{key}\""));

    let mut content = String::from("# chroma configuration\n\n");
    for (name, value) in &entries {
        content.push_str(&format!("{name}={value}\n"));
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_api_key_creates_and_updates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".chroma").join("env");

        save_api_key(&path, "GEMINI_API_KEY", "first").unwrap();
        save_api_key(&path, "OPENAI_API_KEY", "sk-abc").unwrap();
        save_api_key(&path, "GEMINI_API_KEY", "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("GEMINI_API_KEY=\"second\"\n"));
        assert!(content.contains("OPENAI_API_KEY=\"sk-abc\"\n"));
        assert!(!content.contains("first"));

        let vars: Vec<(String, String)> = dotenvy::from_path_iter(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(vars.contains(&("GEMINI_API_KEY".to_string(), "second".to_string())));
    }

    #[test]
    fn test_save_api_key_keeps_exported_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        fs::write(&path, "# old\nexport CHROMA_MODEL=\"gemini-2.5-pro\"\n").unwrap();

        save_api_key(&path, "GEMINI_API_KEY", "k").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("CHROMA_MODEL=\"gemini-2.5-pro\""));
        assert!(content.contains("GEMINI_API_KEY=\"k\""));
    }

    #[test]
    fn test_describe_masks_keys() {
        let config = ChromaConfig {
            gemini_api_key: Some("AIzaSyD-1234567890abcd".into()),
            ..ChromaConfig::default()
        };
        let rows = describe(&config);
        let lookup = |name: &str| rows.iter().find(|(k, _)| *k == name).map(|(_, v)| v.clone());
        assert_eq!(lookup("gemini key").as_deref(), Some("AIza...abcd"));
        assert_eq!(lookup("openai key").as_deref(), Some("(not set)"));
        assert_eq!(lookup("timeout").as_deref(), Some("60s"));
        assert_eq!(lookup("provider").as_deref(), Some("gemini"));
    }
}
