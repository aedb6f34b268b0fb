use crate::cli::{Cli, ConfigAction, OutputFormat};
use crate::commands::{gemini_config, spinner, youtube_config, CommandError, Result};
use crate::output::{format_output, paint, OutputData};
use coursecraft_core::auth::{is_known_provider, GEMINI_PROVIDER, YOUTUBE_PROVIDER};
use coursecraft_core::auth_store::{AuthStore, FileAuthStore};
use coursecraft_core::capabilities::{config_schema, FieldType};
use coursecraft_core::config::api_key_env_vars;
use coursecraft_core::lesson::GeminiLessonClient;
use coursecraft_core::video::YouTubeClient;
use owo_colors::Style;
use serde_json::{json, Value};
use std::io::{self, Write};
use tracing::info;

pub async fn run(cli: &Cli, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Set {
            provider,
            key,
            value,
        } => set_config(&provider, &key, value),
        ConfigAction::Remove { provider, yes } => remove_config(&provider, yes),
        ConfigAction::Test { provider } => test_config(cli, &provider).await,
    }
}

fn success() -> Style {
    Style::new().green().bold()
}

fn note() -> Style {
    Style::new().yellow().bold()
}

fn ensure_known(provider: &str) -> Result<()> {
    if is_known_provider(provider) {
        Ok(())
    } else {
        Err(CommandError::UnknownProvider(provider.to_string()))
    }
}

fn show_config(cli: &Cli) -> Result<()> {
    let store = FileAuthStore::new_default();
    let providers = store.list_providers();

    match cli.output {
        OutputFormat::Pretty => {
            println!();
            println!("{}", paint("Configured Providers", Style::new().bold().cyan()));
            println!("{}", paint("====================", Style::new().cyan()));
            println!();

            if providers.is_empty() {
                println!("{}", paint("No providers configured yet.", Style::new().yellow()));
            } else {
                println!("Config file: {}", paint(&store.config_path(), Style::new().dimmed()));
                println!();
                for provider in &providers {
                    let auth = store.load(provider).unwrap_or_default();
                    let status = if auth.get("api_key").map(|k| !k.is_empty()).unwrap_or(false) {
                        paint("configured", Style::new().green())
                    } else {
                        paint("partial", Style::new().yellow())
                    };
                    let mut fields: Vec<_> = auth.keys().map(String::as_str).collect();
                    fields.sort_unstable();
                    println!(
                        "  {} - {} ({})",
                        paint(provider, Style::new().cyan().bold()),
                        status,
                        fields.join(", ")
                    );
                }
            }

            println!();
            for provider in [YOUTUBE_PROVIDER, GEMINI_PROVIDER] {
                let vars = api_key_env_vars(provider);
                if let Some(var) = vars.iter().find(|v| std::env::var(v).is_ok()) {
                    println!(
                        "{} {} api_key also available from {}",
                        paint("Env:", Style::new().dimmed()),
                        provider,
                        var
                    );
                }
            }
            println!(
                "Test a provider: {}",
                paint("coursecraft config test <provider>", Style::new().cyan())
            );
            println!();
        }
        _ => {
            let data = OutputData::ConfigInfo(masked_config(&store, &providers));
            format_output(&data, &cli.output)?;
        }
    }

    Ok(())
}

/// Stored configuration with secret values replaced by `***`.
pub fn masked_config(store: &dyn AuthStore, providers: &[String]) -> Value {
    let mut config = json!({});

    for provider in providers {
        if let Some(auth) = store.load(provider) {
            let schema = config_schema(provider);
            let mut provider_config = json!({});
            for (key, value) in &auth {
                let secret = schema
                    .as_ref()
                    .and_then(|s| s.field(key))
                    .map(|f| matches!(f.field_type, FieldType::Secret))
                    // unknown fields may hold anything
                    .unwrap_or(true);
                provider_config[key] = if secret {
                    json!("***")
                } else {
                    json!(value)
                };
            }
            provider_config["field_count"] = json!(auth.len());
            config[provider] = provider_config;
        }
    }

    config
}

fn set_config(provider: &str, key: &str, value: Option<String>) -> Result<()> {
    ensure_known(provider)?;
    let schema = config_schema(provider)
        .ok_or_else(|| CommandError::UnknownProvider(provider.to_string()))?;
    let field = schema.field(key).ok_or_else(|| {
        let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        CommandError::InvalidConfig(format!(
            "{} has no field '{}'. Fields: {}",
            provider,
            key,
            names.join(", ")
        ))
    })?;

    let value = match value {
        Some(v) => v,
        None => {
            print!("{}: ", field.label);
            io::stdout().flush()?;
            if matches!(field.field_type, FieldType::Secret) {
                read_secret()?
            } else {
                read_line()?
            }
        }
    };
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CommandError::InvalidConfig(format!("{} cannot be empty", key)));
    }
    if matches!(field.field_type, FieldType::Number)
        && value.parse::<u64>().ok().filter(|n| *n > 0).is_none()
    {
        return Err(CommandError::InvalidConfig(format!(
            "{} must be a positive whole number",
            key
        )));
    }

    let store = FileAuthStore::new_default();
    let mut auth = store.load(provider).unwrap_or_default();
    auth.insert(key.to_string(), value);
    store
        .save(provider, &auth)
        .map_err(|e| CommandError::InvalidConfig(format!("Failed to save: {}", e)))?;
    info!(provider, key, "Saved provider setting");

    println!(
        "{} {} saved for {}",
        paint("Success!", success()),
        key,
        paint(provider, Style::new().cyan())
    );
    println!();
    println!(
        "Test with: {}",
        paint(&format!("coursecraft config test {}", provider), Style::new().cyan())
    );

    Ok(())
}

fn remove_config(provider: &str, yes: bool) -> Result<()> {
    let store = FileAuthStore::new_default();

    if store.load(provider).is_none() {
        println!(
            "{} No configuration found for {}",
            paint("Note:", note()),
            paint(provider, Style::new().cyan())
        );
        return Ok(());
    }

    if !yes {
        print!(
            "Remove all settings for {}? [y/N] ",
            paint(provider, Style::new().cyan().bold())
        );
        io::stdout().flush()?;

        let input = read_line()?;
        if input.to_lowercase() != "y" {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match store.remove(provider) {
        Ok(true) => println!(
            "{} Removed configuration for {}",
            paint("Success!", success()),
            paint(provider, Style::new().cyan())
        ),
        Ok(false) => println!(
            "{} No configuration found for {}",
            paint("Note:", note()),
            paint(provider, Style::new().cyan())
        ),
        Err(e) => {
            return Err(CommandError::InvalidConfig(format!(
                "Failed to remove: {}",
                e
            )))
        }
    }

    Ok(())
}

async fn test_config(cli: &Cli, provider: &str) -> Result<()> {
    ensure_known(provider)?;

    let outcome = match provider {
        YOUTUBE_PROVIDER => {
            let client = YouTubeClient::new(youtube_config(cli)?)?;
            let spinner = spinner(format!("Testing {}...", provider));
            let outcome = client.test_auth().await;
            spinner.finish_and_clear();
            outcome
        }
        _ => {
            let client = GeminiLessonClient::new(gemini_config(cli)?)?;
            let spinner = spinner(format!("Testing {} model {}...", provider, client.model()));
            let outcome = client.test_auth().await;
            spinner.finish_and_clear();
            outcome
        }
    };

    match outcome {
        Ok(()) => {
            println!("{} {} credentials work", paint("Success!", success()), provider);
            println!();
            let hint = if provider == YOUTUBE_PROVIDER {
                "coursecraft video \"photosynthesis\""
            } else {
                "coursecraft lesson \"photosynthesis\""
            };
            println!("Try: {}", paint(hint, Style::new().cyan()));
        }
        Err(e) => {
            println!("{} {}", paint("Failed", Style::new().red().bold()), provider);
            println!();
            println!("{} {} ({})", paint("Error:", Style::new().red().bold()), e, e.code_str());
            println!();
            println!("You can:");
            println!(
                "  - Re-configure with {}",
                paint(&format!("coursecraft config set {}", provider), Style::new().cyan())
            );
            println!(
                "  - Check settings in {}",
                paint(&FileAuthStore::new_default().config_path(), Style::new().dimmed())
            );
        }
    }

    Ok(())
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn read_secret() -> Result<String> {
    match rpassword::read_password() {
        Ok(password) => Ok(password.trim().to_string()),
        // not a TTY
        Err(_) => read_line(),
    }
}
