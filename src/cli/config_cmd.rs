//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConfigField, ALL_FIELDS};
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore + ?Sized>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key),
        ConfigAction::List => {
            handle_list(store, presenter);
            Ok(())
        }
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_set<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let field: ConfigField = key.parse()?;

    store.set_field(field, value).await?;
    presenter.success(&format!("{} = {}", field.key(), display_value(field, value)));

    Ok(())
}

fn handle_get<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    let field: ConfigField = key.parse()?;
    let config = store.get();

    presenter.output(&display_value(field, config.get(field)));
    Ok(())
}

fn handle_list<S: ConfigStore + ?Sized>(store: &S, presenter: &Presenter) {
    let config = store.get();

    for field in ALL_FIELDS {
        presenter.key_value(field.key(), &display_value(*field, config.get(*field)));
    }
}

/// Value as shown to the user: tokens are masked, empty values marked.
fn display_value(field: ConfigField, value: &str) -> String {
    if value.is_empty() {
        return "(not set)".to_string();
    }
    match field {
        ConfigField::Token => mask_token(value),
        ConfigField::UserId | ConfigField::Host => value.to_string(),
    }
}

/// Mask token for display (show first 4 and last 4 chars)
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
