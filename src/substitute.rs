//! Environment placeholder substitution
//!
//! String scalars may embed `${NAME}` or `${NAME:default}`. A variable that is
//! set, even to the empty string, always wins over the default. An unset
//! variable without a default, or with an empty one as in `${NAME:}`, leaves
//! the token as written. Substituted text is never rescanned.

use crate::document::{ConfigDocument, Scalar};
use crate::environment::EnvironmentSnapshot;
use regex_lite::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{(\w+)(?::([^}]*))?\}").expect("placeholder regex is valid")
    })
}

/// Trim `text` and replace every placeholder in it.
pub fn resolve_placeholders(text: &str, env: &EnvironmentSnapshot) -> String {
    placeholder_regex()
        .replace_all(text.trim(), |caps: &Captures<'_>| {
            if let Some(value) = env.get(&caps[1]) {
                return value.to_string();
            }
            match caps.get(2).filter(|default| !default.as_str().is_empty()) {
                Some(default) => default.as_str().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Rebuild `document` with every string scalar resolved.
pub fn resolve_document(document: ConfigDocument, env: &EnvironmentSnapshot) -> ConfigDocument {
    match document {
        ConfigDocument::Mapping(map) => ConfigDocument::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, resolve_document(value, env)))
                .collect(),
        ),
        ConfigDocument::Sequence(items) => ConfigDocument::Sequence(
            items
                .into_iter()
                .map(|item| resolve_document(item, env))
                .collect(),
        ),
        ConfigDocument::Scalar(Scalar::String(text)) => {
            ConfigDocument::string(resolve_placeholders(&text, env))
        }
        scalar @ ConfigDocument::Scalar(_) => scalar,
    }
}
