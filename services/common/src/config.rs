use std::fmt::Display;
use std::str::FromStr;

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset or invalid.
pub fn parse_var_or_default<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|err| {
            tracing::warn!("Invalid value '{value}' for {key} ({err}), using default {default}");
            default
        }),
        None => default,
    }
}

/// Reads `key` through `lookup`, falling back to `default` when unset or blank.
pub fn var_or_default(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
