use crate::collection::Collection;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Substituted for placeholders that name no collection variable.
pub const WILDCARD: &str = "*";

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{(?P<name>.*?)\}\}").unwrap();
}

/// Expands `{{name}}` placeholders with the collection's variables.
///
/// Placeholders are collected from the original string, then each one replaces the first
/// remaining occurrence of its text in the accumulated result, so a placeholder used twice
/// is resolved twice.
pub fn resolve_variables(collection: &Collection, s: &str) -> String {
    debug!("Replacing variables in {}...", s);

    let mut result = String::from(s);
    let mut found = false;

    for captures in PLACEHOLDER_REGEX.captures_iter(s) {
        found = true;
        result = replace_variable(collection, &result, &captures["name"]);
    }

    if found {
        debug!("Replaced variables {} => {}", s, result);
    } else {
        debug!("No variables found");
    }

    result
}

fn replace_variable(collection: &Collection, s: &str, variable_name: &str) -> String {
    let value = collection.variable_value(variable_name).unwrap_or_else(|| {
        debug!("Variable {} is not defined, using {}", variable_name, WILDCARD);
        String::from(WILDCARD)
    });

    s.replacen(&format!("{{{{{}}}}}", variable_name), &value, 1)
}
