//! Placeholder renderer
//!
//! Substitutes `{{ name }}` tokens with answer values. Substitution is
//! literal single-pass string replacement: values are never re-scanned
//! for placeholders, and tokens for undeclared variables are left
//! untouched (unrendered tokens are a caller responsibility).

use std::collections::HashMap;

use regex::Regex;

/// Replace every `{{ name }}` occurrence (whitespace inside the braces
/// tolerated) with the paired value. One pass over the input: a value
/// that itself contains placeholder syntax is emitted verbatim.
pub fn render(text: &str, answers: &[(String, String)]) -> String {
    if answers.is_empty() {
        return text.to_string();
    }

    let names = answers
        .iter()
        .map(|(name, _)| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(re) = Regex::new(&format!(r"\{{\{{\s*({names})\s*\}}\}}")) else {
        return text.to_string();
    };

    let values: HashMap<&str, &str> = answers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        values.get(&caps[1]).copied().unwrap_or_default().to_string()
    })
    .into_owned()
}
