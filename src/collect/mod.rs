//! Variable collector
//!
//! Builds one namespaced question set across one or more templates and
//! resolves it to a flat answer map, either interactively or from a
//! supplied answer file. Question names are prefixed `__<id>__` and
//! prompts `[<id>]` so identical raw names across templates never
//! collide.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use inquire::{Confirm, Select, Text};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShipwrightError};
use crate::template::Question;

/// Namespaced variable name -> scalar value for one assembly operation
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// Scalar answer value: string, boolean, or number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Int(i) => write!(f, "{i}"),
            AnswerValue::Float(x) => write!(f, "{x}"),
            AnswerValue::String(s) => f.write_str(s),
        }
    }
}

/// Namespaced form of a raw question name: `__<id>__<name>`
pub fn namespace_name(template_id: &str, name: &str) -> String {
    format!("__{template_id}__{name}")
}

/// Namespace one question for combined collection
pub fn namespace_question(template_id: &str, question: &Question) -> Question {
    let mut namespaced = question.clone();
    namespaced.name = namespace_name(template_id, &question.name);
    namespaced.message = format!("[{template_id}] {}", question.message);
    namespaced
}

/// Merge the questions of several templates into one ordered, namespaced
/// list, preserving template order and each template's question order.
pub fn build_question_set(templates: &[(String, Vec<Question>)]) -> Vec<Question> {
    let mut combined = Vec::new();
    for (id, questions) in templates {
        for question in questions {
            combined.push(namespace_question(id, question));
        }
    }
    combined
}

/// Split a namespaced name into `(template id, raw name)`
pub fn split_namespaced(name: &str) -> Option<(String, String)> {
    let Ok(re) = Regex::new(r"^__([A-Za-z0-9_\-]+)__") else {
        return None;
    };
    let caps = re.captures(name)?;
    let id = caps.get(1)?.as_str().to_string();
    let raw = name[caps.get(0)?.end()..].to_string();
    Some((id, raw))
}

/// Group a namespaced answer map by owning template id, with raw names
/// and string-rendered values ready for the renderer.
pub fn answers_by_template(answers: &AnswerMap) -> BTreeMap<String, Vec<(String, String)>> {
    let mut grouped: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for (name, value) in answers {
        if let Some((id, raw)) = split_namespaced(name) {
            grouped.entry(id).or_default().push((raw, value.to_string()));
        }
    }
    grouped
}

/// Load a pre-built namespaced answer map from a YAML document.
pub fn load_answer_file(path: &Path) -> Result<AnswerMap> {
    let contents = std::fs::read_to_string(path).map_err(|e| ShipwrightError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_yaml::from_str(&contents).map_err(|e| ShipwrightError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Drive a single interactive session over a combined question list.
///
/// Callers must short-circuit an empty list before getting here; this
/// function assumes there is something to ask.
pub fn collect_interactive(questions: &[Question]) -> Result<AnswerMap> {
    let mut answers = AnswerMap::new();

    for question in questions {
        let value = ask(question)?;
        answers.insert(question.name.clone(), value);
    }

    Ok(answers)
}

fn ask(question: &Question) -> Result<AnswerValue> {
    if let Some(ref choices) = question.choices {
        let choice = Select::new(&question.message, choices.clone())
            .with_help_message("↑↓ to move, ENTER to select")
            .prompt()?;
        return Ok(AnswerValue::String(choice));
    }

    if let Some(serde_yaml::Value::Bool(default)) = question.default {
        let confirmed = Confirm::new(&question.message)
            .with_default(default)
            .prompt()?;
        return Ok(AnswerValue::Bool(confirmed));
    }

    let mut text = Text::new(&question.message);
    let default = question.default.as_ref().map(default_to_string);
    if let Some(ref default) = default {
        text = text.with_default(default);
    }
    Ok(AnswerValue::String(text.prompt()?))
}

fn default_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
