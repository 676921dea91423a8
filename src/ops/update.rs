//! Update operation: the collect -> render -> merge pipeline
//!
//! Runs over one or more installed templates. With no ids given, every
//! installed template directory is implicated. Variable collection
//! happens in a single pass over the combined namespaced question set;
//! rendering and merging then proceed per template.

use std::path::Path;

use crate::collect::{self, AnswerMap};
use crate::error::{Result, ShipwrightError};
use crate::merge;
use crate::project::Project;
use crate::render::render;
use crate::template::{PROMPT_FILE, PromptFile, TemplateBundle};
use crate::ui;

pub fn run(project: &Project, ids: &[String], answers_file: Option<&Path>) -> Result<()> {
    assemble(project, ids, answers_file)
}

/// Collect variables for the implicated templates, render their raw
/// texts, write the per-template Dockerfile, and replace each
/// template's block inside the aggregate file.
pub(crate) fn assemble(
    project: &Project,
    ids: &[String],
    answers_file: Option<&Path>,
) -> Result<()> {
    let ids = if ids.is_empty() {
        project.installed_ids()?
    } else {
        ids.to_vec()
    };

    let mut question_sets = Vec::new();
    for id in &ids {
        let dir = project.template_dir(id);
        if !dir.is_dir() {
            return Err(ShipwrightError::NotInstalled { id: id.clone() });
        }
        let prompt = PromptFile::load(&dir.join(PROMPT_FILE))?;
        question_sets.push((id.clone(), prompt.questions));
    }

    let combined = collect::build_question_set(&question_sets);
    if combined.is_empty() {
        ui::info("Nothing to collect.");
        return Ok(());
    }

    let answers: AnswerMap = match answers_file {
        Some(path) => collect::load_answer_file(path)?,
        None => collect::collect_interactive(&combined)?,
    };

    let grouped = collect::answers_by_template(&answers);
    let aggregate_path = project.aggregate_path();
    let mut doc = merge::load_or_init(&aggregate_path)?;

    for id in &ids {
        let Some(pairs) = grouped.get(id) else {
            continue;
        };

        let dir = project.template_dir(id);
        let bundle = TemplateBundle::load_installed(&dir, id)?;

        if let Some(ref dockerfile) = bundle.dockerfile {
            let rendered = render(dockerfile, pairs);
            crate::common::fs::write_file(&dir.join("Dockerfile"), &rendered)?;
        }

        if let Some(ref fragment) = bundle.fragment {
            let rendered = render(fragment, pairs);
            doc = merge::merge_block(&doc, id, &rendered);
            merge::write_aggregate(&aggregate_path, &doc)?;
            ui::success(&format!("{id} added into {}.", merge::AGGREGATE_FILE));
        }
    }

    Ok(())
}
