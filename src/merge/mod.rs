//! Block merge engine
//!
//! The aggregate docker-compose.yml is a plain-text document holding a
//! one-time header plus one sentinel-delimited block per installed
//! template. Blocks are keyed solely by template id: a merge always
//! excises the prior block (if any) and appends the new one, so merging
//! the same body twice yields a byte-identical document.
//!
//! Limitation: a block body containing its own opening sentinel pattern
//! makes the match ambiguous. Callers must not nest sentinel-like text
//! inside block bodies.

use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, ShipwrightError};

/// Aggregate orchestration file name
pub const AGGREGATE_FILE: &str = "docker-compose.yml";

const HEADER: &str = "version: \"2\"\n\nservices:";

/// Header written once when the aggregate file does not yet exist
pub fn aggregate_header() -> &'static str {
    HEADER
}

/// Opening sentinel line for a template id
pub fn open_sentinel(id: &str) -> String {
    format!("# ------> {id} ------>")
}

/// Closing sentinel line for a template id
pub fn close_sentinel(id: &str) -> String {
    format!("# <------ {id} <------")
}

fn block_regex(id: &str) -> Option<Regex> {
    let id = regex::escape(id);
    Regex::new(&format!(
        r"(?s)\n\n# ------> {id} ------>.*?# <------ {id} <------"
    ))
    .ok()
}

/// Excise the sentinel-delimited block for `id`, including its leading
/// blank-line separator. Returns the updated document and whether a
/// block was found.
pub fn remove_block(doc: &str, id: &str) -> (String, bool) {
    let Some(re) = block_regex(id) else {
        return (doc.to_string(), false);
    };
    match re.find(doc) {
        Some(found) => {
            let mut out = String::with_capacity(doc.len());
            out.push_str(&doc[..found.start()]);
            out.push_str(&doc[found.end()..]);
            (out, true)
        }
        None => (doc.to_string(), false),
    }
}

/// Replace-or-append the block for `id`: any prior block is excised,
/// then the new body is appended wrapped in the id's sentinels.
pub fn merge_block(doc: &str, id: &str, body: &str) -> String {
    let (doc, _) = remove_block(doc, id);
    format!(
        "{doc}\n\n{open}\n{body}\n{close}",
        open = open_sentinel(id),
        close = close_sentinel(id)
    )
}

/// Read the aggregate file, or start a fresh document from the header
/// when it does not exist yet.
pub fn load_or_init(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Ok(HEADER.to_string());
    }
    std::fs::read_to_string(path).map_err(|e| ShipwrightError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Persist the aggregate document as a single atomic replace: the
/// contents are written to a temporary file in the same directory and
/// renamed over the destination.
pub fn write_aggregate(path: &Path, contents: &str) -> Result<()> {
    let write_failed = |reason: String| ShipwrightError::FileWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let dir = path.parent().ok_or_else(|| write_failed("no parent directory".to_string()))?;
    std::fs::create_dir_all(dir).map_err(|e| write_failed(e.to_string()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    tmp.persist(path).map_err(|e| write_failed(e.to_string()))?;

    Ok(())
}
