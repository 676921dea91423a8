//! Package reference expansion
//!
//! A package-kind template aggregates references to compose templates
//! instead of contributing its own block. References are embedded in
//! the package fragment as `{% id %}` or `{% id:version %}` tokens and
//! expand into an explicit dependency list resolved before any
//! rendering or merging begins.

use regex::Regex;

/// One compose requirement produced by expanding a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub id: String,
    pub version: Option<String>,
}

/// Scan a package fragment for reference tokens, in document order.
pub fn scan_references(fragment: &str) -> Vec<PackageRef> {
    let Ok(re) = Regex::new(r"\{% ?([A-Za-z0-9_\-]+(?::[A-Za-z0-9.\-]+)?) ?%\}") else {
        return Vec::new();
    };

    re.captures_iter(fragment)
        .filter_map(|caps| caps.get(1))
        .map(|token| {
            let token = token.as_str();
            match token.split_once(':') {
                Some((id, version)) => PackageRef {
                    id: id.to_string(),
                    version: Some(version.to_string()),
                },
                None => PackageRef {
                    id: token.to_string(),
                    version: None,
                },
            }
        })
        .collect()
}
