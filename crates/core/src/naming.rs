//! Slot naming policy
//!
//! The main slot has one fixed name. An auxiliary slot is named after the
//! project it points at, so its name alone says which project it was made
//! for.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Name of the main slot
pub const MAIN_SLOT_NAME: &str = "current_project";

/// Prefix prepended to a project name to form its auxiliary slot name
pub const AUX_SLOT_PREFIX: &str = "project_";

const MAIN_PATTERN: &str = r"^current_project$";
const AUX_PATTERN: &str = r"^project_[A-Z]+-\d{7}$";

static ANY_SLOT: Lazy<SlotPattern> = Lazy::new(|| slot_name_pattern(true, true));

/// Slot name for a project
///
/// The main slot name ignores `project_name`.
pub fn slot_name(project_name: &str, is_main: bool) -> String {
    if is_main {
        return MAIN_SLOT_NAME.to_string();
    }
    format!("{AUX_SLOT_PREFIX}{project_name}")
}

/// Compiled matcher for managed slot names
#[derive(Debug, Clone)]
pub struct SlotPattern {
    regex: Option<Regex>,
}

impl SlotPattern {
    /// Whether `name` is a managed slot name under this pattern
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// Pattern matching main and/or auxiliary slot names
///
/// With both flags clear the pattern matches nothing.
pub fn slot_name_pattern(include_main: bool, include_aux: bool) -> SlotPattern {
    let parts: Vec<&str> = [(include_main, MAIN_PATTERN), (include_aux, AUX_PATTERN)]
        .into_iter()
        .filter_map(|(on, pattern)| on.then_some(pattern))
        .collect();

    if parts.is_empty() {
        return SlotPattern { regex: None };
    }

    let regex = Regex::new(&parts.join("|")).expect("slot patterns are valid regexes");
    SlotPattern { regex: Some(regex) }
}

/// Whether the final segment of `name_or_path` is a managed slot name
pub fn matches_slot_pattern(name_or_path: impl AsRef<Path>) -> bool {
    name_or_path
        .as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| ANY_SLOT.is_match(name))
}
