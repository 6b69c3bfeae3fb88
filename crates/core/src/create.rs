//! New project allocation

use crate::error::{DirmanError, Result};
use crate::index;
use crate::resolver::Layout;
use rand::Rng;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// Largest serial that fits in seven digits
pub const MAX_SERIAL: u32 = 9_999_999;

const README_FILE: &str = "README.md";

/// Parameters for [`create_project`]
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// One-letter category codes, any case, any order, duplicates allowed
    pub prefixes: Vec<String>,
    pub title: String,
    pub description: String,
    /// Serial to use; a random one is drawn when `None`
    pub serial: Option<u32>,
}

/// Normalize category codes to sorted, deduplicated uppercase letters
pub fn normalize_prefixes<S: AsRef<str>>(codes: &[S]) -> Result<String> {
    let mut letters = BTreeSet::new();
    for code in codes {
        let code = code.as_ref().trim().to_ascii_uppercase();
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => {
                letters.insert(c);
            }
            _ => {
                return Err(DirmanError::invalid_argument(
                    code,
                    "prefix codes must be single letters",
                ))
            }
        }
    }
    if letters.is_empty() {
        return Err(DirmanError::invalid_argument(
            "",
            "at least one prefix code is required",
        ));
    }
    Ok(letters.into_iter().collect())
}

/// Directory name for a prefix string and serial, e.g. `AD-0001234`
pub fn project_name(prefixes: &str, serial: u32) -> String {
    format!("{prefixes}-{serial:07}")
}

/// Draw a fresh serial
pub fn random_serial() -> u32 {
    rand::thread_rng().gen_range(0..=MAX_SERIAL)
}

/// Create a project directory with a seeded `README.md`
///
/// Fails with `AlreadyExists` if the name is taken. A random serial is not
/// retried on collision.
pub fn create_project(layout: &Layout, request: &NewProject) -> Result<PathBuf> {
    let prefixes = normalize_prefixes(request.prefixes.as_slice())?;
    let serial = match request.serial {
        Some(serial) if serial > MAX_SERIAL => {
            return Err(DirmanError::invalid_argument(
                serial.to_string(),
                "serial must fit in seven digits",
            ))
        }
        Some(serial) => serial,
        None => random_serial(),
    };

    let name = project_name(&prefixes, serial);
    let path = layout.project_path(&name);
    if index::entry_exists(&path)? {
        return Err(DirmanError::AlreadyExists { path });
    }

    fs::create_dir(&path).map_err(|e| DirmanError::io("create directory", &path, e))?;

    let readme = path.join(README_FILE);
    fs::write(&readme, readme_contents(&request.title, &name, &request.description))
        .map_err(|e| DirmanError::io("write", &readme, e))?;

    tracing::info!(project = %name, path = %path.display(), "created project");
    Ok(path)
}

fn readme_contents(title: &str, name: &str, description: &str) -> String {
    let mut contents = format!("# {}\n## {name}\n\n", title.trim());
    let description = description.trim();
    if !description.is_empty() {
        contents.push_str(description);
        contents.push('\n');
    }
    contents
}
