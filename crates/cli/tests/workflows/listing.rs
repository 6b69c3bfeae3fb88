//! Read-only commands: status, ls, prefixes, config, about

use crate::common::TestRoots;
use crate::dirman;
use anyhow::Result;
use std::fs;

#[test]
fn ls_lists_every_project() -> Result<()> {
    let roots = TestRoots::new()?;
    roots.add_project("D-0000001")?;
    roots.add_project("AH-0000002")?;
    fs::write(roots.project_root().join("notes.txt"), "not a project")?;

    let result = dirman!(&roots, "ls").assert_success()?;
    assert!(result.contains_stdout("D-0000001"));
    assert!(result.contains_stdout("AH-0000002"));
    assert!(!result.contains_stdout("notes.txt"));
    Ok(())
}

#[test]
fn ls_on_empty_root() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(&roots, "ls").assert_success()?;
    assert!(result.contains_stdout("No projects found"));
    Ok(())
}

#[test]
fn no_subcommand_runs_status() -> Result<()> {
    let roots = TestRoots::new()?;
    roots.add_project("D-0000001")?;
    dirman!(&roots, "activate", "D-0000001").assert_success()?;

    let mut cmd = crate::common::cli::DirmanCommand::new(&roots);
    let result = cmd.args(&[]).assert_success()?;
    assert!(result.contains_stdout("Active Projects"));
    assert!(result.contains_stdout("Projects in"));
    Ok(())
}

#[test]
fn flags_override_environment_roots() -> Result<()> {
    let roots = TestRoots::new()?;
    let other = roots.home().join("elsewhere");
    fs::create_dir_all(other.join("S-0000009"))?;
    let other_str = other.display().to_string();

    let result = dirman!(&roots, "ls", "--project-root", other_str.as_str()).assert_success()?;
    assert!(result.contains_stdout("S-0000009"));
    Ok(())
}

#[test]
fn config_file_is_honored() -> Result<()> {
    let roots = TestRoots::new()?;
    let other = roots.home().join("work");
    fs::create_dir_all(other.join("R-0000004"))?;
    fs::write(
        roots.config_path(),
        format!("project_root = \"{}\"\n", other.display()),
    )?;

    let mut cmd = crate::common::cli::DirmanCommand::new(&roots);
    cmd.args(&["ls"]).env_remove("DIRMAN_PROJECT_ROOT");
    let result = cmd.assert_success()?;
    assert!(result.contains_stdout("R-0000004"));
    Ok(())
}

#[test]
fn empty_root_override_is_rejected() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(&roots, "ls")
        .env("DIRMAN_PROJECT_ROOT", "")
        .assert_failure()?;
    assert!(result.contains_stderr("project_root must not be empty"));
    Ok(())
}

#[test]
fn missing_explicit_config_file_is_reported() -> Result<()> {
    let roots = TestRoots::new()?;
    let absent = roots.home().join("absent.toml");

    let result = dirman!(&roots, "ls")
        .env("DIRMAN_CONFIG", absent.to_str().unwrap_or_default())
        .assert_failure()?;
    assert!(result.contains_stderr("failed to read config file"));
    Ok(())
}

#[test]
fn invalid_config_file_is_reported() -> Result<()> {
    let roots = TestRoots::new()?;
    fs::write(roots.config_path(), "unknown_key = 1\n")?;

    let result = dirman!(&roots, "ls").assert_failure()?;
    assert!(result.contains_stderr("failed to parse config file"));
    Ok(())
}

#[test]
fn prefixes_prints_json() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(&roots, "prefixes").assert_success()?;
    let json: serde_json::Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(json["A"], "Artistic");
    assert_eq!(json.as_object().map(|o| o.len()), Some(9));

    let long = dirman!(&roots, "prefixes", "--long").assert_success()?;
    let json: serde_json::Value = serde_json::from_str(&long.stdout)?;
    assert_eq!(json["R"]["short"], "Restricted");
    Ok(())
}

#[test]
fn config_path_and_example() -> Result<()> {
    let roots = TestRoots::new()?;

    let path = dirman!(&roots, "config", "--path").assert_success()?;
    assert_eq!(path.stdout.trim(), roots.config_path().display().to_string());

    let example = dirman!(&roots, "config", "--example").assert_success()?;
    assert!(example.contains_stdout("project_root"));
    assert!(example.contains_stdout("symlink_root"));
    Ok(())
}

#[test]
fn config_shows_effective_roots() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(&roots, "config").assert_success()?;
    assert!(result.contains_stdout(&roots.project_root().display().to_string()));
    assert!(result.contains_stdout(&roots.symlink_root().display().to_string()));
    Ok(())
}

#[test]
fn about_prints_version() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(&roots, "about").assert_success()?;
    assert!(result.contains_stdout(env!("CARGO_PKG_VERSION")));
    Ok(())
}
