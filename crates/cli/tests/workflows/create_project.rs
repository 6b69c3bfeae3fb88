//! Project creation through the binary

use crate::common::TestRoots;
use crate::dirman;
use anyhow::Result;
use std::fs;

#[test]
fn create_writes_readme_and_activates() -> Result<()> {
    let roots = TestRoots::new()?;

    let result = dirman!(
        &roots,
        "create",
        "-p",
        "d",
        "-p",
        "a",
        "-t",
        "Plotter",
        "-d",
        "Pen plotter rebuild",
        "--serial",
        "42"
    )
    .assert_success()?;
    assert!(result.contains_stdout("AD-0000042"));

    let project = roots.project_root().join("AD-0000042");
    let readme = fs::read_to_string(project.join("README.md"))?;
    assert_eq!(readme, "# Plotter\n## AD-0000042\n\nPen plotter rebuild\n");
    assert_eq!(roots.target(&roots.main_slot()), Some(project));
    Ok(())
}

#[test]
fn create_replaces_previous_main() -> Result<()> {
    let roots = TestRoots::new()?;
    roots.add_project("D-0000001")?;
    dirman!(&roots, "activate", "D-0000001").assert_success()?;

    dirman!(&roots, "create", "-p", "s", "-t", "Gift", "--serial", "7").assert_success()?;

    let project = roots.project_root().join("S-0000007");
    assert_eq!(roots.target(&roots.main_slot()), Some(project));
    assert_eq!(roots.target(&roots.aux_slot("D-0000001")), None);
    Ok(())
}

#[test]
fn create_no_activate_leaves_slots_alone() -> Result<()> {
    let roots = TestRoots::new()?;

    dirman!(
        &roots,
        "create",
        "-p",
        "h",
        "-t",
        "Bench",
        "--serial",
        "1",
        "--no-activate"
    )
    .assert_success()?;

    assert!(roots.project_root().join("H-0000001").is_dir());
    assert_eq!(roots.target(&roots.main_slot()), None);
    Ok(())
}

#[test]
fn create_existing_serial_fails() -> Result<()> {
    let roots = TestRoots::new()?;
    roots.add_project("D-0000005")?;

    let result =
        dirman!(&roots, "create", "-p", "d", "-t", "Dup", "--serial", "5").assert_failure()?;
    assert!(result.contains_stderr("already exists"));
    Ok(())
}

#[test]
fn create_rejects_multi_letter_prefix() -> Result<()> {
    let roots = TestRoots::new()?;

    dirman!(&roots, "create", "-p", "dd", "-t", "Bad", "--serial", "3").assert_failure()?;
    assert_eq!(fs::read_dir(roots.project_root())?.count(), 0);
    Ok(())
}

#[test]
fn create_random_serial_has_seven_digits() -> Result<()> {
    let roots = TestRoots::new()?;

    dirman!(&roots, "create", "-p", "o", "-t", "Lib", "--no-activate").assert_success()?;

    let names: Vec<String> = fs::read_dir(roots.project_root())?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    assert_eq!(names.len(), 1);
    let serial = names[0].strip_prefix("O-").expect("prefix");
    assert_eq!(serial.len(), 7);
    assert!(serial.chars().all(|c| c.is_ascii_digit()));
    Ok(())
}
