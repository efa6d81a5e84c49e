use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

use crate::sequence::FragmentSequence;

/// Extension trait for [`FragmentSequence`] that adds runtime linting
/// capabilities.
pub trait FragmentSequenceExt {
    /// Writes the composed sequence to a temporary file and runs the engine
    /// against it, panicking when the engine reports violations.
    ///
    /// # Arguments
    ///
    /// * `project_path` - Optional path to the project to lint
    fn assert_lints(&self, project_path: Option<&str>) -> Result<Output>;
}

impl FragmentSequenceExt for FragmentSequence {
    fn assert_lints(&self, project_path: Option<&str>) -> Result<Output> {
        let args = if let Some(path) = project_path {
            vec!["--project", path]
        } else {
            vec![]
        };

        let output = run_check(self, &args)?;

        // Check if the engine failed (non-zero exit status)
        if !output.status.success() {
            if !output.stdout.is_empty() {
                println!("Lint stdout:\n{}", String::from_utf8_lossy(&output.stdout));
            }
            if !output.stderr.is_empty() {
                eprintln!("Lint stderr:\n{}", String::from_utf8_lossy(&output.stderr));
            }

            // Panic to fail the test
            panic!("flatlint checks failed!");
        }

        Ok(output)
    }
}

fn run_check(sequence: &FragmentSequence, args: &[&str]) -> Result<Output> {
    // The sequence travels to the engine through a temporary config file
    let temp_file = NamedTempFile::new().context("Failed to create temporary configuration file")?;
    let config_path = temp_file.path().to_path_buf();

    sequence
        .write_to_file(&config_path)
        .context("Failed to write configuration to temporary file")?;

    let output = engine_command(&config_path, args)
        .output()
        .context("Failed to execute flatlint")?;

    Ok(output)
}

fn engine_command(config_path: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("flatlint");
    cmd.arg("check");
    cmd.arg("--config");
    cmd.arg(config_path);

    for arg in args {
        cmd.arg(arg);
    }

    cmd
}
