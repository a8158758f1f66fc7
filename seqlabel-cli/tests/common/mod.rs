#![allow(dead_code)]

use assert_cmd::Command;
use seqlabel_core::SequenceDataset;
use std::path::{Path, PathBuf};

/// Absolute path of a fixture under `tests/data`
pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Runs the SeqLabel CLI with the given arguments, asserting success
pub fn run_seqlabel(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("seqlabel")?;
    cmd.args(args);
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Runs an extraction subcommand writing to `output`, then loads the dataset
pub fn extract<P: AsRef<Path>>(
    subcommand: &str,
    flags: &[&str],
    inputs: &[P],
    output: &Path,
) -> Result<SequenceDataset, Box<dyn std::error::Error>> {
    let output_str = output.to_str().ok_or("non UTF-8 output path")?;
    let mut args = vec!["-q", subcommand];
    args.extend_from_slice(flags);
    args.extend_from_slice(&["-o", output_str]);
    for input in inputs {
        args.push(input.as_ref().to_str().ok_or("non UTF-8 input path")?);
    }
    run_seqlabel(&args)?;
    Ok(SequenceDataset::load(output)?)
}
