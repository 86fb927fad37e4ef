//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write temporary input files and assert error handling
//! behaviour. These helpers keep the test cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = super::render_summary(summary, &mut buffer) {
        panic!("rendering into memory must succeed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("rendered output must be UTF-8: {err}"),
    }
}
