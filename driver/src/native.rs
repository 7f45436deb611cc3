use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

/// Executable path next to the current directory, named after the source file stem.
pub fn default_executable(input_file: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "a".to_string());
    PathBuf::from(".").join(format!("{}{}", stem, std::env::consts::EXE_SUFFIX))
}

/// Write `c_source` to a temporary `.c` file and hand it to `compiler`.
/// The temporary file is removed when this returns, on success or failure.
pub fn compile_c(c_source: &str, compiler: &str, executable: &Path) -> anyhow::Result<()> {
    let mut c_file = tempfile::Builder::new()
        .prefix("out-")
        .suffix(".c")
        .tempfile()
        .context("failed to create temporary C file")?;
    c_file
        .write_all(c_source.as_bytes())
        .and_then(|()| c_file.flush())
        .context("failed to write temporary C file")?;
    debug!(c_path = %c_file.path().display(), "Wrote generated C");

    let output = Command::new(compiler)
        .arg(c_file.path())
        .arg("-o")
        .arg(executable)
        .output()
        .with_context(|| format!("failed to execute `{}`", compiler))?;

    if !output.status.success() {
        anyhow::bail!(
            "{} failed ({}):\n{}{}",
            compiler,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
