#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use doc_manifest::Manifest;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doc-manifest"));
    cmd.env_remove("DOC_MANIFEST_CONTENT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail, returning its stderr.
pub fn run_failing(mut cmd: Command) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn write_manifest(dir: &Path, document: &Value) -> Result<PathBuf> {
    let path = dir.join("manifest.json");
    fs::write(&path, serde_json::to_vec_pretty(document)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create every file the manifest lists under `root`.
pub fn populate_content(manifest: &Manifest, root: &Path) -> Result<()> {
    for category in manifest {
        let dir = root.join(&category.path);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        for file in &category.files {
            fs::write(dir.join(file), format!("# {file}\n"))?;
        }
    }
    Ok(())
}
