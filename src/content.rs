//! Cross-checks between a manifest and the content store it describes.
//!
//! The manifest never touches the filesystem itself. These helpers are for
//! build steps and guard-rail tests that want to confirm every listed
//! resource exists under a content root, and that nothing on disk was left
//! out of the manifest.

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Full location of a listed resource under `root`.
pub fn resource_path(root: &Path, manifest: &Manifest, name: &str, file: &str) -> Option<PathBuf> {
    manifest
        .resolve_path(name, file)
        .map(|relative| root.join(relative))
}

/// Report every category directory or file missing under `root`.
///
/// Problems are collected rather than short-circuiting so one run surfaces
/// the whole list.
pub fn verify_content(manifest: &Manifest, root: &Path) -> Vec<String> {
    let mut problems = Vec::new();
    for (name, category) in manifest.list() {
        let dir = root.join(&category.path);
        if !dir.is_dir() {
            problems.push(format!(
                "category '{name}': directory {} not found",
                dir.display()
            ));
            continue;
        }
        for file in &category.files {
            let resource = dir.join(file);
            if !resource.is_file() {
                problems.push(format!(
                    "category '{name}': {} not found",
                    resource.display()
                ));
            }
        }
    }

    for problem in &problems {
        warn!("{problem}");
    }
    problems
}

/// Markdown files inside category directories that the manifest does not list.
///
/// Paths are relative to `root` and sorted. Missing directories are skipped;
/// `verify_content` already reports those.
pub fn orphaned_files(manifest: &Manifest, root: &Path) -> Result<Vec<PathBuf>> {
    let mut orphans = Vec::new();
    for category in manifest {
        let dir = root.join(&category.path);
        if !dir.is_dir() {
            continue;
        }
        let entries =
            fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("reading {}", dir.display()))?;
            let path = entry.path();
            if !path.is_file() || !is_markdown(&path) {
                continue;
            }
            let file = entry.file_name();
            // Names that are not UTF-8 can never match a listed file.
            let listed = category
                .files
                .iter()
                .any(|listed| OsStr::new(listed) == file.as_os_str());
            if !listed {
                orphans.push(Path::new(&category.path).join(file));
            }
        }
    }
    orphans.sort();
    Ok(orphans)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Category;
    use tempfile::TempDir;

    fn manifest() -> Manifest {
        Manifest::from_categories(vec![
            Category::new("Caching Using Redis", "CachingUsingRedis", ["Redis.md"]),
            Category::new("WebSockets", "WebSockets", ["SocketIO.md"]),
        ])
        .unwrap()
    }

    #[test]
    fn resource_path_prefixes_root() {
        let root = Path::new("/srv/docs");
        assert_eq!(
            resource_path(root, &manifest(), "WebSockets", "SocketIO.md"),
            Some(root.join("WebSockets").join("SocketIO.md"))
        );
        assert_eq!(resource_path(root, &manifest(), "WebSockets", "Redis.md"), None);
    }

    #[test]
    fn verify_reports_missing_dirs_and_files() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("CachingUsingRedis")).unwrap();

        let problems = verify_content(&manifest(), root.path());
        assert_eq!(problems.len(), 2, "{problems:?}");
        assert!(problems[0].contains("Redis.md"));
        assert!(problems[1].contains("directory"));
    }

    #[test]
    fn orphans_ignore_listed_and_non_markdown_files() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("CachingUsingRedis");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("Redis.md"), "# Redis").unwrap();
        fs::write(dir.join("Draft.md"), "# Draft").unwrap();
        fs::write(dir.join("diagram.png"), [0u8]).unwrap();

        let orphans = orphaned_files(&manifest(), root.path()).unwrap();
        assert_eq!(orphans, vec![Path::new("CachingUsingRedis").join("Draft.md")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn orphans_include_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let root = TempDir::new().unwrap();
        let dir = root.path().join("WebSockets");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("SocketIO.md"), "# Socket.IO").unwrap();
        let odd = OsStr::from_bytes(b"caf\xe9.md");
        fs::write(dir.join(odd), "# latin-1").unwrap();

        let orphans = orphaned_files(&manifest(), root.path()).unwrap();
        assert_eq!(orphans, vec![Path::new("WebSockets").join(odd)]);
    }
}
