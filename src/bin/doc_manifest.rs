//! Command-line view of the documentation category manifest.
//!
//! Usage:
//!   doc-manifest list
//!   doc-manifest get "Backend Intro" --json
//!   doc-manifest resolve "Caching Using Redis" Redis.md --rooted
//!   doc-manifest --manifest docs/manifest.json verify --orphans
//!   doc-manifest export > manifest.json

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use doc_manifest::{
    MANIFEST_SCHEMA_JSON, Manifest, builtin, orphaned_files, resource_path, verify_content,
};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "doc-manifest", version)]
#[command(about = "Inspect the documentation category manifest")]
struct Cli {
    /// Read categories from a JSON manifest document instead of the built-in table.
    #[arg(long, global = true, value_name = "FILE")]
    manifest: Option<PathBuf>,
    /// Directory holding one folder per category.
    #[arg(
        long,
        global = true,
        env = "DOC_MANIFEST_CONTENT_ROOT",
        default_value = ".",
        value_name = "DIR"
    )]
    content_root: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories in navigation order.
    List {
        /// Print the manifest as a JSON document.
        #[arg(long)]
        json: bool,
    },
    /// Show one category by exact display name.
    Get {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the path of a file within a category.
    Resolve {
        name: String,
        file: String,
        /// Prefix the path with the content root.
        #[arg(long)]
        rooted: bool,
    },
    /// Print the manifest as a JSON document.
    Export,
    /// Check that every listed file exists under the content root.
    Verify {
        /// Also report markdown files the manifest does not list.
        #[arg(long)]
        orphans: bool,
    },
    /// Print the JSON Schema for manifest documents.
    Schema,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let manifest = load_manifest(cli.manifest.as_deref())?;

    match cli.command {
        Command::List { json } => list(&manifest, json),
        Command::Get { name, json } => get(&manifest, &name, json),
        Command::Resolve {
            name,
            file,
            rooted,
        } => resolve(&manifest, &cli.content_root, &name, &file, rooted),
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&manifest.to_document())?);
            Ok(())
        }
        Command::Verify { orphans } => verify(&manifest, &cli.content_root, orphans),
        Command::Schema => {
            print!("{MANIFEST_SCHEMA_JSON}");
            Ok(())
        }
    }
}

fn load_manifest(path: Option<&Path>) -> Result<Cow<'static, Manifest>> {
    match path {
        Some(path) => {
            let manifest = Manifest::load(path)
                .with_context(|| format!("loading manifest {}", path.display()))?;
            Ok(Cow::Owned(manifest))
        }
        None => Ok(Cow::Borrowed(
            builtin().context("validating built-in manifest")?,
        )),
    }
}

fn list(manifest: &Manifest, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&manifest.to_document())?);
        return Ok(());
    }
    for (name, category) in manifest.list() {
        println!("{name}\t{}\t{}", category.path, category.files.len());
    }
    Ok(())
}

fn get(manifest: &Manifest, name: &str, json: bool) -> Result<()> {
    let Some(category) = manifest.get(name) else {
        bail!("category not found: {name}");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(category)?);
        return Ok(());
    }
    println!("name: {}", category.name);
    println!("path: {}", category.path);
    println!("files:");
    for file in &category.files {
        println!("  {file}");
    }
    Ok(())
}

fn resolve(
    manifest: &Manifest,
    content_root: &Path,
    name: &str,
    file: &str,
    rooted: bool,
) -> Result<()> {
    let resolved = if rooted {
        resource_path(content_root, manifest, name, file)
    } else {
        manifest.resolve_path(name, file)
    };
    match resolved {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None if manifest.get(name).is_none() => bail!("category not found: {name}"),
        None => bail!("file not found in category '{name}': {file}"),
    }
}

fn verify(manifest: &Manifest, content_root: &Path, orphans: bool) -> Result<()> {
    let mut problems = verify_content(manifest, content_root);
    if orphans {
        let extra = orphaned_files(manifest, content_root)?;
        problems.extend(
            extra
                .into_iter()
                .map(|path| format!("{} is not listed in the manifest", path.display())),
        );
    }

    if problems.is_empty() {
        println!(
            "{} categories verified under {}",
            manifest.len(),
            content_root.display()
        );
        return Ok(());
    }
    for problem in &problems {
        println!("{problem}");
    }
    bail!("{} content problem(s) found", problems.len())
}
