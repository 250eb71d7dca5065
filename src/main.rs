use anyhow::{Context, Result};
use clap::Parser;
use filehandle::{FileHandle, FileType, HandleReport};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "filehandle")]
#[command(version, about = "Inspect file handles and the storage origin they belong to", long_about = None)]
struct Cli {
    /// Paths to inspect
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<String>,

    /// Storage origin for every path (classpath, internal, external, absolute, local)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "absolute")]
    file_type: FileType,

    /// Report on a child of each path instead
    #[arg(long, value_name = "NAME", conflicts_with_all = ["parent", "sibling"])]
    child: Option<String>,

    /// Report on the parent of each path instead
    #[arg(long, conflicts_with = "sibling")]
    parent: bool,

    /// Report on a sibling of each path instead
    #[arg(long, value_name = "NAME")]
    sibling: Option<String>,

    /// Print a JSON array instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the handle to report on for one input path
    fn resolve(&self, raw_path: &str) -> Result<FileHandle> {
        let handle = FileHandle::with_type(raw_path, self.file_type);

        if let Some(name) = &self.child {
            return Ok(handle.child(name));
        }
        if self.parent {
            return Ok(handle.parent());
        }
        if let Some(name) = &self.sibling {
            return handle
                .sibling(name)
                .with_context(|| format!("Failed to resolve sibling {:?} of {}", name, handle));
        }
        Ok(handle)
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("filehandle={}", default_level)))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    info!(count = cli.paths.len(), file_type = %cli.file_type, "inspecting paths");

    let reports = cli
        .paths
        .iter()
        .map(|raw_path| cli.resolve(raw_path).map(|handle| HandleReport::from(&handle)))
        .collect::<Result<Vec<_>>>()?;

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{}", json);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", report);
        }
    }

    debug!(count = reports.len(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["filehandle", "a/b.txt"]).unwrap();
        assert_eq!(cli.file_type, FileType::Absolute);
        assert_eq!(cli.paths, vec!["a/b.txt".to_string()]);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_type() {
        let cli = Cli::try_parse_from(["filehandle", "--type", "Internal", "x.png"]).unwrap();
        assert_eq!(cli.file_type, FileType::Internal);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from(["filehandle", "-t", "sdcard", "x.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_path() {
        assert!(Cli::try_parse_from(["filehandle"]).is_err());
    }

    #[test]
    fn test_child_and_parent_conflict() {
        let result = Cli::try_parse_from(["filehandle", "--child", "x", "--parent", "dir"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_child() {
        let cli = Cli::try_parse_from(["filehandle", "-t", "local", "--child", "save.json", "data"])
            .unwrap();
        let handle = cli.resolve("data").unwrap();
        assert_eq!(handle.path(), "data/save.json");
        assert_eq!(handle.file_type(), FileType::Local);
    }

    #[test]
    fn test_resolve_sibling_of_root_fails() {
        let cli = Cli::try_parse_from(["filehandle", "-t", "internal", "--sibling", "x", ""])
            .unwrap();
        let err = cli.resolve("").unwrap_err();
        assert!(err.to_string().contains("Failed to resolve sibling"));
    }
}
