use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// Build, package, and deploy addons
#[derive(Parser)]
#[command(name = "addons")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository root (discovered from the current directory if omitted)
    #[arg(long, global = true)]
    repo_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Determine which components need rebuilding from a list of changed files
    Changed {
        /// Newline-joined list of changed repository-relative paths
        files: String,
    },

    /// Build a component's frontend bundle and backend binaries
    Build {
        /// Component name
        component: String,

        /// Skip frontend builds whose bundle already exists
        #[arg(long)]
        fast: bool,
    },

    /// Build a component and upload it to the target host
    Install {
        /// Component name
        component: String,

        /// Upload host (falls back to the cached host file, then the
        /// configured default)
        #[arg(long)]
        host: Option<String>,

        /// Skip frontend builds whose bundle already exists
        #[arg(long)]
        fast: bool,
    },

    /// List known components
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show tool and repository status
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    let root = resolve_root(cli.repo_root.as_deref())?;
    tracing::debug!(root = %root.display(), "resolved repository root");

    match cli.command {
        Commands::Changed { files } => cmd::cmd_changed(&root, &files),
        Commands::Build { component, fast } => cmd::cmd_build(&root, &component, fast),
        Commands::Install {
            component,
            host,
            fast,
        } => cmd::cmd_install(&root, &component, host.as_deref(), fast),
        Commands::List { format } => cmd::cmd_list(&root, format),
        Commands::Status => cmd::cmd_status(&root),
    }
}

/// Resolve the repository root from the flag or by walking up from the
/// current directory
fn resolve_root(arg: Option<&std::path::Path>) -> Result<PathBuf> {
    match arg {
        Some(path) => {
            let path = addons_platform::expand_path(path)?;
            path.canonicalize()
                .with_context(|| format!("Repository root not accessible: {}", path.display()))
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(addons_platform::find_repo_root(&cwd)?)
        }
    }
}
