use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "photosync", version = get_version())]
#[command(about = "Sync a Cloudinary photo library into the site catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to sync into (default: data/photos.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory for pre-sync backups (default: data/backups)
    #[arg(long, global = true, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the remote library and merge it into the catalog (the default)
    #[command(alias = "s")]
    Sync {
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}
