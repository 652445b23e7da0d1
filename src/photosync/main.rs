use clap::Parser;
use colored::*;
use photosync::api::SyncApi;
use photosync::commands::{CmdMessage, MessageLevel};
use photosync::config::{Credentials, SyncPaths};
use photosync::error::Result;
use photosync::source::cloudinary::CloudinarySource;
use photosync::store::fs::FileCatalog;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Pick up a local .env before reading credentials. A missing credential
    // aborts here, before any network call.
    dotenvy::dotenv().ok();
    let credentials = Credentials::from_env()?;

    let paths = SyncPaths::new(cli.catalog.clone(), cli.backup_dir.clone());
    let source = CloudinarySource::new(credentials);
    let store = FileCatalog::from_paths(paths);
    let mut api = SyncApi::new(source, store);

    let dry_run = match cli.command {
        Some(Commands::Sync { dry_run }) => dry_run,
        None => false,
    };

    let result = api.sync(dry_run)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
