use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use t_cli::{
    render_error, RealFileSystem, RemovalEngine, RemovalRequest, StdinConfirmer, TrashConfig,
};

/// A simple CLI tool for removing files safely.
///
/// Removed items are filed under the trash root and purged automatically
/// after the retention window; -f skips the trash and deletes forever.
#[derive(Parser, Debug)]
#[command(name = "t", version, about = "A simple CLI tool for removing files safely.")]
struct Args {
    /// The files and directories to remove.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Recursively remove directories.
    #[arg(short = 'r', long)]
    recurse: bool,

    /// Delete files forever instead of moving them to the trash.
    #[arg(short = 'f', long)]
    forever: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let request = RemovalRequest {
        targets: args.files,
        recurse: args.recurse,
        permanent: args.forever,
    };

    let fs = RealFileSystem;
    let config = TrashConfig::default();
    let confirmer = StdinConfirmer;

    match RemovalEngine::new(&fs, &config, &confirmer).run(&request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}
