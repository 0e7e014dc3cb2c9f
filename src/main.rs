use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::error;

mod bundle;
mod env;
mod icon;
mod networking;
mod process;
mod workspace;

#[derive(Parser, Debug)]
#[command(
    name = "goupile-portable",
    author,
    version,
    about = "Bundle a Goupile instance as a portable EXE for offline use"
)]
struct Cli {
    /// URL of the instance to bundle.
    url: String,

    /// Destination for the final executable (defaults next to the workspace).
    #[arg(short = 'O', long = "output_file")]
    output_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = bundle::run(&cli.url, cli.output_file.as_deref()).await {
        error!("bundle failed: {err}");
        std::process::exit(1);
    }
}
