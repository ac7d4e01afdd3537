mod cli;
mod extract_cmd;
mod info_cmd;
mod normalize_cmd;
mod page_range;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            page,
            ref pages,
            columns,
            format,
        } => {
            let range = page.map(|p| p.to_string()).or_else(|| pages.clone());
            extract_cmd::run(file, range.as_deref(), usize::from(columns), format)
        }
        cli::Commands::Normalize { ref file } => normalize_cmd::run(file.as_deref()),
        cli::Commands::Info { ref file, format } => info_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
