use clap::Parser;
use gitgrep::commands::{execute_grep, GrepOptions};
use gitgrep::core::{error::Result, print_error};

#[derive(Parser)]
#[command(name = "gitgrep")]
#[command(about = "Browse git grep results as a collapsible file tree")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Print all matches grouped by file instead of browsing
    #[arg(long, conflicts_with_all = ["open", "json"])]
    list: bool,

    /// Open the selected match in $EDITOR
    #[arg(long)]
    open: bool,

    /// Print the selected match as JSON
    #[arg(long, conflicts_with = "open")]
    json: bool,

    /// Pattern passed to git grep
    pattern: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence when set
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = GrepOptions {
        pattern: cli.pattern,
        ignore_case: cli.ignore_case,
        list: cli.list,
        open: cli.open,
        json: cli.json,
    };

    if let Err(e) = execute_grep(options) {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
