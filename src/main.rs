use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Norvig-style n-gram frequency table.
    #[arg(global = true, short, long, default_value = "data/ngrams-all.tsv")]
    ngrams: String,

    /// Build the language model from raw reference text instead of an
    /// n-gram table.
    #[arg(global = true, long)]
    corpus: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Solve(cmd::solve::SolveArgs),
    Scramble(cmd::scramble::ScrambleArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Solve(args) => cmd::solve::run(args, &cli.ngrams, &cli.corpus),
        Commands::Scramble(args) => cmd::scramble::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
