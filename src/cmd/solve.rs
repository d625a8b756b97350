use crate::reports;
use cipherforge::config::SolverParams;
use cipherforge::error::CfResult;
use cipherforge::language::LanguageModel;
use cipherforge::optimizer::runner;
use cipherforge::optimizer::swaps::SwapMode;
use cipherforge::text::{self, SubstitutionMap};
use clap::Args;
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Ciphertext file.
    #[arg(short, long)]
    pub input: String,

    #[command(flatten)]
    pub params: SolverParams,

    /// Emit the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    key: String,
    score: f32,
    evaluated: usize,
    accepted: usize,
    mode: SwapMode,
    restarts: usize,
    plaintext: &'a str,
}

pub fn run(args: &SolveArgs, ngrams: &str, corpus: &Option<String>) -> CfResult<()> {
    let model = match corpus {
        Some(path) => {
            info!("📚 Building language model from corpus: {}", path);
            LanguageModel::from_text(&fs::read_to_string(path)?)?
        }
        None => {
            info!("📚 Loading n-gram table: {}", ngrams);
            LanguageModel::from_ngram_tsv(ngrams)?
        }
    };

    let ciphertext = fs::read_to_string(&args.input)?;
    let filtered = text::filter_letters(&ciphertext);
    info!(
        "🔓 Solving {} ({} usable letters, mode: {})",
        args.input,
        filtered.len(),
        args.params.mode
    );

    let solution = runner::run_restarts(&model, &ciphertext, &args.params)?;
    let map = SubstitutionMap::from_key(&solution.key, model.order());
    let plaintext = map.translate(&filtered);

    if args.json {
        let report = SolveReport {
            key: solution.key.to_string(),
            score: solution.score,
            evaluated: solution.evaluated,
            accepted: solution.accepted,
            mode: args.params.mode,
            restarts: args.params.restarts,
            plaintext: &plaintext,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", plaintext);
    reports::print_mapping_table(&map);
    reports::print_frequency_table(&model, &text::rank_letter_frequencies(&ciphertext));
    println!(
        "\nScore: {:.2} ({} swaps evaluated, {} accepted)",
        solution.score, solution.evaluated, solution.accepted
    );
    Ok(())
}
