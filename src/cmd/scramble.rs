use crate::reports;
use cipherforge::error::CfResult;
use cipherforge::text;
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScrambleArgs {
    /// Plaintext file to encipher.
    #[arg(short, long)]
    pub input: String,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Also print the true decode key.
    #[arg(long, default_value_t = false)]
    pub show_key: bool,
}

pub fn run(args: &ScrambleArgs) -> CfResult<()> {
    let plaintext = fs::read_to_string(&args.input)?;

    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let (ciphertext, truth) = text::scramble(&plaintext, &mut rng)?;
    info!("🔒 Enciphered {} letters from {}", ciphertext.len(), args.input);

    println!("{}", ciphertext);
    if args.show_key {
        reports::print_mapping_table(&truth);
    }
    Ok(())
}
