use clap::Parser;
use gotoh_generate::{generate_pair, GenerateArgs};
use gotoh_types::to_string;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about = "Generate a FASTA pair: a random DNA sequence and a mutated copy.")]
struct Cli {
    #[clap(flatten)]
    generate: GenerateArgs,

    /// Where to write the base sequence.
    #[clap(long, default_value = "seq1.fasta")]
    seq1: PathBuf,

    /// Where to write the mutated sequence.
    #[clap(long, default_value = "seq2.fasta")]
    seq2: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(cli.generate.seed);
    let (a, b) = generate_pair(&cli.generate, &mut rng);
    let (a, b) = (to_string(&a), to_string(&b));

    std::fs::write(&cli.seq1, format!(">Sequence_1\n{a}\n")).expect("writing seq1 failed");
    std::fs::write(&cli.seq2, format!(">Sequence_2\n{b}\n")).expect("writing seq2 failed");

    println!("Sequence 1: {a}");
    println!("Sequence 2: {b}");
    println!(
        "Files {} and {} created.",
        cli.seq1.display(),
        cli.seq2.display()
    );
}
