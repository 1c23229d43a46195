//! Test-fixture generator: a random DNA sequence plus a mutated copy with a
//! bounded number of substitutions, deletions, and insertions.
//!
//! Only used to produce alignment inputs; not part of the alignment
//! contract.

use clap::Parser;
use gotoh_types::{Base, Sequence};
use itertools::Itertools;
use rand::Rng;

const ALPH: [Base; 4] = [b'A', b'T', b'G', b'C'];

#[derive(Parser, Clone, Debug)]
pub struct GenerateArgs {
    /// Length of the base sequence.
    #[clap(short = 'n', long, default_value_t = 20)]
    pub length: usize,

    /// Number of substitutions; drawn from 2..=7 when absent.
    #[clap(long)]
    pub substitutions: Option<usize>,

    /// Number of deletions; drawn from 1..=4 when absent.
    #[clap(long)]
    pub deletions: Option<usize>,

    /// Number of insertions; drawn from 1..=3 when absent.
    #[clap(long)]
    pub insertions: Option<usize>,

    /// Seed to initialize the RNG for reproducibility.
    #[clap(long, default_value_t = 42)]
    pub seed: u64,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: 20,
            substitutions: None,
            deletions: None,
            insertions: None,
            seed: 42,
        }
    }
}

fn rand_base(rng: &mut impl Rng) -> Base {
    ALPH[rng.gen_range(0..4)]
}

/// A random base different from `cur`.
fn rand_other_base(cur: Base, rng: &mut impl Rng) -> Base {
    loop {
        let b = rand_base(rng);
        if b != cur {
            return b;
        }
    }
}

/// Generate a random DNA sequence of length `n`.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    (0..n).map(|_| rand_base(rng)).collect_vec()
}

/// Mutate `seq`: first the substitutions, then the deletions, then the
/// insertions, each at a uniformly random position. Substitutions always
/// change the base.
pub fn mutate(seq: &[Base], args: &GenerateArgs, rng: &mut impl Rng) -> Sequence {
    let mut b = seq.to_vec();

    let num_sub = args.substitutions.unwrap_or_else(|| rng.gen_range(2..=7));
    for _ in 0..num_sub {
        if b.is_empty() {
            break;
        }
        let pos = rng.gen_range(0..b.len());
        b[pos] = rand_other_base(b[pos], rng);
    }

    let num_del = args.deletions.unwrap_or_else(|| rng.gen_range(1..=4));
    for _ in 0..num_del {
        // Never delete the last remaining base.
        if b.len() > 1 {
            let pos = rng.gen_range(0..b.len());
            b.remove(pos);
        }
    }

    let num_ins = args.insertions.unwrap_or_else(|| rng.gen_range(1..=3));
    for _ in 0..num_ins {
        let pos = rng.gen_range(0..=b.len());
        b.insert(pos, rand_base(rng));
    }

    b
}

/// Generate a base sequence and a mutated copy of it.
pub fn generate_pair(args: &GenerateArgs, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = random_sequence(args.length, rng);
    let b = mutate(&a, args, rng);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_same_pair() {
        let args = GenerateArgs::default();
        let p1 = generate_pair(&args, &mut ChaCha8Rng::seed_from_u64(args.seed));
        let p2 = generate_pair(&args, &mut ChaCha8Rng::seed_from_u64(args.seed));
        assert_eq!(p1, p2);
    }

    #[test]
    fn mutation_counts_bound_the_length() {
        let args = GenerateArgs {
            length: 50,
            substitutions: Some(3),
            deletions: Some(2),
            insertions: Some(1),
            ..GenerateArgs::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let (a, b) = generate_pair(&args, &mut rng);
            assert_eq!(a.len(), 50);
            // Substitutions keep the length; at this size the single-base
            // guard never kicks in, so 2 deletions and 1 insertion always
            // land on 49.
            assert_eq!(b.len(), 49);
        }
    }

    #[test]
    fn substitutions_change_the_base() {
        let args = GenerateArgs {
            length: 30,
            substitutions: Some(5),
            deletions: Some(0),
            insertions: Some(0),
            ..GenerateArgs::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let (a, b) = generate_pair(&args, &mut rng);
            assert_eq!(a.len(), b.len());
            // Two substitutions may land on the same position, so at most 5
            // positions differ.
            let diff = std::iter::zip(&a, &b).filter(|(x, y)| x != y).count();
            assert!(diff <= 5);
        }
    }

    #[test]
    fn sequences_use_the_dna_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (a, b) = generate_pair(&GenerateArgs::default(), &mut rng);
        for base in a.iter().chain(&b) {
            assert!(ALPH.contains(base));
        }
    }
}
