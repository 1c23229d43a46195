use clap::Parser;
use gotoh_bin::cli::Cli;
use gotoh_bin::input::{read_fasta, read_scoring, InputError};
use gotoh_bin::report::{render, render_json, write_report};
use log::debug;
use std::time::Instant;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("gotoh: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), InputError> {
    let a = read_fasta(&cli.seq1)?;
    let b = read_fasta(&cli.seq2)?;
    let scoring = read_scoring(&cli.params)?;
    debug!("aligning |a|={} |b|={} with {scoring:?}", a.len(), b.len());

    let start = Instant::now();
    let alignment = gotoh::align(&a, &b, &scoring);
    debug!(
        "score {} in {:?}, {} columns",
        alignment.score,
        start.elapsed(),
        alignment.len()
    );

    write_report(&render(&alignment), &cli.output)?;
    if cli.json {
        let path = cli.output.with_extension("json");
        write_report(&render_json(&alignment, &scoring), &path)?;
    }

    println!("Alignment written to {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <gotoh_bin::cli::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
