//! # SeqLabel CLI - Labeled Sequence Dataset Builder
//!
//! Converts DSSP and GenBank files into datasets of (observed, hidden) index
//! sequences for training hidden-state models.
//!
//! ## Usage
//!
//! ```bash
//! # Protein secondary structure from a directory of DSSP files
//! seqlabel dssp -o proteins.json dssp/
//!
//! # Also drop proteins sharing their first 15 residues, keep chain breaks
//! seqlabel dssp --prefix --prefix-length 15 --breaks -o proteins.json dssp/
//!
//! # Exon/intron structure, one CDS per gene, N allowed
//! seqlabel genbank --unique --unknown -o genes.json chr1.gbk chr2.gbk
//!
//! # Summarize a dataset
//! seqlabel info genes.json
//! ```
//!
//! ## Options
//!
//! - `-q, --quiet`: Only log warnings and errors
//! - `dssp --unames <BOOL>`: Skip repeated molecule names (default: true)
//! - `dssp --prefix`: Skip proteins whose leading residues were seen before
//! - `dssp --prefix-length <N>`: Residues compared by `--prefix` (default: 10)
//! - `dssp --breaks`: Keep chain-break positions
//! - `genbank --unique`: At most one CDS per gene
//! - `genbank --unknown`: Accept N and ambiguity codes
//!
//! Set `RUST_LOG=debug` to see every skipped entity.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::info;
use seqlabel_core::config::{AnnotationConfig, StructureConfig};
use seqlabel_core::constants::DEFAULT_PREFIX_LENGTH;
use seqlabel_core::*;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Files between progress log lines
const PROGRESS_INTERVAL: usize = 1000;

fn cli() -> Command {
    let inputs = Arg::new("inputs")
        .value_name("INPUT")
        .help("Input files or directories of input files")
        .num_args(1..)
        .required(true)
        .value_parser(value_parser!(PathBuf));
    let output = Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help("Dataset output file")
        .required(true)
        .value_parser(value_parser!(PathBuf));

    Command::new("seqlabel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Labeled sequence datasets from DSSP and GenBank records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .subcommand(
            Command::new("dssp")
                .about("Amino acids labeled with DSSP secondary structure")
                .arg(
                    Arg::new("unames")
                        .long("unames")
                        .value_name("BOOL")
                        .help("Skip records whose molecule name was already seen")
                        .default_value("true")
                        .value_parser(value_parser!(bool)),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .action(ArgAction::SetTrue)
                        .help("Skip records whose leading residues were already seen"),
                )
                .arg(
                    Arg::new("prefix-length")
                        .long("prefix-length")
                        .value_name("N")
                        .help("Number of leading residues compared by --prefix")
                        .default_value("10")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("breaks")
                        .long("breaks")
                        .action(ArgAction::SetTrue)
                        .help("Keep chain-break positions"),
                )
                .arg(output.clone())
                .arg(inputs.clone()),
        )
        .subcommand(
            Command::new("genbank")
                .about("Nucleotides labeled exon/intron from GenBank CDS features")
                .arg(
                    Arg::new("unique")
                        .long("unique")
                        .action(ArgAction::SetTrue)
                        .help("Keep at most one CDS per gene"),
                )
                .arg(
                    Arg::new("unknown")
                        .long("unknown")
                        .action(ArgAction::SetTrue)
                        .help("Accept N and ambiguity codes in coding spans"),
                )
                .arg(output)
                .arg(inputs),
        )
        .subcommand(
            Command::new("info")
                .about("Summarize a dataset file")
                .arg(
                    Arg::new("dataset")
                        .value_name("DATASET")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

/// Main entry point for the SeqLabel CLI application.
///
/// Parses command-line arguments, builds the requested extractor, runs it over
/// every input and saves the dataset.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let quiet = matches.get_flag("quiet");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if quiet { "warn" } else { "info" }),
    )
    .init();

    match matches.subcommand() {
        Some(("dssp", sub)) => {
            let config = StructureConfig {
                unique_names: sub.get_one::<bool>("unames").copied().unwrap_or(true),
                unique_prefix: sub.get_flag("prefix"),
                prefix_length: sub
                    .get_one::<usize>("prefix-length")
                    .copied()
                    .unwrap_or(DEFAULT_PREFIX_LENGTH),
                include_breaks: sub.get_flag("breaks"),
            };
            let mut extractor = StructureExtractor::new(config)?;
            run(&mut extractor, sub, quiet)
        }
        Some(("genbank", sub)) => {
            let config = AnnotationConfig {
                unique_genes: sub.get_flag("unique"),
                allow_unknown_nts: sub.get_flag("unknown"),
            };
            let mut extractor = AnnotationExtractor::new(config)?;
            run(&mut extractor, sub, quiet)
        }
        Some(("info", sub)) => {
            let path = sub
                .get_one::<PathBuf>("dataset")
                .ok_or("Missing dataset path")?;
            print_summary(&SequenceDataset::load(path)?);
            Ok(())
        }
        _ => Err("Unknown subcommand".into()),
    }
}

fn run(
    extractor: &mut dyn Extractor,
    matches: &ArgMatches,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = matches
        .get_one::<PathBuf>("output")
        .ok_or("Missing output path")?;
    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("inputs")
        .ok_or("Missing input paths")?
        .cloned()
        .collect();
    let inputs = expand_inputs(&inputs)?;

    let dataset = build_dataset(extractor, &inputs)?;
    dataset.save(output)?;

    if !quiet {
        eprintln!(
            "Extraction complete! Wrote {} {} entries from {} files to {}.",
            dataset.len(),
            extractor.name(),
            inputs.len(),
            output.display()
        );
    }
    Ok(())
}

/// Runs `extractor` over `inputs` in order, stopping at the first fatal error.
fn build_dataset(
    extractor: &mut dyn Extractor,
    inputs: &[PathBuf],
) -> Result<SequenceDataset, SeqLabelError> {
    let mut dataset = extractor.new_dataset();
    for (done, path) in inputs.iter().enumerate() {
        extractor.extract_file(path, &mut dataset)?;
        if (done + 1) % PROGRESS_INTERVAL == 0 {
            info!("{} files processed, {} entries", done + 1, dataset.len());
        }
    }
    Ok(dataset)
}

/// Replaces each directory by its regular files, sorted by path.
fn expand_inputs(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    files.push(entry.path());
                }
            }
            files.sort();
            expanded.extend(files);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

fn print_summary(dataset: &SequenceDataset) {
    let summary = dataset.summary();
    println!("entries: {}", summary.entries);
    println!(
        "observed alphabet: {:?} ({} symbols)",
        String::from(dataset.observed_alphabet().clone()),
        dataset.observed_alphabet().len()
    );
    println!(
        "hidden alphabet: {:?} ({} symbols)",
        String::from(dataset.hidden_alphabet().clone()),
        dataset.hidden_alphabet().len()
    );
    println!("total length: {}", summary.total_length);
    println!(
        "length range: {}..{}",
        summary.min_length, summary.max_length
    );
    println!("mean length: {:.2}", summary.mean_length());
    println!("unknown observed: {}", summary.unknown_observed);
}
