// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dc3::{SuffixArray, naive, substrings};

#[derive(Parser)]
#[command(version, about = "Build and query suffix arrays of files")]
struct Args {
    /// Print input sizes and timings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the suffix array of a file
    Build {
        input: PathBuf,
        /// Also write the LCP array
        #[arg(long)]
        lcp: bool,
        /// Write the suffix array as native-endian 32-bit integers
        #[arg(long, conflicts_with = "lcp")]
        raw: bool,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the offset of a pattern in a file
    Search {
        input: PathBuf,
        pattern: String,
        /// Print every occurrence instead of one
        #[arg(long)]
        all: bool,
    },
    /// Print the longest substring occurring twice in a file
    Repeat { input: PathBuf },
    /// Print the longest substring two files have in common
    Common { a: PathBuf, b: PathBuf },
    /// Check the suffix array of a file against a slow reference construction
    Verify { input: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let verbose = args.verbose;

    match args.command {
        Command::Build {
            input,
            lcp,
            raw,
            out,
        } => {
            let data = read_input(&input, verbose)?;
            let sa = timed(verbose, "construction", || {
                if lcp {
                    SuffixArray::with_lcp(&data)
                } else {
                    SuffixArray::new(&data)
                }
            })
            .with_context(|| format!("Failed to build suffix array of '{}'", input.display()))?;

            let mut writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(File::create(path).with_context(|| {
                    format!("Failed to create output file '{}'", path.display())
                })?),
                None => Box::new(io::stdout().lock()),
            };
            write_suffix_array(&mut writer, &sa, raw)
                .context("I/O error occurred while writing suffix array")?;
        }
        Command::Search {
            input,
            pattern,
            all,
        } => {
            let data = read_input(&input, verbose)?;
            let sa = timed(verbose, "construction", || SuffixArray::new(&data))
                .with_context(|| format!("Failed to build suffix array of '{}'", input.display()))?;

            let offsets: Vec<u32> = if all {
                let mut offsets = sa.occurrences(pattern.as_bytes()).to_vec();
                offsets.sort_unstable();
                offsets
            } else {
                sa.search(pattern.as_bytes()).map(|o| o as u32).into_iter().collect()
            };

            if offsets.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            for offset in offsets {
                println!("{offset}");
            }
        }
        Command::Repeat { input } => {
            let data = read_input(&input, verbose)?;
            let found = timed(verbose, "search", || {
                substrings::longest_repeated_substring(&data)
            })
            .with_context(|| format!("Failed to search '{}'", input.display()))?;

            match found {
                Some(range) => println!(
                    "{}\t{}\t{}",
                    range.start,
                    range.len(),
                    String::from_utf8_lossy(&data[range.clone()]).escape_debug(),
                ),
                None => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Common { a, b } => {
            let a_data = read_input(&a, verbose)?;
            let b_data = read_input(&b, verbose)?;
            let found = timed(verbose, "search", || {
                substrings::longest_common_factor(&a_data, &b_data)
            })
            .context("Failed to search for a common substring")?;

            match found {
                Some((in_a, in_b)) => println!(
                    "{}\t{}\t{}\t{}",
                    in_a.start,
                    in_b.start,
                    in_a.len(),
                    String::from_utf8_lossy(&a_data[in_a.clone()]).escape_debug(),
                ),
                None => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Verify { input } => {
            let data = read_input(&input, verbose)?;
            let fast = timed(verbose, "construction", || dc3::construct(&data, true))
                .with_context(|| format!("Failed to build suffix array of '{}'", input.display()))?;
            let slow = timed(verbose, "reference construction", || {
                naive::suffix_array_doubling(&data)
            });

            if fast.suffix_array != slow {
                bail!("Suffix array of '{}' differs from reference", input.display());
            }
            if fast.lcp != Some(naive::lcp_array(&data, &slow)) {
                bail!("LCP array of '{}' differs from reference", input.display());
            }
            println!("ok");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path, verbose: bool) -> anyhow::Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read file '{}'", path.display()))?;
    if verbose {
        eprintln!("read {} bytes from '{}'", data.len(), path.display());
    }
    Ok(data)
}

fn timed<T>(verbose: bool, what: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    if verbose {
        eprintln!("{what} took {:.3?}", start.elapsed());
    }
    result
}

fn write_suffix_array<W>(writer: &mut W, sa: &SuffixArray, raw: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut writer = BufWriter::new(writer);

    if raw {
        writer.write_all(sa.as_bytes())?;
    } else {
        match sa.lcp() {
            Some(lcp) => {
                for (offset, len) in sa.as_slice().iter().zip(lcp) {
                    writeln!(writer, "{offset}\t{len}")?;
                }
            }
            None => {
                for offset in sa.as_slice() {
                    writeln!(writer, "{offset}")?;
                }
            }
        }
    }

    writer.flush()
}
