use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailsift_lib::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_BYTES, ValidationResult, export_filename, extract_emails,
    read_csv, serialize_results, validate, validate_all_batched,
};

use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailsift-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    stdin: bool,

    /// write the report to a file (JSON/CSV depending on --format)
    #[arg(long)]
    out: Option<String>,

    /// format: human|json|csv
    #[arg(long, default_value = "human")]
    format: String,

    /// chunk size for batched validation
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// maximum accepted CSV file size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// validate a single address
    Validate { email: String },
    /// run the full pipeline over a CSV file (extract, validate, report)
    Check { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rows: Vec<ValidationResult> = Vec::new();

    if cli.stdin {
        let mut candidates = Vec::new();
        for line in io::stdin().lock().lines() {
            candidates.push(line.context("read stdin")?);
        }
        rows = validate_all_batched(&candidates, cli.batch_size);
    } else {
        match cli.cmd {
            Some(Commands::Validate { ref email }) => rows.push(validate(email)),
            Some(Commands::Check { ref file }) => {
                let raw = read_csv(file, cli.max_bytes)?;
                let candidates = extract_emails(&raw)?;
                if candidates.is_empty() {
                    bail!("no emails found in '{}'", file.display());
                }
                rows = validate_all_batched(&candidates, cli.batch_size);
            }
            None => {
                Cli::command().print_help()?;
                println!();
                return Ok(());
            }
        }
    }

    // output
    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                if r.valid {
                    println!("[OK]      {}", r.email);
                } else {
                    println!("[INVALID] {} :: {}", r.email, r.reason);
                }
            }
            if rows.len() > 1 {
                let valid = rows.iter().filter(|r| r.valid).count();
                println!("{valid} valid, {} invalid of {}", rows.len() - valid, rows.len());
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let s = serde_json::to_string_pretty(&rows)?;
                if let Some(path) = &cli.out {
                    write_all_atomically(path, s.as_bytes())?;
                } else {
                    println!("{s}");
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json requires the 'with-serde' feature");
                std::process::exit(1);
            }
        }
        "csv" => {
            let csv = serialize_results(&rows);
            let path = cli
                .out
                .clone()
                .unwrap_or_else(|| export_filename("email-validation-results"));
            write_all_atomically(&path, csv.as_bytes())?;
            eprintln!("report written to {path}");
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json|csv", other);
            std::process::exit(1);
        }
    }

    // exit codes: 0 OK, 2 invalids, 1 fatal
    let any_invalid = rows.iter().any(|r| !r.valid);
    if any_invalid {
        std::process::exit(2);
    }
    Ok(())
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let tmp = format!("{}.tmp", path);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
