use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use avlcmd::{Driver, MISSING_INPUT};
use clap::{ArgAction, Parser};
use log::{LevelFilter, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Runs AVL tree commands from a file, one per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Command file: Initialize(), Insert(n), Delete(n), Search(n), Search(lo,hi).
    input: Option<PathBuf>,

    /// Where search results are written.
    #[arg(short, long, default_value = "output_file.txt")]
    output: PathBuf,

    /// Abort on the first malformed line instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Log more; repeat for debug and trace.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let output = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    let mut output = BufWriter::new(output);
    let mut driver = Driver::new().strict(args.strict);

    let Some(input) = args.input else {
        warn!("no input file given");
        writeln!(output, "{MISSING_INPUT}")?;
        output.flush()?;
        return Ok(());
    };
    let summary = driver
        .run_file(&input, &mut output)
        .with_context(|| format!("while running {}", input.display()))?;
    info!(
        "{} command(s) executed, {} skipped, {} key(s) left",
        summary.executed,
        summary.skipped,
        driver.tree().len()
    );
    Ok(())
}
