//! seed-builder: compile the authored tables and write the seeds document.

use anyhow::{bail, Result};
use clap::Parser;

use seed_builder::cli::Args;
use seed_builder::{codec, document, drift, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let config = args.compiler_config();
    let build = document::compile_authored(&config)?;

    if args.check {
        let report = drift::check_artifact(&args.output, &build.document)?;
        if !report.byte_identical {
            bail!(
                "{} is out of date ({}); rerun without --check",
                args.output.display(),
                report.summary()
            );
        }
        println!("{} is up to date ({})", args.output.display(), report.fingerprint_b);
        return Ok(());
    }

    codec::write_document(&build.document, &args.output)?;
    println!("{}", document::summary_line(&build.document));
    Ok(())
}
