mod counter;
mod loader;
mod primality;
mod report;
mod shared_types;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::debug;

use counter::{run_parallel, run_sequential};
use report::BenchReport;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Input file with one base-10 integer per line; unparseable lines are skipped
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = CliArgs::parse();

    let numbers = loader::load_numbers(&args.file)?;
    println!("File: {} ({} numbers)", args.file.display(), numbers.len());

    let numbers: Arc<[i64]> = numbers.into();
    let sequential = run_sequential(&numbers);

    let workers = num_cpus::get().max(1);
    debug!("counting with {workers} workers");
    let parallel = run_parallel(Arc::clone(&numbers), workers);

    println!("{}", BenchReport { sequential, parallel });
    Ok(())
}
