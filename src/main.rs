use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use pingplot::display;
use pingplot::parse;
use pingplot::plot::{self, RenderOptions};
use pingplot::types::SampleSet;

#[derive(Parser)]
#[command(
    name = "pingplot",
    version,
    about = "Plot ping-pong benchmark latency against packet size"
)]
struct Cli {
    /// Benchmark log to read
    #[arg(short, long)]
    input: PathBuf,

    /// Number of samples (lines) to take from the log
    #[arg(short, long, default_value_t = 21)]
    count: usize,

    /// Where to write the scatter plot
    #[arg(short, long, default_value = "latency.png")]
    output: PathBuf,

    /// Print samples as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Parse and print only, skip rendering
    #[arg(long)]
    no_plot: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.no_plot {
        plot::check_output_path(&cli.output)?;
    }

    let latencies = parse::load_samples(&cli.input, cli.count)?;
    let samples = SampleSet::from_latencies(&latencies)?;

    let output = if cli.json {
        display::format_json(&samples)
    } else {
        display::format_table(&samples)
    };
    print!("{}", output);
    if cli.json {
        println!();
    }

    if !cli.no_plot {
        plot::render_samples(&samples, &RenderOptions::new(&cli.output))?;
        eprintln!("wrote {}", cli.output.display());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
