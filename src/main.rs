use clap::Parser;
use ospf_route_summary::config::{init_logging, Settings};
use std::error::Error;
use std::path::PathBuf;

/// Generate a summarized Fortigate OSPF configuration.
#[derive(Parser, Debug)]
#[command(name = "ospf-route-summary", version, about)]
struct Cli {
    /// OSPF description file, e.g. PD-Networks.txt
    input: PathBuf,

    /// Output file [default: fortigate-<input>-config.txt]
    output: Option<PathBuf>,

    /// Also write the summarization report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    log::info!("#Start main()");

    let settings = Settings::new(cli.input, cli.output, cli.json);
    let report = ospf_route_summary::run(&settings)?;
    report.print();

    Ok(())
}
