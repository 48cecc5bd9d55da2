use std::error::Error;

use clap::Parser;
use keepsake::cli::{Cli, Command, DemoArgs, RunArgs};
use keepsake::config::Config;
use keepsake::{demo, report, script};
use keepsake::{Caretaker, Originator, SnapshotHistory};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?.with_output_args(&args.output)?;
    let history = SnapshotHistory::new().with_style(config.label_style());

    let caretaker = if config.json {
        demo::run(&mut std::io::sink(), history)?
    } else {
        let stdout = std::io::stdout();
        demo::run(&mut stdout.lock(), history)?
    };

    report::print_history(caretaker.history(), &config);
    Ok(())
}

fn run_script(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?.with_output_args(&args.output)?;

    let mut ops = match &args.script {
        Some(path) => script::read_script(path)?,
        None => Vec::new(),
    };
    ops.extend(script::parse_ops(&args.ops)?);

    if ops.is_empty() {
        return Err("no operations given; pass ops as arguments or use --script".into());
    }

    let history = SnapshotHistory::new().with_style(config.label_style());
    let mut caretaker = Caretaker::with_history(Originator::new(args.initial.as_str()), history);
    let steps = script::run(&mut caretaker, &ops)?;

    report::print_run(&steps, &caretaker, &config);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Demo(args) => run_demo(args),
        Command::Run(args) => run_script(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
