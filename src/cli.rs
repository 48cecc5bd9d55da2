use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Snapshot history with undo and restore")]
#[command(version)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Walk through the backup, undo, and restore scenario
    Demo(DemoArgs),

    /// Apply a sequence of operations to a string subject
    Run(RunArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON instead of narration
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Characters of state shown in snapshot labels
    #[arg(long)]
    pub preview_len: Option<usize>,

    /// strftime format for snapshot timestamps
    #[arg(long)]
    pub time_format: Option<String>,
}

#[derive(Parser)]
pub struct DemoArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Initial state of the subject
    #[arg(long, default_value = "")]
    pub initial: String,

    /// Read operations from a file, one per line ('#' starts a comment)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Operations: set:<value>, backup, undo, restore:<index>, oldest, history
    pub ops: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}
