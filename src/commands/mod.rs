pub mod init;
pub mod intervals;
pub mod predict;
pub mod summary;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the configuration file with defaults")]
    Init(init::InitArgs),
    #[command(about = "Show the dashboard summary for a day record")]
    Summary(summary::SummaryArgs),
    #[command(about = "Predict tonight's bedtime from explicit totals")]
    Predict(predict::PredictArgs),
    #[command(about = "List sleep and awake intervals of a day record")]
    Intervals(intervals::IntervalsArgs),
    #[command(about = "Show the live wakefulness counter until Ctrl+C")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
            Commands::Predict(args) => predict::cmd(args),
            Commands::Intervals(args) => intervals::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
