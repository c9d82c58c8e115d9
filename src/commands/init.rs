//! Configuration initialization command.
//!
//! Writes the configuration file with every section filled in, keeping any
//! values already set, so users have a complete file to edit.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing values with defaults
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::read()? };
    config.with_defaults().save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
