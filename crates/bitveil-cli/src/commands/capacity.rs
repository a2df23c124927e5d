use std::path::PathBuf;

use bitveil_core::api;
use clap::Args;

use crate::CliResult;

/// Prints how many message bytes fit into a carrier image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image
    #[arg(value_name = "input")]
    pub input: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let bytes = api::capacity::capacity(&self.input)?;
        println!("{bytes}");

        Ok(())
    }
}
