use crate::{
    cli::DepthArgs,
    commands::shared::{self, Args},
    frequency,
};
use anyhow::Result;
use std::path::Path;

impl Args for DepthArgs {
    fn input_path(&self) -> &Path {
        &self.input_path
    }
    fn output_path(&self) -> &str {
        &self.output_path
    }
    fn mode_name(&self) -> &str {
        "depth"
    }
    fn with_reads(&self) -> bool {
        true
    }
}

pub fn depth(args: DepthArgs) -> Result<()> {
    shared::run(&args, frequency::allele_frequencies)
}
