use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::mapping::{MappingError, emit, extract, loader, normalize, render};
use crate::tools::cli::state::CliContext;

#[derive(Debug, Clone, Args)]
pub struct ConvertCommand {
    /// Path to the mapping file to convert
    pub mapping_file: Option<PathBuf>,
}

impl ConvertCommand {
    // Kept optional at the clap level so the missing-argument diagnostic is
    // the tool's own usage error rather than clap's.
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let logger = ctx.logger();

        let path = self
            .mapping_file
            .as_deref()
            .ok_or(MappingError::MissingPath)?;
        let raw = loader::load(path)?;

        let normalized = normalize::normalize(&raw);

        let mut fields = Vec::new();
        for entry in extract::entries(&normalized) {
            match render::parse_entry(entry) {
                Some(field) => fields.push(field),
                None => {
                    logger.warn(format!(
                        "Skipping entry with no usable key/value split: {}",
                        entry.trim()
                    ));
                }
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        emit::write_script(&mut out, &fields)?;
        out.flush()?;

        Ok(())
    }
}
