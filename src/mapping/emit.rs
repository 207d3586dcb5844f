use std::io::{self, Write};

use super::render::FieldMapping;

/// Import preamble of the generated module. The hostname placeholder is left
/// for the user to fill in before loading the script into Foundry.
pub const HEADER: &str = "\
import { pdfProvider } from 'https://<ENTER FOUNDRY VTT HOSTNAME>/modules/actor-export/scripts/lib/providers/PDFProvider.js';
const mapper = new pdfProvider(actor);
/* This is a very basic mapper for PDF exports */
";

pub const TRAILER: &str = "export { mapper };";

/// Writes the generated mapper script: the fixed header, one registration
/// statement per field in source order, the fixed trailer.
pub fn write_script<W: Write>(out: &mut W, fields: &[FieldMapping]) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for field in fields {
        writeln!(out, "{}", field.statement())?;
    }
    writeln!(out, "{}", TRAILER)?;
    Ok(())
}

#[cfg(test)]
#[path = "test_emit.rs"]
mod tests;
