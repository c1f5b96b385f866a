//! `settings.gradle` emission.

use std::io::{self, Write};

use osgradle_bundle::model::Component;
use osgradle_common::constants::LINE_ENDING as NL;

/// Writes one `include '<id>'` line per component, in the given order.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn declare_settings<W: Write>(w: &mut W, components: &[&Component]) -> io::Result<()> {
    for component in components {
        write!(w, "include '{}'{NL}", component.id())?;
    }
    Ok(())
}
