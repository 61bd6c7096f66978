//! JSON emission.
use std::io::Write;

use fe_core::{
    Error,
    Result,
};

use crate::model::EventRecord;

/// Pretty-print `records` as a JSON array (2-space indent), then a newline, then flush.
///
/// # Errors
///
/// [`Error::Io`] if `writer` fails (a closed stdout included), [`Error::Serialization`] only if
/// a record cannot be encoded.
pub fn write_pretty<W: Write + ?Sized>(records: &[EventRecord], writer: &mut W) -> Result<()> {
    // serde_json wraps sink failures in its own error type; unwrap those back into io::Error.
    serde_json::to_writer_pretty(&mut *writer, records)
        .map_err(|err| if err.is_io() { Error::Io(err.into()) } else { err.into() })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
