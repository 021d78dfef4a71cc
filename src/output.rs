//! Streaming output helpers for inspection results.

use std::io::Write;

use anyhow::Result;

use crate::inspect::FontFaceInfo;

/// Write results as a prettified JSON array.
pub fn write_json_pretty(results: &[FontFaceInfo], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write results as newline-delimited JSON (NDJSON).
pub fn write_ndjson(results: &[FontFaceInfo], mut w: impl Write) -> Result<()> {
    for item in results {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
