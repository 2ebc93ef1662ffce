use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Write to stdout where the event is secondary to the exit code.
pub fn emit_logged(event: serde_json::Value) -> bool {
    let mut out = io::stdout().lock();
    write_event_logged(&mut out, &event)
}

/// Like `write_event`, but a failed write is logged and reported as `false`.
pub fn write_event_logged(out: &mut impl Write, event: &serde_json::Value) -> bool {
    match write_event(out, event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(event = %event["event"], error = %e, "failed to write JSON event");
            false
        }
    }
}
