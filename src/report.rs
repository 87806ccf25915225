//! Report writer: indented JSON (4 spaces), written atomically.

use crate::util::write_atomic;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;

pub fn to_writer_indented<W: Write, T: Serialize + ?Sized>(w: W, value: &T) -> serde_json::Result<()> {
    let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)
}

/// Render to a string; same bytes as the file writer produces.
pub fn to_string_indented<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    to_writer_indented(&mut buf, value)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_report<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    write_atomic(path, |w| {
        to_writer_indented(&mut *w, value).with_context(|| format!("serialize {}", path.display()))
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
