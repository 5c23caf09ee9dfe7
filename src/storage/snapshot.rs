use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::{
    io::{BufWriter, Write},
    path::Path,
};

use crate::{core::create_file, Result};

const INDENT: &[u8] = b"    ";

/// Overwrite `path` with the bootstrap payload, indented by four spaces.
pub fn save_snapshot(path: &Path, data: &Value) -> Result<()> {
    let mut writer = BufWriter::new(create_file(path)?);
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}
