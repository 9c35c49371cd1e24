use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tvforge_core::{Dataset, TvRecord};

use crate::errors::ExportError;

/// Write a dataset as CSV with the canonical header, even for zero rows.
///
/// Encoding notes: booleans serialize as `true`/`false`, dates as
/// `YYYY-MM-DD`, multi-value fields comma-joined (quoted by the writer) with
/// the literal `None` for the empty set. [`read_csv_dataset`] reverses this
/// encoding exactly.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<u64, ExportError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(Dataset::columns())?;
    for record in dataset.iter() {
        writer.serialize(record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Read back a dataset written by [`write_csv`].
pub fn read_csv_dataset(path: &Path) -> Result<Dataset, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<TvRecord>() {
        records.push(row?);
    }
    Ok(Dataset::new(records))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
