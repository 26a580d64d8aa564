//! Row-at-a-time encoder from records into CSV.

use std::borrow::Borrow;
use std::io;
use std::sync::Mutex;

use tagcsv_codec::encode_row;
use tagcsv_schema::{Record, Schema};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::logging::Cells;
use crate::options::CsvOptions;

/// Writes records of type `T` as CSV rows.
///
/// The header row is written and flushed at construction. [`write`](Self::write)
/// takes `&self`, so an encoder can be shared between threads; each row is
/// written and flushed under a lock, keeping rows whole.
pub struct Encoder<W: io::Write, T> {
    sink: Mutex<Sink<W>>,
    schema: Schema<T>,
    log_values: bool,
}

struct Sink<W: io::Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl<W: io::Write, T: Record> Encoder<W, T> {
    /// Create an encoder writing comma-separated output.
    pub fn new(writer: W) -> Result<Self> {
        Self::with_options(writer, CsvOptions::default())
    }

    /// Create an encoder with custom dialect options.
    pub fn with_options(writer: W, options: CsvOptions) -> Result<Self> {
        let writer = options.writer_builder().from_writer(writer);
        Self::build(writer, options.log_values)
    }

    /// Create an encoder over a caller-configured writer.
    pub fn from_csv_writer(writer: csv::Writer<W>) -> Result<Self> {
        Self::build(writer, false)
    }

    fn build(mut writer: csv::Writer<W>, log_values: bool) -> Result<Self> {
        let schema = Schema::<T>::derive()?;
        schema.require_encoders()?;

        writer
            .write_record(schema.column_names())
            .map_err(Error::Write)?;
        writer.flush()?;

        debug!(
            record = std::any::type_name::<T>(),
            columns = ?schema.column_names(),
            "wrote CSV header"
        );

        Ok(Self {
            sink: Mutex::new(Sink { writer, rows: 0 }),
            schema,
            log_values,
        })
    }

    /// Encode one record and write it as a row.
    ///
    /// Accepts the record by value or by reference.
    pub fn write(&self, record: impl Borrow<T>) -> Result<()> {
        let cells = encode_row(&self.schema, record.borrow())?;

        let mut sink = self.sink.lock().map_err(|_| Error::Poisoned)?;
        sink.rows += 1;
        trace!(
            row = sink.rows,
            cells = cells.len(),
            values = %Cells::new(&cells, self.log_values),
            "writing row"
        );
        sink.writer.write_record(&cells).map_err(Error::Write)?;
        sink.writer.flush()?;
        Ok(())
    }

    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> Result<u64> {
        let sink = self.sink.lock().map_err(|_| Error::Poisoned)?;
        Ok(sink.rows)
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let sink = self.sink.into_inner().map_err(|_| Error::Poisoned)?;
        sink.writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))
    }
}
