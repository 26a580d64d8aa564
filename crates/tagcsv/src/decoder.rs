//! Streaming decoder from CSV rows into records.

use std::io;

use tagcsv_codec::{DecodeError, decode_row};
use tagcsv_schema::{ReconciledMapping, Record, Schema, reconcile};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::logging::{Cells, redact_value};
use crate::options::CsvOptions;

/// Result of a successful [`Decoder::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ReadOutcome {
    /// A row was decoded into the destination.
    Record,
    /// No rows remain. Further reads keep returning this.
    EndOfStream,
}

impl ReadOutcome {
    pub fn is_end(self) -> bool {
        self == Self::EndOfStream
    }
}

/// Reads records of type `T` from a CSV stream.
///
/// The header row is read and reconciled at construction. Each call to
/// [`read`](Self::read) then consumes exactly one data row, whether or not
/// it decodes.
pub struct Decoder<R, T> {
    reader: csv::Reader<R>,
    schema: Schema<T>,
    mapping: ReconciledMapping,
    record: csv::ByteRecord,
    rows: u64,
    exhausted: bool,
    log_values: bool,
}

impl<R: io::Read, T: Record> Decoder<R, T> {
    /// Create a decoder for comma-separated input.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_options(reader, CsvOptions::default())
    }

    /// Create a decoder with custom dialect options.
    pub fn with_options(reader: R, options: CsvOptions) -> Result<Self> {
        let reader = options.reader_builder().from_reader(reader);
        Self::build(reader, options.log_values)
    }

    /// Create a decoder over a caller-configured reader.
    ///
    /// If the reader was built with `has_headers(true)` its header record
    /// is used; otherwise the first record is taken as the header row.
    pub fn from_csv_reader(reader: csv::Reader<R>) -> Result<Self> {
        Self::build(reader, false)
    }

    fn build(mut reader: csv::Reader<R>, log_values: bool) -> Result<Self> {
        let schema = Schema::<T>::derive()?;
        schema.require_decoders()?;

        let headers = read_headers(&mut reader)?;
        let header_cells: Vec<&[u8]> = headers.iter().collect();
        let mapping = reconcile(&header_cells, schema.fields())?;

        debug!(
            record = std::any::type_name::<T>(),
            headers = mapping.len(),
            matched = ?mapping.matched_headers(),
            ignored = mapping.extra_headers().len(),
            "reconciled CSV header"
        );

        Ok(Self {
            reader,
            schema,
            mapping,
            record: csv::ByteRecord::new(),
            rows: 0,
            exhausted: false,
            log_values,
        })
    }

    /// Decode the next row into `dest`.
    ///
    /// A row error is returned for that row only; the next call continues
    /// with the following row. Fields of `dest` decoded before the failing
    /// cell keep their new values.
    pub fn read(&mut self, dest: &mut T) -> Result<ReadOutcome> {
        if self.exhausted {
            return Ok(ReadOutcome::EndOfStream);
        }

        let more = match self.reader.read_byte_record(&mut self.record) {
            Ok(more) => more,
            Err(err) => {
                self.rows += 1;
                return Err(row_read_error(err));
            }
        };
        if !more {
            self.exhausted = true;
            debug!(rows = self.rows, "reached end of CSV input");
            return Ok(ReadOutcome::EndOfStream);
        }
        self.rows += 1;

        let cells: Vec<&[u8]> = self.record.iter().collect();
        trace!(
            row = self.rows,
            cells = cells.len(),
            values = %Cells::new(&cells, self.log_values),
            "decoding row"
        );

        if let Err(err) = decode_row(&self.schema, &self.mapping, &cells, dest) {
            let message = err.to_string();
            debug!(
                row = self.rows,
                field = err.field(),
                error = redact_value(&message, self.log_values),
                "failed to decode row"
            );
            return Err(err.into());
        }
        Ok(ReadOutcome::Record)
    }

    /// Iterate over the remaining rows, decoding each into a fresh record.
    pub fn records(&mut self) -> Records<'_, R, T>
    where
        T: Default,
    {
        Records { decoder: self }
    }

    /// Logical names of the fields matched to header columns, in column
    /// order.
    pub fn matched_headers(&self) -> Vec<&str> {
        self.mapping.matched_headers()
    }

    pub fn mapping(&self) -> &ReconciledMapping {
        &self.mapping
    }

    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    /// Number of data rows consumed so far.
    pub fn rows_read(&self) -> u64 {
        self.rows
    }

    /// Return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Iterator over decoded records, created by [`Decoder::records`].
pub struct Records<'a, R, T> {
    decoder: &'a mut Decoder<R, T>,
}

impl<R: io::Read, T: Record + Default> Iterator for Records<'_, R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut dest = T::default();
        match self.decoder.read(&mut dest) {
            Ok(ReadOutcome::Record) => Some(Ok(dest)),
            Ok(ReadOutcome::EndOfStream) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

fn read_headers<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<csv::ByteRecord> {
    let headers = if reader.has_headers() {
        reader.byte_headers().map_err(Error::Read)?.clone()
    } else {
        let mut record = csv::ByteRecord::new();
        if !reader.read_byte_record(&mut record).map_err(Error::Read)? {
            return Err(Error::MissingHeaders);
        }
        record
    };

    if headers.is_empty() {
        return Err(Error::MissingHeaders);
    }
    Ok(headers)
}

/// A strict reader reports a row of the wrong length as a CSV error; it is
/// surfaced as the same row-shape error a flexible reader produces.
fn row_read_error(err: csv::Error) -> Error {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => DecodeError::ColumnCount {
            expected: usize::try_from(*expected_len).unwrap_or(usize::MAX),
            found: usize::try_from(*len).unwrap_or(usize::MAX),
        }
        .into(),
        _ => Error::Read(err),
    }
}
