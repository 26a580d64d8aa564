//! Options for the CSV reader and writer built by the facade.

use serde::{Deserialize, Serialize};

/// Dialect and logging options for [`Decoder`](crate::Decoder) and
/// [`Encoder`](crate::Encoder).
///
/// Callers needing more control than these fields can configure a
/// `csv::Reader`/`csv::Writer` themselves and use `from_csv_reader` or
/// `from_csv_writer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Whether a doubled quote inside a quoted field is an escaped quote.
    pub double_quote: bool,
    /// Escape character used instead of doubled quotes.
    pub escape: Option<u8>,
    /// Lines starting with this byte are skipped when reading.
    pub comment: Option<u8>,
    /// Include cell values in trace logs. Values are redacted by default.
    pub log_values: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            double_quote: true,
            escape: None,
            comment: None,
            log_values: false,
        }
    }
}

impl CsvOptions {
    /// Create options with the standard comma-separated dialect.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_double_quote(mut self, double_quote: bool) -> Self {
        self.double_quote = double_quote;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = Some(escape);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: u8) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Allow cell values in trace logs.
    #[must_use]
    pub fn with_log_values(mut self, log_values: bool) -> Self {
        self.log_values = log_values;
        self
    }

    /// Reader builder for these options.
    ///
    /// The header row is handled by the decoder, and row length is checked
    /// against it there, so the reader is headerless and flexible.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(self.double_quote)
            .escape(self.escape)
            .comment(self.comment)
            .has_headers(false)
            .flexible(true);
        builder
    }

    /// Writer builder for these options.
    pub fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(self.double_quote)
            .has_headers(false);
        if let Some(escape) = self.escape {
            builder.escape(escape);
        }
        builder
    }
}
