//! Field types with custom text codecs shared by the integration tests.

#![allow(dead_code)]

use tagcsv::{CodecError, CodecResult, TextDecode, TextEncode, text_value};

/// Calendar date written as `YYYY-MM-DD`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

fn split_date(raw: &[u8], separator: char) -> CodecResult<[u32; 3]> {
    let text = std::str::from_utf8(raw).map_err(CodecError::from_source)?;
    let parts: Vec<&str> = text.split(separator).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(CodecError::new(format!("invalid date '{text}'")));
    };
    Ok([
        a.parse::<u32>().map_err(CodecError::from_source)?,
        b.parse::<u32>().map_err(CodecError::from_source)?,
        c.parse::<u32>().map_err(CodecError::from_source)?,
    ])
}

impl TextDecode for Date {
    fn decode_text(&mut self, raw: &[u8]) -> CodecResult<()> {
        let [year, month, day] = split_date(raw, '-')?;
        *self = Date::new(year as i32, month, day);
        Ok(())
    }
}

impl TextEncode for Date {
    fn encode_text(&self) -> CodecResult<Vec<u8>> {
        Ok(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day).into_bytes())
    }
}

text_value!(Date: decode, encode);

/// Date written as `MM/DD/YYYY`; decode only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UsDate(pub Date);

impl TextDecode for UsDate {
    fn decode_text(&mut self, raw: &[u8]) -> CodecResult<()> {
        let [month, day, year] = split_date(raw, '/')?;
        self.0 = Date::new(year as i32, month, day);
        Ok(())
    }
}

text_value!(UsDate: decode);

/// Encode-only marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteOnly;

impl TextEncode for WriteOnly {
    fn encode_text(&self) -> CodecResult<Vec<u8>> {
        Ok(b"w".to_vec())
    }
}

text_value!(WriteOnly: encode);

/// Decode-only marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnly;

impl TextDecode for ReadOnly {
    fn decode_text(&mut self, _raw: &[u8]) -> CodecResult<()> {
        Ok(())
    }
}

text_value!(ReadOnly: decode);
