//! CSV export of ranked frequency lists.
//!
//! Files start with a UTF-8 byte order mark so spreadsheet applications
//! detect the encoding of the Hangul content.
//!
//! ```csv
//! 단어,빈도수
//! 하늘,12
//! 가을,9
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;

/// Count column header shared by every table.
pub const COUNT_HEADER: &str = "빈도수";

/// Token column header in morphological mode.
pub const WORD_HEADER: &str = "단어";

/// Token column header in raw-text mode.
pub const RAW_UNIT_HEADER: &str = "원문 단위";

/// Token column header of an n-gram table.
pub fn ngram_header(ngram_size: usize) -> String {
    format!("{ngram_size}-gram 표현")
}

/// Writes ranked `(token, count)` lists as two-column CSV.
#[derive(Clone, Debug)]
pub struct CsvExporter {
    delimiter: u8,
    write_bom: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// Create a comma-delimited exporter that writes a BOM.
    pub fn new() -> Self {
        CsvExporter {
            delimiter: b',',
            write_bom: true,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable the leading byte order mark.
    pub fn with_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    /// Write the rows to any writer.
    pub fn write_to<W: Write>(
        &self,
        mut writer: W,
        token_header: &str,
        rows: &[(String, usize)],
    ) -> Result<()> {
        if self.write_bom {
            writer.write_all("\u{feff}".as_bytes())?;
        }

        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);
        csv_writer.write_record([token_header, COUNT_HEADER])?;
        for (token, count) in rows {
            csv_writer.write_record([token.as_str(), count.to_string().as_str()])?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    /// Write the rows to a file, replacing it if present.
    pub fn write_file(&self, path: &Path, token_header: &str, rows: &[(String, usize)]) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file), token_header, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(String, usize)> {
        vec![("하늘".to_string(), 2), ("가을, 겨울".to_string(), 1)]
    }

    #[test]
    fn test_write_with_bom_and_quoting() {
        let mut buffer = Vec::new();
        CsvExporter::new()
            .write_to(&mut buffer, WORD_HEADER, &rows())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "\u{feff}단어,빈도수\n하늘,2\n\"가을, 겨울\",1\n");
    }

    #[test]
    fn test_empty_rows_write_header_only() {
        let mut buffer = Vec::new();
        CsvExporter::new()
            .with_bom(false)
            .write_to(&mut buffer, &ngram_header(3), &[])
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "3-gram 표현,빈도수\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let mut buffer = Vec::new();
        CsvExporter::new()
            .with_bom(false)
            .with_delimiter(b'\t')
            .write_to(&mut buffer, RAW_UNIT_HEADER, &rows())
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "원문 단위\t빈도수\n하늘\t2\n가을, 겨울\t1\n"
        );
    }
}
