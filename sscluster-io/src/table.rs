use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use sscluster_core::RecordError;
use sscluster_core::utils::get_dynamic_reader;

use crate::error::{FileError, Result};

/// Column delimiter of a headed, delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

///
/// Make sure an input path points at an existing file before opening it.
///
pub fn ensure_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(FileError::MissingFile(path.to_path_buf()));
    }
    Ok(())
}

///
/// Open a delimited file whose first line is a header row.
///
/// Rows may have any number of fields; column checks happen per record.
pub fn open_table(path: &Path, delimiter: Delimiter) -> Result<Reader<BufReader<Box<dyn Read>>>> {
    ensure_file(path)?;
    let reader = get_dynamic_reader(path).map_err(FileError::io(path))?;

    Ok(ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(reader))
}

///
/// Visit every data row of a headed table, converting per-row failures into
/// errors that name the file and line.
///
pub fn for_each_row<F>(path: &Path, delimiter: Delimiter, mut visit: F) -> Result<()>
where
    F: FnMut(&StringRecord) -> std::result::Result<(), RecordError>,
{
    let mut reader = open_table(path, delimiter)?;
    let mut record = StringRecord::new();

    loop {
        let more = reader.read_record(&mut record).map_err(|source| FileError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if !more {
            break;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        visit(&record).map_err(|source| FileError::Record {
            path: path.to_path_buf(),
            line,
            source,
        })?;
    }

    Ok(())
}

/// Fetch one column of a row.
pub fn field(record: &StringRecord, column: usize) -> std::result::Result<&str, RecordError> {
    record.get(column).ok_or(RecordError::MissingColumn {
        column,
        found: record.len(),
    })
}

/// Every column from `from` onward, as owned strings.
pub fn trailing_fields(record: &StringRecord, from: usize) -> Vec<String> {
    record.iter().skip(from).map(str::to_string).collect()
}
