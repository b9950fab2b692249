//! CSV helpers shared by the loader and the runners.
//!
//! Readers trim every field and expect a header row.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Deserializes records of type `T` from any reader.
pub fn read_csv_from<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
}

/// Opens `path` and deserializes its records lazily.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(read_csv_from(File::open(path)?))
}

/// Serializes `records` with a header row and flushes the writer.
pub fn write_csv<T, W>(writer: W, records: impl IntoIterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
