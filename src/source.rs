//! Line-source collaborator: full-file passes over a string or reader.
//!
//! The codec itself never touches I/O; these helpers own the sequential
//! pass. They strip nothing but the line terminator, skip empty lines,
//! and hand each remaining line to the codec with its 1-based physical
//! ordinal (empty lines still count toward the ordinal).

use std::io::BufRead;

use crate::codec::RecordCodec;
use crate::error::FlatFileError;
use crate::record::Record;
use crate::schema::Schema;

/// Decode every non-empty line of `input`, invoking `consumer` per
/// record. A decode error aborts the pass; skip-and-continue policies
/// belong to callers that iterate lines themselves.
pub fn each_record<'s, F>(
    input: &str,
    schema: &'s Schema,
    mut consumer: F,
) -> Result<(), FlatFileError>
where
    F: FnMut(Record<'s>),
{
    let codec = RecordCodec::new(schema);
    for (idx, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        consumer(codec.decode(line, idx + 1)?);
    }
    Ok(())
}

/// Decode every non-empty line read from `reader`, collecting the
/// records.
pub fn read_records<'s, R: BufRead>(
    reader: R,
    schema: &'s Schema,
) -> Result<Vec<Record<'s>>, FlatFileError> {
    let codec = RecordCodec::new(schema);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(codec.decode(&line, idx + 1)?);
    }
    Ok(records)
}
