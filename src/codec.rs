//! Decode fixed-width lines into records, encode records back into lines.

use crate::error::FlatFileError;
use crate::record::Record;
use crate::schema::Schema;
use crate::value::Value;

/// Parses lines into records and serializes records back, against one
/// schema.
///
/// Lines are measured and sliced in characters, so a line carrying
/// multi-byte text fails the length check instead of splitting a
/// character. Callers must strip line terminators and filter out empty
/// lines before decoding; that is the line source's job (see
/// [`crate::source`]).
#[derive(Debug, Clone, Copy)]
pub struct RecordCodec<'s> {
    schema: &'s Schema,
}

impl<'s> RecordCodec<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Decode one line into a record.
    ///
    /// The line must be exactly `total_width` characters; any mismatch
    /// fails with [`FlatFileError::RecordLength`] carrying both numbers.
    /// Each non-padding slice runs through its field's filter chain;
    /// padding slices are discarded unfiltered. `line_number` is the
    /// 1-based ordinal of the line in its source.
    pub fn decode(&self, line: &str, line_number: usize) -> Result<Record<'s>, FlatFileError> {
        let found = line.chars().count();
        let expected = self.schema.total_width();
        if found != expected {
            return Err(FlatFileError::RecordLength { found, expected });
        }

        let mut chars = line.chars();
        let mut values: Vec<(String, Value)> = Vec::new();
        for field in self.schema.fields() {
            let slice: String = chars.by_ref().take(field.width()).collect();
            if field.is_padding() {
                continue;
            }
            let value =
                field.pass_through_filters(Value::Text(slice), self.schema.transforms());
            values.push((field.name().to_string(), value));
        }

        let mut record = self.schema.new_record(values);
        record.set_line_number(line_number);
        Ok(record)
    }

    /// Encode a record into a fixed-width line, without a trailing
    /// terminator.
    ///
    /// Padding fields encode from empty text; every other field encodes
    /// from its stored value rendered as text. Each formatted value is
    /// left-justified to the field width with the field's pad character.
    /// A formatted value wider than its column fails with
    /// [`FlatFileError::FieldOverflow`] rather than being truncated.
    pub fn encode(&self, record: &Record<'_>) -> Result<String, FlatFileError> {
        let mut line = String::with_capacity(self.schema.total_width());
        for field in self.schema.fields() {
            let raw = if field.is_padding() {
                Value::empty()
            } else {
                match record.get(field.name()) {
                    Some(value) => Value::Text(value.to_string()),
                    None => Value::empty(),
                }
            };
            let formatted = field
                .pass_through_formatters(raw, self.schema.transforms())
                .to_string();

            let len = formatted.chars().count();
            if len > field.width() {
                return Err(FlatFileError::FieldOverflow {
                    field: field.name().to_string(),
                    width: field.width(),
                    len,
                });
            }
            line.push_str(&formatted);
            for _ in len..field.width() {
                line.push(field.pad_char());
            }
        }
        Ok(line)
    }
}
