//! Records: named-field value containers bound to a schema.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::error::FlatFileError;
use crate::schema::Schema;
use crate::value::Value;

/// One decoded (or newly built) record.
///
/// A record borrows its schema and never mutates it; the value map is the
/// record's own. Keys are exactly the schema's non-padding field names.
#[derive(Debug)]
pub struct Record<'s> {
    schema: &'s Schema,
    values: HashMap<String, Value>,
    line_number: Option<usize>,
}

impl<'s> Record<'s> {
    /// Build a record with every non-padding field defaulted to empty
    /// text, then overridden by `initial`. Unknown keys in `initial` are
    /// silently dropped, never an error.
    pub(crate) fn build<I, K>(schema: &'s Schema, initial: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut values: HashMap<String, Value> = schema
            .non_pad_fields()
            .map(|f| (f.name().to_string(), Value::empty()))
            .collect();
        for (key, value) in initial {
            let key = key.as_ref();
            if let Some(slot) = values.get_mut(key) {
                *slot = value;
            }
        }
        Self {
            schema,
            values,
            line_number: None,
        }
    }

    pub(crate) fn set_line_number(&mut self, line_number: usize) {
        self.line_number = Some(line_number);
    }

    /// The schema this record is bound to.
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// 1-based source line this record was decoded from, `None` if the
    /// record was constructed rather than read.
    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// Stored value for a field, `None` for names the schema does not
    /// declare (padding names included: padding never surfaces here).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Stored text for a field, if present and text.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Store a new value for a field.
    ///
    /// Fails with `UnknownField` for any name that is not a non-padding
    /// field of the bound schema.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FlatFileError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FlatFileError::UnknownField(name.to_string())),
        }
    }

    /// Human-readable multi-line dump of every schema field in column
    /// order (padding fields show an empty value). For inspection, not
    /// serialization.
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        for field in self.schema.fields() {
            let value = self.values.get(field.name());
            let text = value.map(Value::to_string).unwrap_or_default();
            let _ = writeln!(out, "{}: {}", field.name(), text);
        }
        out
    }
}
