//! Schema: the ordered field layout of one record type.
//!
//! A schema is built once, at program setup, by appending fields in
//! physical column order; decoding and encoding then treat it as
//! read-only. There is no field removal, so the total width and the
//! offset table only ever grow in step with the field list.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::field::{FieldDescriptor, FieldOptions};
use crate::record::Record;
use crate::transform::TransformRegistry;
use crate::value::Value;

/// Process-wide counter for auto-generated padding names. Never reused,
/// even across schemas, so generated names stay globally distinct.
static PAD_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Name selector for [`Schema::pad`].
pub enum PadName<'a> {
    /// Generate a fresh `pad_N` name from the process-wide counter.
    Auto,
    /// Use the given name.
    Name(&'a str),
}

/// Ordered collection of field descriptors for one record type, plus the
/// derived layout data: per-field start offsets and the total record
/// width.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    offsets: Vec<usize>,
    total_width: usize,
    transforms: TransformRegistry,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field at the next column position.
    ///
    /// Returns the descriptor so the caller can push further filters or
    /// formatters onto it before the schema is first used.
    pub fn add_field(&mut self, name: &str, options: FieldOptions) -> &mut FieldDescriptor {
        let field = FieldDescriptor::new(name, options);
        self.offsets.push(self.total_width);
        self.total_width += field.width();
        self.fields.push(field);
        self.fields.last_mut().unwrap()
    }

    /// Append a padding field: it occupies columns in the layout but is
    /// excluded from decoded records and always encodes from empty text.
    pub fn pad(&mut self, name: PadName<'_>, options: FieldOptions) -> &mut FieldDescriptor {
        let generated;
        let name = match name {
            PadName::Name(name) => name,
            PadName::Auto => {
                let n = PAD_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
                generated = format!("pad_{n}");
                generated.as_str()
            }
        };
        let field = self.add_field(name, options);
        field.set_padding(true);
        field
    }

    /// Register a transform for by-name dispatch in filter/formatter
    /// chains of this schema's fields.
    pub fn register_transform(&mut self, name: &str, f: impl Fn(Value) -> Value + 'static) {
        self.transforms.register(name, f);
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    /// All fields in column order, padding included.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Non-padding fields in column order.
    pub fn non_pad_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_padding())
    }

    /// True if any field, padding or not, has this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Start column of field `i`.
    pub fn offset(&self, i: usize) -> usize {
        self.offsets[i]
    }

    /// Sum of all field widths; the exact length of a valid line.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Build a record bound to this schema.
    ///
    /// Every non-padding field starts as empty text, overridden by any
    /// provided initial values. Keys that name no non-padding field are
    /// silently dropped.
    pub fn new_record<'s, I, K>(&'s self, initial: I) -> Record<'s>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        Record::build(self, initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn test_total_width_tracks_fields() {
        let mut schema = Schema::new();
        assert_eq!(schema.total_width(), 0);
        schema.add_field("a", FieldOptions::new().width(8));
        assert_eq!(schema.total_width(), 8);
        schema.pad(PadName::Auto, FieldOptions::new().width(2));
        assert_eq!(schema.total_width(), 10);
        schema.add_field("b", FieldOptions::new());
        assert_eq!(schema.total_width(), 20);

        let sum: usize = schema.fields().iter().map(|f| f.width()).sum();
        assert_eq!(schema.total_width(), sum);
    }

    #[test]
    fn test_offsets_are_cumulative_widths() {
        let mut schema = Schema::new();
        schema.add_field("a", FieldOptions::new().width(8));
        schema.add_field("b", FieldOptions::new().width(4));
        schema.add_field("c", FieldOptions::new().width(6));
        assert_eq!(schema.offset(0), 0);
        assert_eq!(schema.offset(1), 8);
        assert_eq!(schema.offset(2), 12);
    }

    #[test]
    fn test_has_field_sees_padding_fields() {
        let mut schema = Schema::new();
        schema.add_field("name", FieldOptions::new());
        schema.pad(PadName::Name("gap"), FieldOptions::new().width(2));
        assert!(schema.has_field("name"));
        assert!(schema.has_field("gap"));
        assert!(!schema.has_field("missing"));
    }

    #[test]
    fn test_non_pad_fields_excludes_padding() {
        let mut schema = Schema::new();
        schema.add_field("a", FieldOptions::new());
        schema.pad(PadName::Auto, FieldOptions::new().width(2));
        schema.add_field("b", FieldOptions::new());
        let names: Vec<&str> = schema.non_pad_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_auto_pad_names_are_distinct() {
        let mut s1 = Schema::new();
        let mut s2 = Schema::new();
        let n1 = s1.pad(PadName::Auto, FieldOptions::new().width(2)).name().to_string();
        let n2 = s1.pad(PadName::Auto, FieldOptions::new().width(2)).name().to_string();
        let n3 = s2.pad(PadName::Auto, FieldOptions::new().width(2)).name().to_string();
        assert_ne!(n1, n2);
        assert_ne!(n1, n3);
        assert_ne!(n2, n3);
        assert!(n1.starts_with("pad_"));
    }

    #[test]
    fn test_add_field_returns_configurable_descriptor() {
        let mut schema = Schema::new();
        schema
            .add_field("name", FieldOptions::new())
            .add_filter(Some(Transform::named("trim")));
        // Chain was extended through the returned descriptor.
        schema.register_transform("trim", |v| match v {
            Value::Text(s) => Value::Text(s.trim().to_string()),
            other => other,
        });
        let field = schema.field("name").unwrap();
        let out = field.pass_through_filters(Value::from("  x "), schema.transforms());
        assert_eq!(out, Value::from("x"));
    }
}
