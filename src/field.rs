//! Field descriptors.

use crate::transform::{Transform, TransformRegistry, pass_through};
use crate::value::Value;

/// Default column width when a field does not specify one.
pub const DEFAULT_WIDTH: usize = 10;

/// Construction options for a field.
///
/// `width` defaults to [`DEFAULT_WIDTH`]; a width of 0 also falls back to
/// the default (column offsets require every field to occupy space).
/// `pad_char` is the fill character used when encoding left-justifies the
/// formatted value.
pub struct FieldOptions {
    pub width: usize,
    pub filter: Option<Transform>,
    pub formatter: Option<Transform>,
    pub pad_char: char,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn filter(mut self, filter: Transform) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn formatter(mut self, formatter: Transform) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            filter: None,
            formatter: None,
            pad_char: ' ',
        }
    }
}

/// Description of one fixed-width column: name, width, filter and
/// formatter chains, padding flag.
///
/// Name and width are fixed at construction; the schema's offset table
/// depends on them. The transform chains stay open for appending so a
/// schema builder can customize a field after adding it.
#[derive(Debug)]
pub struct FieldDescriptor {
    name: String,
    width: usize,
    filters: Vec<Transform>,
    formatters: Vec<Transform>,
    is_padding: bool,
    pad_char: char,
}

impl FieldDescriptor {
    pub(crate) fn new(name: &str, options: FieldOptions) -> Self {
        let width = if options.width == 0 {
            DEFAULT_WIDTH
        } else {
            options.width
        };
        let mut field = Self {
            name: name.to_string(),
            width,
            filters: Vec::new(),
            formatters: Vec::new(),
            is_padding: false,
            pad_char: options.pad_char,
        };
        field.add_filter(options.filter);
        field.add_formatter(options.formatter);
        field
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_padding(&self) -> bool {
        self.is_padding
    }

    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    pub(crate) fn set_padding(&mut self, is_padding: bool) {
        self.is_padding = is_padding;
    }

    /// Append a filter to the decode-direction chain. `None` is a no-op,
    /// so a construction-time filter stays optional.
    pub fn add_filter(&mut self, filter: Option<Transform>) -> &mut Self {
        if let Some(filter) = filter {
            self.filters.push(filter);
        }
        self
    }

    /// Append a formatter to the encode-direction chain. `None` is a no-op.
    pub fn add_formatter(&mut self, formatter: Option<Transform>) -> &mut Self {
        if let Some(formatter) = formatter {
            self.formatters.push(formatter);
        }
        self
    }

    /// Run a raw slice through the filter chain, left to right.
    pub fn pass_through_filters(&self, value: Value, registry: &TransformRegistry) -> Value {
        pass_through(&self.filters, value, registry)
    }

    /// Run a stored value through the formatter chain, left to right.
    pub fn pass_through_formatters(&self, value: Value, registry: &TransformRegistry) -> Value {
        pass_through(&self.formatters, value, registry)
    }
}
