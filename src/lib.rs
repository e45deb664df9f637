//! # flatfile-rs
//!
//! A fixed-width ("flat file") record schema and codec library.
//!
//! A flat file is a text file where every line is one record and every
//! column lives at a known offset. A schema describes the layout as an
//! ordered sequence of named fields, each with a width; decoding slices a
//! line by those offsets and runs each slice through the field's filter
//! chain, encoding runs stored values through the formatter chain and
//! re-pads each column to its fixed width.
//!
//! ## Example
//!
//! ```
//! use flatfile_rs::{FieldOptions, RecordCodec, Schema, Transform, Value};
//!
//! // Layout: first_name(10) last_name(10) birthday(8)
//! let mut schema = Schema::new();
//! schema.register_transform("trim", |v| match v {
//!     Value::Text(s) => Value::Text(s.trim().to_string()),
//!     other => other,
//! });
//! schema.add_field("first_name", FieldOptions::new().filter(Transform::named("trim")));
//! schema.add_field("last_name", FieldOptions::new().filter(Transform::named("trim")));
//! schema.add_field("birthday", FieldOptions::new().width(8));
//!
//! let codec = RecordCodec::new(&schema);
//! let record = codec.decode("Walt      Whitman   18190531", 1).unwrap();
//!
//! assert_eq!(record.get_text("first_name"), Some("Walt"));
//! assert_eq!(record.get_text("last_name"), Some("Whitman"));
//! assert_eq!(record.get_text("birthday"), Some("18190531"));
//! ```

pub mod codec;
pub mod dsl;
pub mod error;
pub mod field;
pub mod record;
pub mod schema;
pub mod source;
pub mod transform;
pub mod value;

pub use codec::RecordCodec;
pub use dsl::parse_layout;
pub use error::FlatFileError;
pub use field::{DEFAULT_WIDTH, FieldDescriptor, FieldOptions};
pub use record::Record;
pub use schema::{PadName, Schema};
pub use source::{each_record, read_records};
pub use transform::{Transform, TransformRegistry, ValueTransform};
pub use value::Value;
