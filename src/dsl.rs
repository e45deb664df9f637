//! Layout-file parser for schema definitions.
//!
//! Layout format (one directive per line):
//! ```text
//! # person layout
//! FIELD first_name 10 FILTER trim
//! FIELD last_name  10 FILTER trim
//! PAD 2
//! FIELD birthday 8
//! ```
//!
//! - `FIELD <name> [<width>] [FILTER <name>...] [FORMAT <name>...]`
//!   appends a field; width defaults to 10 when omitted
//! - `PAD <width> [<name>]` appends a padding field; an unnamed PAD gets
//!   an auto-generated name
//! - Lines starting with `#` are comments
//!
//! Directive keywords are case-insensitive; field and transform names are
//! case-sensitive. Filter/formatter names resolve against the schema's
//! transform registry at decode/encode time, so a name that is never
//! registered simply passes values through; the parser does not reject
//! it. The parser pre-registers three text transforms usable from any
//! layout: `trim`, `upcase`, `downcase`.

use crate::field::{DEFAULT_WIDTH, FieldOptions};
use crate::schema::{PadName, Schema};
use crate::transform::Transform;
use crate::value::Value;

/// Parse layout text into a ready-to-use schema.
pub fn parse_layout(text: &str) -> Result<Schema, String> {
    let mut schema = Schema::new();
    register_builtins(&mut schema);

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        parse_directive(&mut schema, line).map_err(|e| format!("Line {}: {}", line_num + 1, e))?;
    }

    Ok(schema)
}

/// Register the built-in named transforms every layout can reference.
fn register_builtins(schema: &mut Schema) {
    schema.register_transform("trim", |v| map_text(v, |s| s.trim().to_string()));
    schema.register_transform("upcase", |v| map_text(v, |s| s.to_uppercase()));
    schema.register_transform("downcase", |v| map_text(v, |s| s.to_lowercase()));
}

fn map_text(value: Value, f: impl FnOnce(&str) -> String) -> Value {
    match value {
        Value::Text(s) => Value::Text(f(&s)),
        other => other,
    }
}

/// Parse a single directive line.
fn parse_directive(schema: &mut Schema, line: &str) -> Result<(), String> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().unwrap().to_uppercase();
    let rest: Vec<&str> = tokens.collect();

    match keyword.as_str() {
        "FIELD" => parse_field(schema, &rest),
        "PAD" => parse_pad(schema, &rest),
        other => Err(format!("Unknown directive: {other}")),
    }
}

/// Parse a FIELD directive.
fn parse_field(schema: &mut Schema, tokens: &[&str]) -> Result<(), String> {
    let Some(&name) = tokens.first() else {
        return Err("FIELD requires a name".to_string());
    };
    if schema.has_field(name) {
        return Err(format!("Duplicate field name: {name}"));
    }

    let mut rest = &tokens[1..];
    let width = match rest.first() {
        Some(token) if !is_keyword(token) => {
            let width: usize = token
                .parse()
                .map_err(|_| format!("Invalid width: {token}"))?;
            rest = &rest[1..];
            width
        }
        _ => DEFAULT_WIDTH,
    };

    let field = schema.add_field(name, FieldOptions::new().width(width));

    // FILTER and FORMAT sections each take a list of transform names.
    let mut in_filter_section = None;
    for token in rest {
        if token.eq_ignore_ascii_case("FILTER") {
            in_filter_section = Some(true);
            continue;
        }
        if token.eq_ignore_ascii_case("FORMAT") {
            in_filter_section = Some(false);
            continue;
        }
        match in_filter_section {
            Some(true) => {
                field.add_filter(Some(Transform::named(token)));
            }
            Some(false) => {
                field.add_formatter(Some(Transform::named(token)));
            }
            None => return Err(format!("Unexpected token: {token}")),
        }
    }

    Ok(())
}

/// Parse a PAD directive: `PAD <width> [<name>]`.
fn parse_pad(schema: &mut Schema, tokens: &[&str]) -> Result<(), String> {
    let Some(&width_token) = tokens.first() else {
        return Err("PAD requires a width".to_string());
    };
    let width: usize = width_token
        .parse()
        .map_err(|_| format!("Invalid width: {width_token}"))?;

    if tokens.len() > 2 {
        return Err(format!("Unexpected token: {}", tokens[2]));
    }
    let name = match tokens.get(1) {
        Some(&name) => {
            if schema.has_field(name) {
                return Err(format!("Duplicate field name: {name}"));
            }
            PadName::Name(name)
        }
        None => PadName::Auto,
    };

    schema.pad(name, FieldOptions::new().width(width));
    Ok(())
}

fn is_keyword(token: &str) -> bool {
    token.eq_ignore_ascii_case("FILTER") || token.eq_ignore_ascii_case("FORMAT")
}
