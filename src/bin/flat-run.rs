//! CLI tool to decode a fixed-width data file against a layout file.

use clap::Parser;
use flatfile_rs::{RecordCodec, each_record, parse_layout};
use std::fs;
use std::io::{self, Write};
use std::process;

/// Decode a fixed-width data file against a layout definition.
///
/// By default each record is printed as a field-per-line dump; with
/// --reencode the records are formatted back into fixed-width lines.
#[derive(Parser)]
#[command(name = "flat-run")]
struct Cli {
    /// Layout definition file (FIELD/PAD directives)
    layout: String,

    /// Input data file (fixed-width records, or /dev/stdin)
    input: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Re-encode records into fixed-width lines instead of dumping fields
    #[arg(long)]
    reencode: bool,

    /// Show paths, schema width, and record count on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let layout_text = match fs::read_to_string(&cli.layout) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading layout file '{}': {e}", cli.layout);
            process::exit(1);
        }
    };

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    let schema = match parse_layout(&layout_text) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Layout error in '{}': {e}", cli.layout);
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Layout: {}", cli.layout);
        eprintln!("Input:  {}", cli.input);
        eprintln!("Output: {}", cli.output.as_deref().unwrap_or("(stdout)"));
        eprintln!("Record width: {}", schema.total_width());
    }

    let codec = RecordCodec::new(&schema);
    let mut chunks: Vec<String> = Vec::new();
    let mut count = 0usize;

    let result = each_record(&input_text, &schema, |record| {
        count += 1;
        if cli.reencode {
            match codec.encode(&record) {
                Ok(line) => chunks.push(line),
                Err(e) => {
                    eprintln!(
                        "Encode error at line {}: {e}",
                        record.line_number().unwrap_or(0)
                    );
                    process::exit(1);
                }
            }
        } else {
            chunks.push(record.debug_string());
        }
    });

    if let Err(e) = result {
        eprintln!("Decode error: {e}");
        process::exit(1);
    }

    let output = chunks.join("\n");

    if let Some(out_path) = &cli.output {
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
        if cli.verbose {
            eprintln!("Processed {count} records, output: {out_path}");
        }
    } else {
        if let Err(e) = io::stdout().write_all(output.as_bytes()) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
        if cli.verbose {
            eprintln!("Processed {count} records");
        }
    }
}
