/*
 * edit_performance.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Timing sweep for segment-store editing, output materialization, and
//! map generation at increasing source sizes.
//!
//! Run with: cargo bench --bench edit_performance

use emend::{Editor, SourceMapOptions};
use std::time::Instant;

fn synth_source(lines: usize) -> String {
    let mut source = String::new();
    for i in 0..lines {
        source.push_str("let value_");
        source.push_str(&i.to_string());
        source.push_str(" = compute(");
        source.push_str(&(i * 7).to_string());
        source.push_str(");\n");
    }
    source
}

fn main() {
    println!("{}", "=".repeat(70));
    println!("edit / render / map timings per source size");
    println!("{}", "=".repeat(70));

    for &lines in &[100usize, 1_000, 10_000] {
        let source = synth_source(lines);
        let source_len = source.len();

        // One left-bound insertion at every line start, plus an overwrite
        // per line, mirroring a prefixing transform.
        let start = Instant::now();
        let mut editor = Editor::new(source.clone());
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            editor.append_left(offset, "/* gen */ ").unwrap();
            editor.overwrite(offset, offset + 3, "const").unwrap();
            offset += line.len();
        }
        let edit_time = start.elapsed();

        let start = Instant::now();
        let output = editor.to_string();
        let render_time = start.elapsed();

        let start = Instant::now();
        let map = editor.generate_map(&SourceMapOptions {
            source: Some("bench.js".to_string()),
            ..SourceMapOptions::default()
        });
        let map_time = start.elapsed();

        println!(
            "{:>6} lines | {:>9} -> {:>9} bytes | edit {:>10.2?} | render {:>10.2?} | map {:>10.2?} ({} mapping bytes)",
            lines,
            source_len,
            output.len(),
            edit_time,
            render_time,
            map_time,
            map.mappings.len(),
        );
    }
}
