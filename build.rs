//! Build script to embed the default word lists
//!
//! Reads `data/answers.txt` (solution words) and `data/allowed.txt` (guess
//! dictionary) and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let out_dir = Path::new(&out_dir);

    embed_word_list(
        "data/answers.txt",
        &out_dir.join("answers.rs"),
        "ANSWERS",
        "Default solution words",
    )?;
    embed_word_list(
        "data/allowed.txt",
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "Default guess dictionary",
    )?;

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
    Ok(())
}

fn embed_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    // Same normalization as the runtime loader: trim, lowercase, drop blanks
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({} words)", words.len())?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    {word:?},")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())?;

    Ok(())
}
