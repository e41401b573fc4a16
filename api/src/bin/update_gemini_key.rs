//! Interactive helper that writes a Gemini API key into the local `.env`.
//!
//! Prompts for a key on stdin, validates its shape and replaces or appends
//! the `GEMINI_API_KEY` entry. Run it from the directory that holds `.env`,
//! then restart the server to pick up the change.

use std::fs;
use std::io::{self, Write};

use anyhow::{bail, Context};

const ENV_FILE: &str = ".env";

fn main() -> anyhow::Result<()> {
    println!("A valid Gemini API key is required for AI itinerary generation.");
    println!("Create one at https://aistudio.google.com/app/apikey");
    println!();

    print!("Enter your new Gemini API key: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    let key = input.trim();

    if key.is_empty() {
        bail!("No key entered");
    }
    if key.len() < 20 {
        bail!("API key seems too short to be valid");
    }

    let contents = fs::read_to_string(ENV_FILE)
        .with_context(|| format!("{} file not found in the current directory", ENV_FILE))?;

    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    let entry = format!("GEMINI_API_KEY={}", key);
    match lines.iter().position(|line| line.starts_with("GEMINI_API_KEY=")) {
        Some(index) => lines[index] = entry,
        None => lines.push(entry),
    }

    fs::write(ENV_FILE, lines.join("\n") + "\n")
        .with_context(|| format!("Failed to write {}", ENV_FILE))?;

    println!("API key updated successfully.");
    println!("Restart the server to pick up the new key.");
    Ok(())
}
