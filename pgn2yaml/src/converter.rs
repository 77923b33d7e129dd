mod serializer;

use self::serializer::{SerializedProgram, SerializedTokens};
use anyhow::{Context, Result};
use clap::ValueEnum;
use pgn_reader::{Parsed, Program, Token};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

pub fn write_program(path: &PathBuf, format: Format, parsed: &Parsed<Program>) -> Result<()> {
    write(path, format, &SerializedProgram(parsed))
}

pub fn write_tokens(path: &PathBuf, format: Format, lexed: &Parsed<Vec<Token>>) -> Result<()> {
    write(path, format, &SerializedTokens(lexed))
}

fn write<T: Serialize>(path: &PathBuf, format: Format, data: &T) -> Result<()> {
    let output = std::fs::File::create(path).context(format!(
        "Could not open file {} for writing",
        path.to_string_lossy()
    ))?;

    match format {
        Format::Yaml => serde_yaml::to_writer(output, data).context(format!(
            "Error writing YAML data to {}",
            path.to_string_lossy()
        )),
        Format::Json => serde_json::to_writer_pretty(output, data).context(format!(
            "Error writing JSON data to {}",
            path.to_string_lossy()
        )),
    }
}
