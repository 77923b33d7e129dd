mod converter;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use converter::{write_program, write_tokens, Format};
use pgn_reader::{
    parse_with, tokenize_with, Diagnostic, Diagnostics, ParseFeedback, ParseOptions,
    SilentParseFeedback,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file
    file: String,

    /// Path of the output file (if not specified, same as the PGN file with the extension changed)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Write the token stream instead of the games
    #[arg(long)]
    tokens: bool,

    /// Fail if the PGN file has any error
    #[arg(long)]
    strict: bool,

    /// Also emit a result token after every '#'
    #[arg(long)]
    hash_emits_result: bool,

    /// Print the parser trace to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    } else {
        eprintln!("warning: {}", diagnostic);
    }
}

/// Parser trace and diagnostics, as they happen, on stderr.
struct VerboseFeedback();

impl ParseFeedback for VerboseFeedback {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        print_diagnostic(diagnostic);
    }
}

impl Write for VerboseFeedback {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}

fn check_diagnostics(diagnostics: &[Diagnostic], strict: bool) -> Result<()> {
    if strict && !diagnostics.is_empty() {
        return Err(Diagnostics(diagnostics.to_vec())).context("PGN file has errors");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);
    let source = std::fs::read_to_string(&pgn_path).context(format!(
        "Could not read PGN file {}",
        pgn_path.to_string_lossy()
    ))?;

    let options = ParseOptions {
        hash_emits_result: cli.hash_emits_result,
    };

    let output_path = match cli.output {
        Some(output) => PathBuf::from(output),
        None => {
            let mut path = pgn_path;
            path.set_extension(cli.format.extension());
            println!(
                "Writing {} file to {}",
                cli.format.extension().to_uppercase(),
                path.to_string_lossy()
            );
            path
        }
    };

    if cli.tokens {
        let lexed = tokenize_with(&source, &options);
        lexed.diagnostics.iter().for_each(print_diagnostic);
        check_diagnostics(&lexed.diagnostics, cli.strict)?;
        return write_tokens(&output_path, cli.format, &lexed);
    }

    let parsed = if cli.verbose {
        parse_with(&source, &options, &mut VerboseFeedback())
    } else {
        let parsed = parse_with(&source, &options, &mut SilentParseFeedback::default());
        parsed.diagnostics.iter().for_each(print_diagnostic);
        parsed
    };
    check_diagnostics(&parsed.diagnostics, cli.strict)?;

    write_program(&output_path, cli.format, &parsed)
}
