//! wordcloud-fa - Prepare word clouds from Persian, Arabic and Latin text
//!
//! Reads text files (or stdin), runs the cleaning, counting and reshaping
//! pipeline, and writes either the ranked layout or the frequency table as
//! JSON.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordcloud_fa_core::{CloudOptions, FrequencyTable, StopwordSet, TextCloudBuilder};

/// Build a word cloud layout from Persian, Arabic or mixed text.
#[derive(Parser, Debug)]
#[command(name = "wordcloud-fa")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text files to read; stdin when empty
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Text options ===
    /// Remove ASCII, Arabic-Indic and Persian digits
    #[arg(long = "no-numbers", action = ArgAction::SetTrue)]
    no_numbers: bool,

    /// Normalize Persian letter forms
    #[arg(short = 'n', long = "normalize", action = ArgAction::SetTrue)]
    normalize: bool,

    /// Do not reshape or reorder right-to-left words
    #[arg(long = "no-reshape", action = ArgAction::SetTrue)]
    no_reshape: bool,

    /// Keep emoji and bidi control characters
    #[arg(long = "keep-unhandled", action = ArgAction::SetTrue)]
    keep_unhandled: bool,

    /// Custom tokenizer pattern
    #[arg(short = 'r', long)]
    regexp: Option<String>,

    /// Tokenize with the \w[\w']* word pattern instead of Unicode word boundaries
    #[arg(long = "regex-tokenizer", action = ArgAction::SetTrue)]
    regex_tokenizer: bool,

    /// Disable two-word collocations
    #[arg(long = "no-collocations", action = ArgAction::SetTrue)]
    no_collocations: bool,

    /// Do not merge trailing-s plurals
    #[arg(long = "no-plurals", action = ArgAction::SetTrue)]
    no_plurals: bool,

    /// Minimum token length in characters
    #[arg(long = "min-word-length", default_value = "0")]
    min_word_length: usize,

    // === Stopword options ===
    /// Extra stopword (repeatable)
    #[arg(short = 's', long = "stopword")]
    stopwords: Vec<String>,

    /// File with one extra stopword per line (repeatable)
    #[arg(short = 'S', long = "stopwords-file")]
    stopword_files: Vec<PathBuf>,

    /// Print the active stopwords, one per line, and exit
    #[arg(long = "list-stopwords", action = ArgAction::SetTrue)]
    list_stopwords: bool,

    // === Layout options ===
    /// Canvas width
    #[arg(short = 'W', long, default_value = "400")]
    width: u32,

    /// Canvas height
    #[arg(short = 'H', long, default_value = "200")]
    height: u32,

    /// Maximum number of words
    #[arg(short = 'm', long = "max-words", default_value = "200")]
    max_words: usize,

    /// Font size ceiling
    #[arg(long = "max-font-size")]
    max_font_size: Option<f32>,

    /// Font file handed to the renderer
    #[arg(short = 'f', long = "font-path")]
    font_path: Option<PathBuf>,

    /// Background color handed to the renderer
    #[arg(long = "background-color", default_value = "black")]
    background_color: String,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Print the prepared frequency table instead of the layout
    #[arg(long = "frequencies", action = ArgAction::SetTrue)]
    frequencies: bool,
}

fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Build CloudOptions from command line arguments.
fn build_options(args: &Args) -> CloudOptions {
    let mut options = CloudOptions::new()
        .size(args.width, args.height)
        .max_words(args.max_words)
        .background_color(&args.background_color)
        .include_numbers(!args.no_numbers)
        .persian_normalize(args.normalize)
        .no_reshape(args.no_reshape)
        .remove_unhandled_utf_characters(!args.keep_unhandled)
        .regex_tokenizer(args.regex_tokenizer)
        .collocations(!args.no_collocations)
        .normalize_plurals(!args.no_plurals)
        .min_word_length(args.min_word_length);
    if let Some(ref pattern) = args.regexp {
        options = options.regexp(pattern);
    }
    if let Some(size) = args.max_font_size {
        options = options.max_font_size(size);
    }
    if let Some(ref path) = args.font_path {
        options = options.font_path(path);
    }
    options
}

/// Concatenate all inputs, separated by newlines.
fn read_input(files: &[PathBuf]) -> Result<String> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    let mut text = String::new();
    for path in files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}

fn frequencies_json(table: &FrequencyTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Sorted stopword listing, one word per line.
fn stopword_listing(stopwords: &StopwordSet) -> String {
    let mut words: Vec<&str> = stopwords.iter().collect();
    words.sort_unstable();
    words.join("\n")
}

fn open_output(outfile: &str) -> Result<Box<dyn Write>> {
    if outfile == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(outfile)
        .with_context(|| format!("failed to create output file {outfile}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let mut builder = TextCloudBuilder::new(build_options(&args))?;
    builder.add_stop_words(args.stopwords.iter().cloned());
    for path in &args.stopword_files {
        builder
            .add_stop_words_from_file(path)
            .with_context(|| format!("failed to load stopwords from {}", path.display()))?;
    }
    debug!(stopwords = builder.stopwords().len(), "stopwords ready");

    if args.list_stopwords {
        let mut writer = open_output(&args.outfile)?;
        writeln!(writer, "{}", stopword_listing(builder.stopwords()))?;
        writer.flush()?;
        return Ok(());
    }

    let text = read_input(&args.files)?;
    let output = if args.frequencies {
        let counts = builder.process_text(&text)?;
        frequencies_json(&builder.prepare_frequencies(&counts)?)?
    } else {
        let layout = builder.generate(&text)?;
        info!(words = layout.words().len(), "layout generated");
        layout.to_json()?
    };

    let mut writer = open_output(&args.outfile)?;
    writeln!(writer, "{output}")?;
    writer.flush()?;

    Ok(())
}
