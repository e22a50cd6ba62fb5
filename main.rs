use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

mod bucket;
mod cloud_types;
mod counter;
mod error;
mod render;
mod selector;
mod tokenizer;

use error::{Result, TagCloudError};

const TOP_WORDS: usize = 100; // number of words shown in the cloud
const DEFAULT_LOG_FILTER: &str = "warn"; // overridden by RUST_LOG

/// Print `question` and read one answer line, without its line terminator.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    what: &'static str,
) -> Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(TagCloudError::MissingAnswer(what));
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
}

/// Build the tag cloud page for `input`, without touching any output file.
fn generate(input: &str, n: usize) -> Result<String> {
    let start = Instant::now();

    let table = counter::count_file(Path::new(input))?;
    log::info!("Counted {} distinct words in {} ({:.2?})", table.len(), input, start.elapsed());

    let selection = selector::select_top(&table, n);
    log::info!(
        "Selected {} of {} words, counts {}..={}",
        selection.len(),
        n,
        selection.range.min,
        selection.range.max
    );

    if selection.is_empty() {
        log::warn!("No words selected from {}, the cloud will be empty", input);
    }

    let words = bucket::bucketize(&selection);
    let html = render::render_document(input, n, &words);
    log::debug!("Rendered {} bytes ({:.2?})", html.len(), start.elapsed());
    Ok(html)
}

/// Count, select, render, then write the page to `output`.
fn run_pipeline(input: &str, output: &str, n: usize) -> Result<()> {
    let html = generate(input, n)?;
    render::write_document(output, &html)?;
    log::info!("Wrote {}", output);
    Ok(())
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    let input = prompt(&mut stdin, &mut stdout, "Input file location: ", "input file location")?;
    let output = prompt(&mut stdin, &mut stdout, "Output file location: ", "output file location")?;

    run_pipeline(&input, &output, TOP_WORDS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
