use std::fs;
use std::path::Path;

use crate::cloud_types::WordCount;
use crate::error::{Result, TagCloudError};
use crate::tokenizer::{is_separator_token, tokens};

/// Count the words of one line into `table`. Separator runs are skipped.
pub fn count_line(table: &mut WordCount, line: &str) {
    for token in tokens(line) {
        if is_separator_token(token) {
            continue;
        }
        *table.entry(token.to_lowercase()).or_insert(0) += 1;
    }
}

/// Count every line of `text`. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn count_text(text: &str) -> WordCount {
    let mut table = WordCount::new();
    for line in text.split(['\n', '\r']) {
        count_line(&mut table, line);
    }
    table
}

/// Read the whole file and count its words.
///
/// Bytes are decoded as UTF-8 with a leading BOM dropped; malformed sequences
/// become U+FFFD and are counted like any other word character.
pub fn count_file<P: AsRef<Path>>(path: P) -> Result<WordCount> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TagCloudError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        log::warn!("{} is not valid UTF-8, malformed bytes replaced", path.display());
    }
    let table = count_text(&text);
    log::debug!("{}: {} bytes, {} distinct words", path.display(), bytes.len(), table.len());
    Ok(table)
}
