use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cloud_types::BucketedWord;
use crate::error::{Result, TagCloudError};

const REMOTE_STYLESHEET: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
const LOCAL_STYLESHEET: &str = "tagcloud.css";
const EOL: &str = "\r\n";

/// Escape `& < > " '` for use in element content and attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render the full tag cloud page. `words` are emitted in the given order.
pub fn render_document(input_name: &str, n: usize, words: &[BucketedWord]) -> String {
    let heading = format!("Top {} words in {}", n, escape_html(input_name));
    let mut html = String::new();

    // String への書き込みは失敗しない
    let _ = write!(
        html,
        "<!DOCTYPE html>{eol}\
         <html lang=\"en\">{eol}\
         <head>{eol}\
         <meta charset=\"UTF-8\">{eol}\
         <title>{heading}</title>{eol}\
         <link href=\"{remote}\" rel=\"stylesheet\" type=\"text/css\">{eol}\
         <link href=\"{local}\" rel=\"stylesheet\" type=\"text/css\">{eol}\
         </head>{eol}\
         <body>{eol}\
         <h2>{heading}</h2>{eol}\
         <hr>{eol}\
         <div class=\"cdiv\">{eol}\
         <p class=\"cbox\">{eol}",
        eol = EOL,
        heading = heading,
        remote = REMOTE_STYLESHEET,
        local = LOCAL_STYLESHEET,
    );
    for word in words {
        let _ = write!(
            html,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>{}",
            word.bucket,
            word.entry.count,
            escape_html(&word.entry.word),
            EOL
        );
    }
    let _ = write!(html, "</p>{eol}</div>{eol}</body>{eol}</html>", eol = EOL);
    html
}

/// Create (or truncate) `path` and write `contents`, flushing before return.
pub fn write_document<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source| TagCloudError::Output { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes()).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(())
}
