use std::io;
use std::path::PathBuf;

/// Failures that abort a tag cloud run
#[derive(Debug, thiserror::Error)]
pub enum TagCloudError {
    #[error("cannot read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read answer from stdin: {0}")]
    Prompt(#[from] io::Error),

    #[error("no {0} given")]
    MissingAnswer(&'static str),
}

pub type Result<T> = std::result::Result<T, TagCloudError>;
