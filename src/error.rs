use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  /// Zero grid dimensions, negative generation counts, bad rule strings.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
  OutOfBounds {
    row: usize,
    col: usize,
    rows: usize,
    columns: usize,
  },
  /// Malformed grid data.
  #[error("malformed grid data: {0}")]
  DataFormat(String),
  #[error("cannot read {}", .path.display())]
  ResourceUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl Error {
  pub(crate) fn invalid(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }

  pub(crate) fn format(msg: impl Into<String>) -> Self {
    Error::DataFormat(msg.into())
  }
}
