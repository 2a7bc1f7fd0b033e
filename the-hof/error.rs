use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("cannot compute {operation} of an empty collection")]
  Empty { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
