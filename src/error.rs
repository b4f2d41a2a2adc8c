use crate::connective::BinaryType;
use crate::rewrite::Form;

/// Error type for expression operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The connective has no rewrite into the requested single-connective form.
    Unsupported { op: BinaryType, form: Form },
    /// The capability exists as an extension point but is not implemented.
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unsupported { op, form } => {
                write!(f, "{} cannot be rewritten to {}-only form", op, form)
            }
            Error::NotImplemented(what) => write!(f, "Not implemented: {}", what),
        }
    }
}

impl std::error::Error for Error {}
