//! Error type shared by the slug generator and the CLI runner.

use thiserror::Error;

/// Everything that can stop a slug from reaching the user.
#[derive(Debug, Error)]
pub enum SlugError {
    /// No title was supplied on the command line.
    #[error("The title argument must be passed.")]
    MissingArgument,

    /// The slug could not be written to the output stream.
    #[error("failed to write slug: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_message() {
        assert_eq!(
            SlugError::MissingArgument.to_string(),
            "The title argument must be passed."
        );
    }

    #[test]
    fn io_error_converts() {
        let err: SlugError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, SlugError::Io(_)));
        assert!(err.to_string().starts_with("failed to write slug"));
    }
}
