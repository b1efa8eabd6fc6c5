use thiserror::Error;

/// Unified error type for git-issue-tag operations
#[derive(Error, Debug)]
pub enum IssueTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Commit message error: {0}")]
    Message(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-issue-tag
pub type Result<T> = std::result::Result<T, IssueTagError>;

impl IssueTagError {
    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        IssueTagError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        IssueTagError::Config(msg.into())
    }

    /// Create a commit message error with context
    pub fn message(msg: impl Into<String>) -> Self {
        IssueTagError::Message(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IssueTagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IssueTagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(IssueTagError::branch("test").to_string().contains("Branch"));
        assert!(IssueTagError::message("test")
            .to_string()
            .contains("Commit message"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (IssueTagError::branch("x"), "Branch error"),
            (IssueTagError::config("x"), "Configuration error"),
            (IssueTagError::message("x"), "Commit message error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
