use lambda_runtime::Diagnostic;
use strum::Display;

/// Failure tags reported back to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// The inbound payload was not valid JSON or was missing required fields
    #[strum(serialize = "InvalidJSON")]
    InvalidJson,
    /// The object could not be retrieved or its body could not be read
    #[strum(serialize = "DownloadFailure")]
    DownloadFailure,
}

/// Terminal failure of the request pipeline.
///
/// The first failure encountered ends the invocation; nothing is retried
/// and later stages never run.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The inbound payload could not be parsed or validated
    #[error("{0}")]
    InvalidJson(String),
    /// The object could not be downloaded or its stream drained
    #[error("{0:#}")]
    Download(#[from] anyhow::Error),
}

impl HandlerError {
    /// Returns the tag this error is reported under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::InvalidJson(_) => ErrorKind::InvalidJson,
            HandlerError::Download(_) => ErrorKind::DownloadFailure,
        }
    }
}

impl From<HandlerError> for Diagnostic {
    fn from(err: HandlerError) -> Self {
        Diagnostic {
            error_type: err.kind().to_string(),
            error_message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_diagnostic_keeps_message() {
        let err = HandlerError::InvalidJson("missing input value s3key".to_string());

        assert_eq!(err.kind(), ErrorKind::InvalidJson);

        let diagnostic = Diagnostic::from(err);
        assert_eq!(diagnostic.error_type, "InvalidJSON");
        assert_eq!(diagnostic.error_message, "missing input value s3key");
    }

    #[test]
    fn test_download_diagnostic_carries_full_cause_chain() {
        let err = HandlerError::from(
            anyhow::anyhow!("NoSuchKey: The specified key does not exist")
                .context("could not get item k1 from bucket b1"),
        );

        assert_eq!(err.kind(), ErrorKind::DownloadFailure);

        let diagnostic = Diagnostic::from(err);
        assert_eq!(diagnostic.error_type, "DownloadFailure");
        assert!(diagnostic
            .error_message
            .contains("could not get item k1 from bucket b1"));
        assert!(diagnostic.error_message.contains("NoSuchKey"));
    }
}
