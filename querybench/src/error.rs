use thiserror::Error;

/// Failure of a single query attempt.
///
/// Never fatal to the matrix: the runner records the message and moves
/// on to the next repetition.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("endpoint error: {0}")]
    Endpoint(String),
}
