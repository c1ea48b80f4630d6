use thiserror::Error;

/// Ways a remote reply can fail. All of them end in a canned line.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("response did not contain any text")]
    EmptyReply,
}
