use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("rejected by the ordering service")]
    Rejected { message: Option<String> },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("malformed response body: {message}")]
    Decode { message: String },
}
