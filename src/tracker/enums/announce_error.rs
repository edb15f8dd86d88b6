use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("remote address seems to be broken")]
    MalformedSourceAddress,
    #[error("port is missing from request")]
    MissingPort,
    #[error("peer_id is missing from request")]
    MissingPeerId,
    #[error("info_hash is missing from request")]
    MissingInfoHash,
    #[error("unable to serialize response: {0}")]
    SerializationFailure(String),
    #[error("unable to write response: {0}")]
    WriteFailure(String),
}
