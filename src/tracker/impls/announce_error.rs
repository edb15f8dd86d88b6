use crate::tracker::enums::announce_error::AnnounceError;

impl AnnounceError {
    /// True for errors caused by the shape of the inbound request. These are
    /// raised before the registry is touched.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            AnnounceError::MalformedSourceAddress
                | AnnounceError::MissingPort
                | AnnounceError::MissingPeerId
                | AnnounceError::MissingInfoHash
        )
    }
}
