/// Client-chosen peer identifier, kept as raw bytes.
///
/// Usually 20 bytes in the wild (for example `-TR3000-xxxxxxxxxxxx`), but the
/// tracker only requires it to be non-empty.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct PeerId(pub Vec<u8>);
