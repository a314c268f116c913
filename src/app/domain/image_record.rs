use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Progress image uploaded by the assigned contractor. Appended to a
/// project's images sequence; there is no removal or edit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Retrieval URL returned by the object store.
    pub url: String,
    pub description: String,
    /// Contractor identifier of the uploader.
    pub uploaded_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
}
