pub mod geo_point;
pub mod image_record;
pub mod milestone;
pub mod project_id;

pub use geo_point::GeoPoint;
pub use image_record::ImageRecord;
pub use milestone::Milestone;
pub use project_id::ProjectId;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Fixed IST offset (UTC+05:30). All service-stamped timestamps use it.
pub const IST_OFFSET: UtcOffset = time::macros::offset!(+5:30);

/// Current time at the fixed IST offset.
pub fn now_ist() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(IST_OFFSET)
}

/// Format a timestamp as RFC 3339 for storage and responses.
pub fn format_rfc3339(ts: OffsetDateTime) -> String {
    // Rfc3339 formatting only fails for years outside 0..=9999.
    ts.format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ist_stamp_carries_the_offset() {
        let stamped = format_rfc3339(now_ist());
        assert!(stamped.ends_with("+05:30"), "got {stamped}");
    }
}
