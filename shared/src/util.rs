/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque TEXT record id (UUID v4).
///
/// Assigned by the store layer on insert; never derived from user
/// input, never reused.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
