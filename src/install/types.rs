use serde::Deserialize;

/// Payload the platform posts when the add-on is installed into a room
///
/// Untrusted input; every field is required and typed, so a missing or
/// wrongly-shaped field is rejected at the extractor boundary before any
/// side effect happens.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationPayload {
    pub oauth_id: String,
    pub oauth_secret: String,
    pub room_id: u64,
}
