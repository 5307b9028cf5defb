//! Wire-format types for the watchstamps API.
//!
//! The backend speaks camelCase JSON; field names here mirror
//! `GET {base}/watchstamps` exactly.

use serde::{Deserialize, Serialize};

/// One viewing session: an ordered run of timestamps bounded by a start and
/// an end, belonging to a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Backend-internal record id.
    pub id: String,
    pub session_id: String,
    pub user_id: String,
    #[serde(default)]
    pub time_stamps: Vec<String>,
    pub session_started_at: String,
    pub session_ended_at: String,
    /// Seconds.
    #[serde(default)]
    pub session_duration: u64,
    #[serde(default)]
    pub time_stamps_count: u64,
}

/// A tracked user with their recorded sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-internal record id; the DELETE endpoint addresses this.
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
    pub created_at: String,
    pub last_seen_at: String,
    /// Seconds across all sessions.
    #[serde(default)]
    pub total_time_spent: u64,
    #[serde(default)]
    pub sessions_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchstampsResult {
    #[serde(default)]
    pub users: Vec<User>,
    /// Server-side count; the dashboard recounts after deduplication.
    #[serde(default)]
    pub user_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchstampsResponse {
    pub is_success: bool,
    #[serde(default)]
    pub result: WatchstampsResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let payload = r#"{
            "isSuccess": true,
            "result": {
                "userCount": 1,
                "users": [{
                    "id": "rec-1",
                    "userId": "user-a",
                    "createdAt": "2024-01-01T10:00:00Z",
                    "lastSeenAt": "2024-01-02T12:30:00Z",
                    "totalTimeSpent": 3661,
                    "sessionsCount": 1,
                    "sessions": [{
                        "id": "rec-s1",
                        "sessionId": "sess-1",
                        "userId": "user-a",
                        "timeStamps": ["2024-01-02T12:00:00Z", "2024-01-02T12:30:00Z"],
                        "sessionStartedAt": "2024-01-02T12:00:00Z",
                        "sessionEndedAt": "2024-01-02T12:30:00Z",
                        "sessionDuration": 1800,
                        "timeStampsCount": 2
                    }]
                }]
            }
        }"#;

        let response: WatchstampsResponse = serde_json::from_str(payload).unwrap();
        assert!(response.is_success);
        assert_eq!(response.result.user_count, Some(1));

        let user = &response.result.users[0];
        assert_eq!(user.user_id, "user-a");
        assert_eq!(user.total_time_spent, 3661);

        let session = &user.sessions[0];
        assert_eq!(session.session_id, "sess-1");
        assert_eq!(session.time_stamps.len(), 2);
        assert_eq!(session.session_duration, 1800);
    }

    #[test]
    fn missing_optional_fields_default() {
        let payload = r#"{
            "isSuccess": true,
            "result": {
                "users": [{
                    "id": "rec-1",
                    "userId": "user-a",
                    "createdAt": "2024-01-01T10:00:00Z",
                    "lastSeenAt": "2024-01-02T12:30:00Z"
                }]
            }
        }"#;

        let response: WatchstampsResponse = serde_json::from_str(payload).unwrap();
        let user = &response.result.users[0];
        assert!(user.sessions.is_empty());
        assert_eq!(user.total_time_spent, 0);
        assert_eq!(response.result.user_count, None);
    }
}
