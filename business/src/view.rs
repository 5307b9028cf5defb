//! View-model derivation: the pure pipeline from fetched data and the
//! current selection to what the two tables render.
//!
//! Nothing in this module touches the network or a rendering context; the
//! whole pipeline is testable as plain functions.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::model::{Session, User};

/// Everything the tables need for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView {
    /// Deduplicated, sorted by `lastSeenAt` descending.
    pub users: Vec<User>,
    /// Sessions of the selected user, sorted by `sessionStartedAt`
    /// descending; empty when nothing (or a vanished user) is selected.
    pub sessions: Vec<Session>,
    /// Count after deduplication, shown in the header.
    pub user_count: usize,
    /// Input selection, defaulted to the first user when unset.
    pub selected_user_id: Option<String>,
}

/// Full derivation step: dedupe, sort, default the selection, project
/// sessions. Pure function of `(users, selection)`.
pub fn derive_view(users: &[User], selected_user_id: Option<&str>) -> DerivedView {
    let mut users = dedupe_by_user_id(users);
    sort_by_date_desc(&mut users, |u| u.last_seen_at.as_str());

    // Keep an explicit selection even if the user vanished (the session
    // projection just comes up empty); only default when nothing was ever
    // selected.
    let selected_user_id = match selected_user_id {
        Some(id) => Some(id.to_string()),
        None => users.first().map(|u| u.user_id.clone()),
    };

    let sessions = sessions_for_user(&users, selected_user_id.as_deref());
    let user_count = users.len();

    DerivedView {
        users,
        sessions,
        user_count,
        selected_user_id,
    }
}

/// Keep only the first user seen per `userId`, preserving first-seen order.
pub fn dedupe_by_user_id(users: &[User]) -> Vec<User> {
    let mut seen = std::collections::HashSet::new();
    users
        .iter()
        .filter(|u| seen.insert(u.user_id.clone()))
        .cloned()
        .collect()
}

/// Sort descending by a timestamp field. The sort is stable, so equal (or
/// equally unparseable) keys keep their relative order; unparseable dates
/// sort last.
pub fn sort_by_date_desc<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| parse_timestamp(key(b)).cmp(&parse_timestamp(key(a))));
}

/// Sessions of the matching user, newest first. Empty when no user matches.
pub fn sessions_for_user(users: &[User], selected_user_id: Option<&str>) -> Vec<Session> {
    let Some(selected) = selected_user_id else {
        return Vec::new();
    };
    let mut sessions = users
        .iter()
        .find(|u| u.user_id == selected)
        .map(|u| u.sessions.clone())
        .unwrap_or_default();
    sort_by_date_desc(&mut sessions, |s| s.session_started_at.as_str());
    sessions
}

/// `3661 → "1hr 1min 1s"`. Zero-valued leading units are omitted; seconds
/// are always shown.
pub fn render_time_spent(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}hr "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}min "));
    }
    out.push_str(&format!("{seconds}s"));
    out
}

/// Human-readable local rendering of a wire timestamp; falls back to the
/// raw string when it does not parse.
pub fn render_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Some backends emit naive ISO timestamps without an offset.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
