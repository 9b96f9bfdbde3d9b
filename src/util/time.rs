//! Compact relative-timestamp labels (`12s ago`, `3h ago`).

#[cfg(test)]
#[path = "time_test.rs"]
mod tests;

/// A point in time, at millisecond or second resolution.
///
/// Second-resolution values cover backends that report Firestore-style
/// `{ seconds }` timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timestamp {
    Millis(f64),
    Seconds(f64),
}

impl Timestamp {
    pub(crate) fn as_millis(self) -> f64 {
        match self {
            Self::Millis(ms) => ms,
            Self::Seconds(s) => s * 1000.0,
        }
    }
}

/// Label for a whole-second age: `Ns ago` under a minute, then minutes,
/// hours, and days.
pub(crate) fn relative_label(diff_secs: i64) -> String {
    if diff_secs < 60 {
        format!("{diff_secs}s ago")
    } else if diff_secs < 3600 {
        format!("{}m ago", diff_secs / 60)
    } else if diff_secs < 86400 {
        format!("{}h ago", diff_secs / 3600)
    } else {
        format!("{}d ago", diff_secs / 86400)
    }
}

/// Relative label for `ts` as seen from `now_ms`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn time_ago_at(now_ms: f64, ts: Timestamp) -> String {
    let diff_secs = ((now_ms - ts.as_millis()) / 1000.0).floor() as i64;
    relative_label(diff_secs)
}

/// Relative label for `ts` as seen from the current wall clock.
#[cfg(feature = "web")]
#[must_use]
pub fn time_ago(ts: Timestamp) -> String {
    time_ago_at(js_sys::Date::now(), ts)
}
