use std::collections::HashSet;

use chrono::{DateTime, Utc};

/// Derives a record id from the submission time: the Unix time in
/// milliseconds as a decimal string. When that id is already taken the
/// next free millisecond is used.
pub fn next_id<'a, I>(at: DateTime<Utc>, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = taken.into_iter().collect();
    let mut millis = at.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        millis += 1;
    }
}
