//! Record data translation between providers.
//!
//! The destination API wants hostname-valued record data fully qualified
//! (trailing dot), while the source hands targets back in whatever shape the
//! zone author wrote them. Only CNAME, MX and SRV carry a hostname target;
//! everything else passes through untouched.

use crate::types::{Record, RecordType};

/// Qualify a single hostname target against the zone.
///
/// Three-way rule:
/// - already ends in `.` — absolute, leave unchanged
/// - contains no `.` — bare label, append `.<zone>.`
/// - anything else — assumed to be a full hostname, append the trailing `.`
pub fn qualify_target(target: &str, zone: &str) -> String {
    let zone = zone.trim_end_matches('.');

    if target.ends_with('.') {
        target.to_string()
    } else if !target.contains('.') {
        format!("{target}.{zone}.")
    } else {
        // The "contains a dot, therefore already a hostname" assumption is
        // inherited behavior; flag shapes that are clearly not hostnames
        // instead of silently dotting them.
        if !looks_like_hostname(target) {
            log::warn!("qualifying implausible hostname target '{target}'");
        }
        format!("{target}.")
    }
}

/// Normalize a record's data payload for publishing.
///
/// - SRV: data is `"<priority> <weight> <port> <target>"`; only the target
///   is qualified.
/// - MX: data is `"<priority> <target>"`; only the target is qualified.
/// - CNAME: the whole value is the target.
/// - All other types: returned unchanged.
///
/// Malformed MX/SRV payloads (no whitespace-separated target) are passed
/// through unchanged rather than rejected.
pub fn normalize_data(record_type: &RecordType, data: &str, zone: &str) -> String {
    match record_type {
        RecordType::Cname => qualify_target(data, zone),
        RecordType::Mx | RecordType::Srv => {
            // For both shapes the target is the last whitespace field.
            match data.rsplit_once(' ') {
                Some((head, target)) if !target.is_empty() => {
                    format!("{head} {}", qualify_target(target, zone))
                }
                _ => data.to_string(),
            }
        }
        _ => data.to_string(),
    }
}

/// Normalize a record in place against its zone.
pub fn normalize_record(record: &mut Record, zone: &str) {
    record.data = normalize_data(&record.record_type, &record.data, zone);
}

/// Loose plausibility check for a hostname-ish string. Permissive on
/// purpose: underscores (SRV owner labels) and wildcards are common in
/// real zones.
fn looks_like_hostname(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '*'))
}
