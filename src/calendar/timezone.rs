//! Timezone resolution

use chrono_tz::Tz;

/// Parse an IANA timezone identifier such as `Europe/Berlin`.
///
/// Accepts the POSIX `:Area/City` spelling used in `TZ`.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    let name = name.trim();
    let name = name.strip_prefix(':').unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    name.parse::<Tz>().ok()
}

/// Timezone configured on the host, if it maps to a known IANA zone
pub fn host_timezone() -> Option<Tz> {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| parse_timezone(&name))
}
