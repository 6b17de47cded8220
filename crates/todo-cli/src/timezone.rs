use chrono_tz::Tz;
use todo_core::clock::parse_timezone;
use todo_core::error::CoreError;

/// Detect the system timezone, falling back to UTC
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && parse_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if parse_timezone(&tz).is_ok() {
            return tz;
        }
    }

    "UTC".to_string()
}

/// Resolves the configured zone, accepting a few common spellings
/// ("utc", "europe/warsaw", "US Eastern" style spaces).
pub fn resolve_timezone(input: &str) -> Result<Tz, CoreError> {
    let trimmed = input.trim();
    if let Ok(tz) = parse_timezone(trimmed) {
        return Ok(tz);
    }

    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("gmt") {
        return Ok(Tz::UTC);
    }

    let normalized = trimmed
        .split('/')
        .map(|part| {
            part.split(|c| c == '_' || c == ' ')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("_")
        })
        .collect::<Vec<_>>()
        .join("/");
    parse_timezone(&normalized)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
