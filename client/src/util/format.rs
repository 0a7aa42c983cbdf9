//! Display formatting for money, dates and ratios.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `"$1,234.56"` from integer cents.
#[must_use]
pub fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;
    format!("{sign}${}.{rem:02}", group_thousands(dollars))
}

/// Cents as an editable decimal string (`"12.50"`), used to prefill price inputs.
#[must_use]
pub fn decimal(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Calendar date part of an RFC 3339 timestamp (`"2026-03-04"`).
/// Unparseable input is returned unchanged.
#[must_use]
pub fn date(timestamp: &str) -> String {
    let candidate = timestamp.get(..10).unwrap_or(timestamp);
    if is_iso_date(candidate) { candidate.to_owned() } else { timestamp.to_owned() }
}

/// `"2026-03-04 14:05"` from an RFC 3339 timestamp.
#[must_use]
pub fn date_time(timestamp: &str) -> String {
    match (timestamp.get(..10), timestamp.get(11..16)) {
        (Some(day), Some(time)) if is_iso_date(day) && time.as_bytes().get(2) == Some(&b':') => {
            format!("{day} {time}")
        }
        _ => date(timestamp),
    }
}

/// Optional timestamp rendered as a date, or an em dash placeholder.
#[must_use]
pub fn date_or_dash(timestamp: Option<&str>) -> String {
    timestamp.map_or_else(|| "—".to_owned(), date)
}

pub(crate) fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Whole percent of `part` in `total`, 0 when `total` is 0.
#[must_use]
pub fn percent(part: i64, total: i64) -> u8 {
    if total <= 0 || part <= 0 {
        return 0;
    }
    let pct = (part.saturating_mul(100) / total).min(100);
    u8::try_from(pct).unwrap_or(100)
}
