//! Parsing of free-form step durations such as `8m`, `1h30` or `02:30`.

/// Parse a duration string into whole minutes.
///
/// Three shapes are understood, checked in this order on the trimmed,
/// lower-cased input:
///
/// - **Hours**: anything containing `h`. The text before the first `h` gives
///   hours and the text after it gives minutes; only the digits of each side
///   count and a side without digits counts as zero, so `1h30`, `1 h 30 min`
///   and `h` are 90, 90 and 0.
/// - **Clock**: exactly two non-empty `:`-separated pieces, read as
///   `minutes:seconds`. Seconds are rounded to the nearest minute with halves
///   rounding up, so `02:30` is 3. A piece that is not a plain integer counts
///   as zero.
/// - **Digits**: everything else keeps only its digits, so `8m` is 8. Input
///   without any digits has no duration at all.
///
/// Results saturate at `u32::MAX`.
pub fn parse_duration_minutes(value: &str) -> Option<u32> {
    let lowered = value.trim().to_lowercase();

    if let Some((hours, minutes)) = lowered.split_once('h') {
        let hours = digits_value(hours).unwrap_or(0);
        let minutes = digits_value(minutes).unwrap_or(0);
        return Some(hours.saturating_mul(60).saturating_add(minutes));
    }

    if lowered.contains(':') {
        let pieces: Vec<&str> = lowered.split(':').filter(|p| !p.is_empty()).collect();
        if let [minutes, seconds] = pieces.as_slice() {
            let minutes: u32 = minutes.parse().unwrap_or(0);
            let seconds: u32 = seconds.parse().unwrap_or(0);
            return Some(minutes.saturating_add(round_seconds_to_minutes(seconds)));
        }
    }

    digits_value(&lowered)
}

/// Value of the ASCII digits in `text`, ignoring every other character
fn digits_value(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn round_seconds_to_minutes(seconds: u32) -> u32 {
    let whole = seconds / 60;
    if seconds % 60 >= 30 { whole + 1 } else { whole }
}
