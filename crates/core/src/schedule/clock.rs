use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid HH:MM time")]
pub struct ClockError(pub String);

/// Format minutes from midnight as `HH:MM`.
///
/// Values past midnight are not wrapped: 1500 formats as `25:00`.
pub fn format_clock(minutes: i32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours:02}:{mins:02}")
}

/// Parse an `HH:MM` (or `H:MM`) wall-clock time into minutes from midnight.
pub fn parse_clock(text: &str) -> Result<i32, ClockError> {
    let invalid = || ClockError(text.to_string());

    let (hours, minutes) = text.trim().split_once(':').ok_or_else(invalid)?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 || !digits(hours) || !digits(minutes) {
        return Err(invalid());
    }

    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(i32::from(hours) * 60 + i32::from(minutes))
}
