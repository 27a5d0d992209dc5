//! Client-side checks run by the forms before any request is sent.
//!
//! Each validator returns the parsed, normalised value on success so the form
//! can build its payload straight from the result.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9 -]{0,8}[A-Z0-9]$").expect("valid plate regex"));
static VIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("valid VIN regex"));

const MIN_PASSWORD_LEN: usize = 8;
const OLDEST_VEHICLE_YEAR: i32 = 1900;

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("field is required")]
    Required,
    /// Email address is invalid (missing @ symbol)
    #[error("email address must contain @")]
    InvalidEmail,
    /// Password is shorter than eight characters
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    /// Password confirmation doesn't match password
    #[error("passwords do not match")]
    PasswordsDoNotMatch,
    /// Not a whole number
    #[error("not a number")]
    NotANumber,
    /// Model year before 1900 or after next year
    #[error("year out of range")]
    YearOutOfRange,
    /// License plate is not 2-10 letters, digits, spaces or dashes
    #[error("invalid license plate")]
    InvalidPlate,
    /// VIN is not 17 characters or contains I, O or Q
    #[error("invalid VIN")]
    InvalidVin,
    /// Date or time input could not be parsed
    #[error("invalid date or time")]
    InvalidDateTime,
    /// Appointment is not in the future
    #[error("must be in the future")]
    NotInFuture,
    /// Hours outside (0, 24]
    #[error("hours must be in (0, 24]")]
    HoursOutOfRange,
    /// Amount is negative or has more than two decimals
    #[error("invalid amount")]
    InvalidAmount,
    /// Duration must be positive
    #[error("duration must be positive")]
    DurationOutOfRange,
}

impl ValidationError {
    /// Translation key for the inline message.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidEmail => "validation.invalid_email",
            Self::PasswordTooShort => "validation.password_too_short",
            Self::PasswordsDoNotMatch => "validation.passwords_do_not_match",
            Self::NotANumber => "validation.not_a_number",
            Self::YearOutOfRange => "validation.year_out_of_range",
            Self::InvalidPlate => "validation.invalid_plate",
            Self::InvalidVin => "validation.invalid_vin",
            Self::InvalidDateTime => "validation.invalid_date_time",
            Self::NotInFuture => "validation.not_in_future",
            Self::HoursOutOfRange => "validation.hours_out_of_range",
            Self::InvalidAmount => "validation.invalid_amount",
            Self::DurationOutOfRange => "validation.duration_out_of_range",
        }
    }
}

/// Non-empty after trimming; returns the trimmed text.
pub fn validate_required(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(trimmed.to_string())
}

/// Validates an email address: non-empty and contains `@`.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let trimmed = validate_required(email)?;
    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(trimmed)
}

/// Validates a new password: at least eight characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Model year between 1900 and `current_year + 1` inclusive.
pub fn validate_year(value: &str, current_year: i32) -> Result<i32, ValidationError> {
    let trimmed = validate_required(value)?;
    let year: i32 = trimmed.parse().map_err(|_| ValidationError::NotANumber)?;
    if !(OLDEST_VEHICLE_YEAR..=current_year + 1).contains(&year) {
        return Err(ValidationError::YearOutOfRange);
    }
    Ok(year)
}

/// Same as [`validate_year`] against today's calendar year.
pub fn validate_year_now(value: &str) -> Result<i32, ValidationError> {
    validate_year(value, Utc::now().year())
}

/// License plate, returned upper-cased.
pub fn validate_plate(value: &str) -> Result<String, ValidationError> {
    let plate = validate_required(value)?.to_ascii_uppercase();
    if !PLATE_PATTERN.is_match(&plate) {
        return Err(ValidationError::InvalidPlate);
    }
    Ok(plate)
}

/// Optional VIN: blank means none, otherwise 17 characters without I/O/Q.
pub fn validate_vin(value: &str) -> Result<Option<String>, ValidationError> {
    let vin = value.trim().to_ascii_uppercase();
    if vin.is_empty() {
        return Ok(None);
    }
    if !VIN_PATTERN.is_match(&vin) {
        return Err(ValidationError::InvalidVin);
    }
    Ok(Some(vin))
}

/// Combine `YYYY-MM-DD` and `HH:MM` inputs in `tz` and require the result to
/// be strictly after `now`.
pub fn validate_schedule<Tz: TimeZone>(
    date: &str,
    time: &str,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let date = validate_required(date)?;
    let time = validate_required(time)?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDateTime)?;
    let time =
        NaiveTime::parse_from_str(&time, "%H:%M").map_err(|_| ValidationError::InvalidDateTime)?;

    // Nonexistent local times (DST gaps) are rejected; ambiguous ones take the earlier instant.
    let scheduled = tz
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or(ValidationError::InvalidDateTime)?
        .with_timezone(&Utc);
    if scheduled <= now {
        return Err(ValidationError::NotInFuture);
    }
    Ok(scheduled)
}

/// Plain `YYYY-MM-DD` date.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = validate_required(value)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDateTime)
}

/// Hours worked, in (0, 24].
pub fn validate_hours(value: &str) -> Result<f32, ValidationError> {
    let value = validate_required(value)?;
    let hours: f32 = value.parse().map_err(|_| ValidationError::NotANumber)?;
    if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
        return Err(ValidationError::HoursOutOfRange);
    }
    Ok(hours)
}

/// Decimal amount such as `12.5` or `12.50`, returned in cents.
pub fn validate_amount(value: &str) -> Result<i64, ValidationError> {
    let value = validate_required(value)?;
    let (whole, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidAmount);
    }
    let whole: i64 = whole.parse().map_err(|_| ValidationError::InvalidAmount)?;
    let fraction: i64 = format!("{fraction:0<2}")
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;
    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction))
        .ok_or(ValidationError::InvalidAmount)
}

/// Positive whole number of minutes.
pub fn validate_duration(value: &str) -> Result<u32, ValidationError> {
    let value = validate_required(value)?;
    let minutes: u32 = value.parse().map_err(|_| ValidationError::NotANumber)?;
    if minutes == 0 {
        return Err(ValidationError::DurationOutOfRange);
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use test_case::test_case;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" ana@example.com "), Ok("ana@example.com".to_string()));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("ana.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_confirm_password("longenough", "longenougH"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert!(validate_confirm_password("longenough", "longenough").is_ok());
    }

    #[test_case("2020", Ok(2020))]
    #[test_case("1900", Ok(1900))]
    #[test_case("2026", Ok(2026))]
    #[test_case("2027", Err(ValidationError::YearOutOfRange))]
    #[test_case("1899", Err(ValidationError::YearOutOfRange))]
    #[test_case("twenty", Err(ValidationError::NotANumber))]
    #[test_case("", Err(ValidationError::Required))]
    fn test_validate_year(input: &str, expected: Result<i32, ValidationError>) {
        assert_eq!(validate_year(input, 2025), expected);
    }

    #[test_case("abc-123", Ok("ABC-123".to_string()))]
    #[test_case("XY 99", Ok("XY 99".to_string()))]
    #[test_case("A", Err(ValidationError::InvalidPlate))]
    #[test_case("-AB1", Err(ValidationError::InvalidPlate))]
    #[test_case("ABCDEFGHIJK", Err(ValidationError::InvalidPlate))]
    #[test_case("AB#12", Err(ValidationError::InvalidPlate))]
    fn test_validate_plate(input: &str, expected: Result<String, ValidationError>) {
        assert_eq!(validate_plate(input), expected);
    }

    #[test]
    fn test_validate_vin() {
        assert_eq!(validate_vin("  "), Ok(None));
        assert_eq!(
            validate_vin("1hgcm82633a004352"),
            Ok(Some("1HGCM82633A004352".to_string()))
        );
        assert_eq!(
            validate_vin("1HGCM82633A00435"),
            Err(ValidationError::InvalidVin)
        );
        assert_eq!(
            validate_vin("1HGCM82633A00435O"),
            Err(ValidationError::InvalidVin)
        );
    }

    #[test]
    fn test_validate_schedule_future_only() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(
            validate_schedule("2025-06-02", "09:30", &Utc, now),
            Ok(Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap())
        );
        assert_eq!(
            validate_schedule("2025-06-01", "12:00", &Utc, now),
            Err(ValidationError::NotInFuture)
        );
        assert_eq!(
            validate_schedule("2025-13-01", "09:00", &Utc, now),
            Err(ValidationError::InvalidDateTime)
        );
        assert_eq!(
            validate_schedule("2025-06-02", "", &Utc, now),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_validate_schedule_converts_local_offset() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(
            validate_schedule("2025-06-01", "15:00", &plus_two, now),
            Ok(Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap())
        );
        assert_eq!(
            validate_schedule("2025-06-01", "13:30", &plus_two, now),
            Err(ValidationError::NotInFuture)
        );
    }

    #[test_case("8", Ok(8.0))]
    #[test_case("0.25", Ok(0.25))]
    #[test_case("24", Ok(24.0))]
    #[test_case("0", Err(ValidationError::HoursOutOfRange))]
    #[test_case("24.5", Err(ValidationError::HoursOutOfRange))]
    #[test_case("-1", Err(ValidationError::HoursOutOfRange))]
    #[test_case("NaN", Err(ValidationError::HoursOutOfRange))]
    #[test_case("lots", Err(ValidationError::NotANumber))]
    fn test_validate_hours(input: &str, expected: Result<f32, ValidationError>) {
        assert_eq!(validate_hours(input), expected);
    }

    #[test_case("12", Ok(1200))]
    #[test_case("12.5", Ok(1250))]
    #[test_case("0.05", Ok(5))]
    #[test_case("12.505", Err(ValidationError::InvalidAmount))]
    #[test_case("-3", Err(ValidationError::InvalidAmount))]
    #[test_case(".50", Err(ValidationError::InvalidAmount))]
    #[test_case("1e3", Err(ValidationError::InvalidAmount))]
    fn test_validate_amount(input: &str, expected: Result<i64, ValidationError>) {
        assert_eq!(validate_amount(input), expected);
    }

    #[test]
    fn test_validate_duration() {
        assert_eq!(validate_duration("45"), Ok(45));
        assert_eq!(validate_duration("0"), Err(ValidationError::DurationOutOfRange));
        assert_eq!(validate_duration("-5"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2025-05-02"),
            Ok(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap())
        );
        assert_eq!(validate_date("05/02/2025"), Err(ValidationError::InvalidDateTime));
    }

    #[test]
    fn errors_display_for_logging() {
        assert_eq!(ValidationError::InvalidEmail.to_string(), "email address must contain @");
        assert_eq!(
            ValidationError::HoursOutOfRange.to_string(),
            "hours must be in (0, 24]"
        );
    }

    #[test]
    fn translation_keys_are_namespaced() {
        assert_eq!(ValidationError::Required.translation_key(), "validation.required");
        assert!(
            ValidationError::InvalidVin
                .translation_key()
                .starts_with("validation.")
        );
    }
}
