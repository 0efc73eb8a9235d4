use chrono_tz::Tz;
use std::str::FromStr;
use twodo_core::error::CoreError;

/// Validate an IANA timezone name and return the zone
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| {
        CoreError::InvalidTimezone(format!(
            "'{}'. Use IANA timezone names like 'Europe/Oslo'",
            timezone
        ))
    })
}

/// Detect system timezone
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Fallback to UTC
    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_timezone() {
        assert_eq!(validate_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(
            validate_timezone("Europe/Oslo").unwrap(),
            chrono_tz::Europe::Oslo
        );
        assert!(matches!(
            validate_timezone("Invalid/Timezone"),
            Err(CoreError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_detected_timezone_is_valid() {
        assert!(validate_timezone(&detect_system_timezone()).is_ok());
    }
}
