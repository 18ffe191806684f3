//! Text parsing for the fixed-format CLI inputs.

use anyhow::{bail, Context, Result};

use horae_angles::{DayNightDivision, Timestamp};

/// Parses a `YYYY-MM-DD HH:MM:SS` string into a validated [`Timestamp`].
pub fn parse_datetime(s: &str) -> Result<Timestamp> {
    let trimmed = s.trim();
    let (date, time) = trimmed
        .split_once(' ')
        .with_context(|| format!("expected `YYYY-MM-DD HH:MM:SS`, got {trimmed:?}"))?;

    let date_fields: Vec<&str> = date.split('-').collect();
    let [year, month, day] = date_fields[..] else {
        bail!("expected date as `YYYY-MM-DD`, got {date:?}");
    };
    let time_fields: Vec<&str> = time.split(':').collect();
    let [hour, minute, second] = time_fields[..] else {
        bail!("expected time as `HH:MM:SS`, got {time:?}");
    };

    let timestamp = Timestamp::new(
        year.parse()
            .with_context(|| format!("invalid year: {year:?}"))?,
        month
            .parse()
            .with_context(|| format!("invalid month: {month:?}"))?,
        day.parse().with_context(|| format!("invalid day: {day:?}"))?,
        hour.parse()
            .with_context(|| format!("invalid hour: {hour:?}"))?,
        minute
            .parse()
            .with_context(|| format!("invalid minute: {minute:?}"))?,
        second
            .parse()
            .with_context(|| format!("invalid second: {second:?}"))?,
    )?;
    Ok(timestamp)
}

/// Parses a day/night division name into the corresponding enum variant.
pub fn parse_division(s: &str) -> Result<DayNightDivision> {
    match s.to_lowercase().as_str() {
        "am" => Ok(DayNightDivision::Am),
        "pm" => Ok(DayNightDivision::Pm),
        other => bail!("unknown day/night division: {other:?} (expected `am` or `pm`)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_valid() {
        let ts = parse_datetime("2024-11-05 15:30:45").unwrap();
        assert_eq!(ts, Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap());
    }

    #[test]
    fn datetime_trims_whitespace() {
        assert!(parse_datetime("  2024-11-05 15:30:45\n").is_ok());
    }

    #[test]
    fn datetime_missing_time() {
        assert!(parse_datetime("2024-11-05").is_err());
    }

    #[test]
    fn datetime_malformed_date() {
        assert!(parse_datetime("2024-11 15:30:45").is_err());
        assert!(parse_datetime("2024/11/05 15:30:45").is_err());
    }

    #[test]
    fn datetime_malformed_time() {
        assert!(parse_datetime("2024-11-05 15:30").is_err());
        assert!(parse_datetime("2024-11-05 15.30.45").is_err());
    }

    #[test]
    fn datetime_non_numeric_field() {
        assert!(parse_datetime("2024-xx-05 15:30:45").is_err());
    }

    #[test]
    fn datetime_out_of_range_field() {
        assert!(parse_datetime("2024-13-05 15:30:45").is_err());
        assert!(parse_datetime("2024-11-05 24:00:00").is_err());
    }

    #[test]
    fn division_names() {
        assert_eq!(parse_division("am").unwrap(), DayNightDivision::Am);
        assert_eq!(parse_division("PM").unwrap(), DayNightDivision::Pm);
        assert!(parse_division("noon").is_err());
    }
}
