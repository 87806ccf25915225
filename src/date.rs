use anyhow::{anyhow, bail, Context, Result};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

/// Parse a `dd-mm-yy` command-line date into midnight of that day.
///
/// Two-digit years pivot like `%y`: 00..=68 are 2000s, 69..=99 are 1900s.
pub fn parse_cli_date(s: &str) -> Result<PrimitiveDateTime> {
    let parts: Vec<_> = s.trim().split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date {s:?}: expected dd-mm-yy");
    }
    let day: u8 = parts[0].parse().map_err(|_| anyhow!("invalid day in {s:?}"))?;
    let month: u8 = parts[1].parse().map_err(|_| anyhow!("invalid month in {s:?}"))?;
    if parts[2].len() != 2 {
        bail!("invalid year in {s:?}: expected two digits");
    }
    let yy: i32 = parts[2].parse().map_err(|_| anyhow!("invalid year in {s:?}"))?;
    let year = if yy <= 68 { 2000 + yy } else { 1900 + yy };

    let month = Month::try_from(month).with_context(|| format!("month out of range in {s:?}"))?;
    let date = Date::from_calendar_date(year, month, day)
        .with_context(|| format!("day out of range in {s:?}"))?;
    Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

/// Parse a tweet `created_at` value (`Wed Oct 10 20:19:24 +0000 2018`).
///
/// The offset is validated and then dropped: comparisons against the
/// command-line bounds are done on the wall-clock fields.
pub fn parse_created_at(s: &str) -> Option<PrimitiveDateTime> {
    let fmt = format_description!(
        "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]"
    );
    let dt = OffsetDateTime::parse(s.trim(), &fmt).ok()?;
    Some(PrimitiveDateTime::new(dt.date(), dt.time()))
}
