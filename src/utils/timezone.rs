use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Clock used to read the hour and calendar day of a check-in
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Timezone {
    /// Keep the offset the timestamp was written with
    #[default]
    Recorded,
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Recorded);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("recorded") {
            return Ok(Timezone::Recorded);
        }
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn apply(self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Recorded => dt,
            Timezone::Local => {
                let local = dt.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = dt.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }
}
