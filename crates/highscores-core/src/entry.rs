//! Leaderboard entry and its ranking order.

use std::cmp::Ordering;

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, SecondsFormat, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One recorded game result.
///
/// Field names on disk are camelCase (`playerName`, `score`, `date`, `level`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// `null` on disk reads as an empty name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub player_name: String,
    #[serde(default)]
    pub score: i32,
    #[serde(with = "date_format")]
    pub date: DateTime<Local>,
    #[serde(default)]
    pub level: i32,
}

impl ScoreEntry {
    pub fn new(
        player_name: impl Into<String>,
        score: i32,
        date: DateTime<Local>,
        level: i32,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            date,
            level,
        }
    }

    /// Leaderboard order: higher score first, earlier date breaks ties.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.date.cmp(&other.date))
    }

    /// Higher score first, no tie-break.
    pub fn score_cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

/// Parse a timestamp as stored in a leaderboard file.
///
/// Accepts RFC 3339 (`2024-05-01T12:30:00+09:00`, `...Z`) and offset-less
/// ISO-8601 (`2024-05-01T12:30:00.1234567`), the latter read as local time.
pub fn parse_date(raw: &str) -> Result<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", raw, e)))?;

    resolve_local(&Local, &naive)
        .ok_or_else(|| Error::InvalidDate(format!("'{}' does not exist in local time", raw)))
}

/// Map a wall-clock time onto `tz`.
///
/// A DST fold resolves to the earlier instant. A time inside a spring-forward
/// gap is moved forward by an hour, past the gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(date) => Some(date),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => tz
            .from_local_datetime(&(*naive + TimeDelta::hours(1)))
            .earliest(),
    }
}

fn null_as_empty<'de, D>(d: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

mod date_format {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Local>, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D>(d: D) -> std::result::Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
