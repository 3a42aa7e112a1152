//! Publish dates travel as `yyyy-MM-dd HH:mm:ss`, the same text the create form accepts.
use crate::domain::article::PUBLISH_DATE_FORMAT;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(PUBLISH_DATE_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, PUBLISH_DATE_FORMAT).map_err(D::Error::custom)
}
