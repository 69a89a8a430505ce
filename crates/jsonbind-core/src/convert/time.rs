//! Date and time converters over the `time` crate.
//!
//! `JDateTime` and `JDate` are text-backed (RFC 3339 and `YYYY-MM-DD`);
//! `JEpochSeconds` is numeric-backed, serializing a point in time as a raw
//! JSON number of Unix seconds.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use super::{wrong_kind, JsonConverter};
use crate::error::{JsonError, JsonOutcome};
use crate::node::{JsonNode, JsonNumber, NodeKind};
use crate::path::NodePath;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// String node holding an RFC 3339 date-time to [`OffsetDateTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JDateTime;

impl JsonConverter for JDateTime {
    type T = OffsetDateTime;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<OffsetDateTime> {
        match node {
            JsonNode::Str(s) => OffsetDateTime::parse(s, &Rfc3339)
                .map_err(|e| JsonError::value(path, format!("invalid RFC 3339 date-time: {e}"))),
            other => Err(wrong_kind(NodeKind::String, other, path)),
        }
    }

    fn to_node(&self, value: &OffsetDateTime) -> JsonNode {
        let text = value
            .format(&Rfc3339)
            .expect("RFC 3339 formatting of an in-range date-time");
        JsonNode::Str(text)
    }
}

/// String node holding a `YYYY-MM-DD` calendar date to [`Date`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JDate;

impl JsonConverter for JDate {
    type T = Date;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<Date> {
        match node {
            JsonNode::Str(s) => Date::parse(s, DATE_FORMAT)
                .map_err(|e| JsonError::value(path, format!("invalid date: {e}"))),
            other => Err(wrong_kind(NodeKind::String, other, path)),
        }
    }

    fn to_node(&self, value: &Date) -> JsonNode {
        let text = value
            .format(DATE_FORMAT)
            .expect("formatting a date as year-month-day");
        JsonNode::Str(text)
    }
}

/// Number node holding Unix seconds to [`OffsetDateTime`]. Sub-second
/// precision is not carried; encoding truncates towards the epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct JEpochSeconds;

impl JsonConverter for JEpochSeconds {
    type T = OffsetDateTime;

    fn from_node(&self, node: &JsonNode, path: &NodePath) -> JsonOutcome<OffsetDateTime> {
        let num = match node {
            JsonNode::Num(num) => num,
            other => return Err(wrong_kind(NodeKind::Number, other, path)),
        };
        let secs = num
            .as_i64()
            .ok_or_else(|| JsonError::value(path, format!("{num} is not a whole number of seconds")))?;
        OffsetDateTime::from_unix_timestamp(secs)
            .map_err(|e| JsonError::value(path, format!("timestamp out of range: {e}")))
    }

    fn to_node(&self, value: &OffsetDateTime) -> JsonNode {
        JsonNode::Num(JsonNumber::from_i64(value.unix_timestamp()))
    }
}
