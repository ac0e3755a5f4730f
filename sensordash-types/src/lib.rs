/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Wire and data model shared by the sensordash client and UI crates.
//!
//! Everything the backend sends is JSON with loosely typed fields: a sensor
//! reading may arrive as a number, a numeric string, the `"ERR"` sentinel, or
//! null. [`SensorValue`] absorbs that looseness at the boundary so the rest
//! of the code deals with one type. [`Reading`] is the named-field form of
//! the push channel's positional tuple; decoding validates the fixed order
//! in one place instead of destructuring arrays at use sites.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw sensor field as it arrives off the wire.
///
/// `Missing` covers both JSON null and fields the endpoint omits entirely
/// (`/recent_entries` has no vibration column).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl SensorValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, SensorValue::Missing)
    }

    /// True for null, absent, and whitespace-only string fields.
    pub fn is_blank(&self) -> bool {
        match self {
            SensorValue::Missing => true,
            SensorValue::Text(s) => s.trim().is_empty(),
            SensorValue::Number(_) => false,
        }
    }

    /// Sentinel comparison after string coercion, so `"ERR"` matches whether
    /// the field arrived as a string or (never in practice) a number.
    pub fn is_sentinel(&self, sentinel: &str) -> bool {
        match self {
            SensorValue::Text(s) => s == sentinel,
            SensorValue::Number(n) => coerce_number(*n) == sentinel,
            SensorValue::Missing => false,
        }
    }

    /// Numeric view: numbers directly, numeric strings via parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SensorValue::Number(n) => Some(*n),
            SensorValue::Text(s) => s.trim().parse().ok(),
            SensorValue::Missing => None,
        }
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Number(n) => write!(f, "{}", coerce_number(*n)),
            SensorValue::Text(s) => write!(f, "{s}"),
            SensorValue::Missing => Ok(()),
        }
    }
}

// Render integral floats without a trailing ".0" so a wire `1` displays as
// "1", matching how the backend's own string fields look.
fn coerce_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// The anomaly flag is the one field with exactly two legal values.
///
/// The backend emits it as `0`/`1` or `"0"`/`"1"` depending on the path the
/// sample took; a sample is anomalous iff the value is numerically 1.
/// Anything else fails decoding and the whole update is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnomalyFlag {
    Nominal,
    Anomaly,
}

impl AnomalyFlag {
    pub fn is_anomaly(self) -> bool {
        matches!(self, AnomalyFlag::Anomaly)
    }

    pub fn label(self) -> &'static str {
        match self {
            AnomalyFlag::Nominal => "NOMINAL",
            AnomalyFlag::Anomaly => "ANOMALY",
        }
    }

    /// Chart value for the stepped binary trace.
    pub fn as_f64(self) -> f64 {
        match self {
            AnomalyFlag::Nominal => 0.0,
            AnomalyFlag::Anomaly => 1.0,
        }
    }
}

impl TryFrom<&SensorValue> for AnomalyFlag {
    type Error = DecodeError;

    fn try_from(value: &SensorValue) -> Result<Self, Self::Error> {
        match value.as_f64() {
            Some(n) if n == 0.0 => Ok(AnomalyFlag::Nominal),
            Some(n) if n == 1.0 => Ok(AnomalyFlag::Anomaly),
            _ => Err(DecodeError::BadAnomaly(value.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AnomalyFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = SensorValue::deserialize(deserializer)?;
        AnomalyFlag::try_from(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AnomalyFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(if self.is_anomaly() { 1 } else { 0 })
    }
}

/// Decode failures at the wire boundary. These never propagate past the
/// transport layer; a bad frame means "ignore this update".
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
    BadAnomaly(String),
    BadFrame(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BadAnomaly(v) => write!(f, "anomaly flag must be 0 or 1, got {v:?}"),
            DecodeError::BadFrame(e) => write!(f, "undecodable frame: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Positional payload of a `new_data` push frame. The order is fixed wire
/// contract: `[timestamp, temperature, water_level, pump_status, vibration,
/// anomaly]`. Decode through [`Reading::from_wire`], not by indexing.
pub type ReadingTuple = (
    String,
    SensorValue,
    SensorValue,
    SensorValue,
    SensorValue,
    SensorValue,
);

/// One timestamped sensor sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// `"YYYY-MM-DD HH:MM:SS"`.
    pub timestamp: String,
    pub temperature: SensorValue,
    pub water_level: SensorValue,
    pub pump_status: SensorValue,
    #[serde(default)]
    pub vibration: SensorValue,
    pub anomaly: AnomalyFlag,
}

impl Reading {
    /// Decode the push channel's positional tuple, validating the anomaly
    /// flag at the boundary.
    pub fn from_wire(data: ReadingTuple) -> Result<Self, DecodeError> {
        let (timestamp, temperature, water_level, pump_status, vibration, anomaly) = data;
        let anomaly = AnomalyFlag::try_from(&anomaly)?;
        Ok(Reading {
            timestamp,
            temperature,
            water_level,
            pump_status,
            vibration,
            anomaly,
        })
    }
}

/// Messages carried by the push channel, tagged by event name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PushMessage {
    NewData { data: ReadingTuple },
    LogCleared,
}

impl PushMessage {
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(text).map_err(|e| DecodeError::BadFrame(e.to_string()))
    }
}

/// `/live_data` gauge payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveSnapshot {
    pub temperature: SensorValue,
    pub water_level: SensorValue,
    pub pump_status: SensorValue,
    #[serde(rename = "vibration_value", default)]
    pub vibration: SensorValue,
    pub anomaly: AnomalyFlag,
}

impl LiveSnapshot {
    /// The endpoint returns `{}` until the first sample has been captured;
    /// that decodes to `None` ("no update"), not an error.
    pub fn parse(body: &str) -> Result<Option<Self>, DecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| DecodeError::BadFrame(e.to_string()))?;
        if value.as_object().is_some_and(|m| m.is_empty()) {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DecodeError::BadFrame(e.to_string()))
    }

    /// The push variant has no `/live_data` poll; its gauges refresh from
    /// each incoming reading instead.
    pub fn from_reading(reading: &Reading) -> Self {
        LiveSnapshot {
            temperature: reading.temperature.clone(),
            water_level: reading.water_level.clone(),
            pump_status: reading.pump_status.clone(),
            vibration: reading.vibration.clone(),
            anomaly: reading.anomaly,
        }
    }
}

/// One `/all_data` element for the full-history chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub temperature: SensorValue,
    pub anomaly: AnomalyFlag,
}

/// `POST /clear_log` acknowledgement. Some deployments answer with an empty
/// body instead; callers treat that as success.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClearResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ClearResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
