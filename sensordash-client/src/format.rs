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
 */

//! Display formatting for raw sensor fields.
//!
//! Pure functions, no DOM. Blank/missing fields render as the fallback,
//! sentinel values as `"Error"`, everything else as the value with its unit
//! appended. Numeric and string inputs behave identically because
//! [`SensorValue`] coerces before comparison.

use sensordash_types::SensorValue;

use crate::constants::{ERROR_SENTINEL, VALUE_FALLBACK};

pub fn format_display_value(
    value: &SensorValue,
    unit: &str,
    sentinel: &str,
    fallback: &str,
) -> String {
    if value.is_blank() {
        return fallback.to_string();
    }
    if value.is_sentinel(sentinel) {
        return "Error".to_string();
    }
    format!("{value}{unit}")
}

/// [`format_display_value`] with the standard sentinel and fallback.
pub fn format_value(value: &SensorValue, unit: &str) -> String {
    format_display_value(value, unit, ERROR_SENTINEL, VALUE_FALLBACK)
}

/// Gauge-card rendering with fixed decimal places. Falls back to the raw
/// string when the value does not parse as a number.
pub fn format_fixed(value: &SensorValue, precision: usize, unit: &str) -> String {
    if value.is_blank() {
        return VALUE_FALLBACK.to_string();
    }
    if value.is_sentinel(ERROR_SENTINEL) {
        return "Error".to_string();
    }
    match value.as_f64() {
        Some(n) => format!("{n:.precision$}{unit}"),
        None => format!("{value}{unit}"),
    }
}

/// The pump flag renders as ON/OFF; a pump value is "on" iff it is
/// numerically 1, whatever the JSON type.
pub fn format_pump(value: &SensorValue) -> String {
    if value.is_blank() {
        return VALUE_FALLBACK.to_string();
    }
    if value.is_sentinel(ERROR_SENTINEL) {
        return "Error".to_string();
    }
    match value.as_f64() {
        Some(n) if n == 1.0 => "ON".to_string(),
        Some(_) => "OFF".to_string(),
        None => value.to_string(),
    }
}

/// Time-of-day portion of a `"YYYY-MM-DD HH:MM:SS"` timestamp. A timestamp
/// with no space comes back unchanged.
pub fn time_of_day(timestamp: &str) -> &str {
    match timestamp.split_once(' ') {
        Some((_, time)) => time,
        None => timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_renders_as_error_never_raw() {
        let value = SensorValue::Text("ERR".to_string());
        assert_eq!(format_value(&value, " °C"), "Error");
        assert_eq!(format_fixed(&value, 1, " °C"), "Error");
        assert_eq!(format_pump(&value), "Error");
    }

    #[test]
    fn blank_inputs_render_as_fallback() {
        assert_eq!(format_value(&SensorValue::Missing, " %"), "N/A");
        assert_eq!(format_value(&SensorValue::Text("   ".to_string()), ""), "N/A");
        assert_eq!(format_fixed(&SensorValue::Missing, 2, ""), "N/A");
        assert_eq!(format_pump(&SensorValue::Missing), "N/A");
    }

    #[test]
    fn custom_fallback_is_honored() {
        assert_eq!(
            format_display_value(&SensorValue::Missing, "", "ERR", "--"),
            "--"
        );
    }

    #[test]
    fn values_concatenate_with_unit() {
        assert_eq!(
            format_value(&SensorValue::Text("23.5".to_string()), " °C"),
            "23.5 °C"
        );
        assert_eq!(format_value(&SensorValue::Number(71.0), " %"), "71 %");
    }

    #[test]
    fn numeric_and_string_inputs_format_identically() {
        let as_number = format_value(&SensorValue::Number(23.5), " °C");
        let as_string = format_value(&SensorValue::Text("23.5".to_string()), " °C");
        assert_eq!(as_number, as_string);
    }

    #[test]
    fn fixed_precision_rounds_like_the_gauges() {
        assert_eq!(
            format_fixed(&SensorValue::Number(23.456), 1, " °C"),
            "23.5 °C"
        );
        assert_eq!(
            format_fixed(&SensorValue::Text("0.025".to_string()), 2, ""),
            "0.03"
        );
    }

    #[test]
    fn pump_flag_is_numeric_one_across_encodings() {
        assert_eq!(format_pump(&SensorValue::Number(1.0)), "ON");
        assert_eq!(format_pump(&SensorValue::Text("1".to_string())), "ON");
        assert_eq!(format_pump(&SensorValue::Number(0.0)), "OFF");
        assert_eq!(format_pump(&SensorValue::Text("0".to_string())), "OFF");
    }

    #[test]
    fn time_of_day_survives_spaceless_timestamps() {
        assert_eq!(time_of_day("2025-06-01 12:34:56"), "12:34:56");
        assert_eq!(time_of_day("12:34:56"), "12:34:56");
        assert_eq!(time_of_day(""), "");
    }
}
