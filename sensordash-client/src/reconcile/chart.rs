use sensordash_types::{AnomalyFlag, HistoryPoint, SensorValue};

use crate::constants::{CHART_CAPACITY, ERROR_SENTINEL};

/// Axis configuration for the live chart.
///
/// Temperature and anomaly get separate y-axes because their ranges are
/// incompatible (continuous °C vs a 0/1 flag); the anomaly axis is pinned to
/// `[-0.1, 1.1]` with unit ticks so the stepped trace reads as a binary
/// signal.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartAxes {
    pub temperature_label: &'static str,
    pub anomaly_label: &'static str,
    pub anomaly_min: f64,
    pub anomaly_max: f64,
    pub anomaly_tick_step: f64,
}

impl Default for ChartAxes {
    fn default() -> Self {
        ChartAxes {
            temperature_label: "Temperature (°C)",
            anomaly_label: "Anomaly Status",
            anomaly_min: -0.1,
            anomaly_max: 1.1,
            anomaly_tick_step: 1.0,
        }
    }
}

/// Bounded series buffers for the two-axis live chart.
///
/// All series are index-aligned at all times: labels, temperature, and
/// anomaly grow and shrink in lockstep. Temperature holds `f64::NAN` where
/// the raw value was the error sentinel (or unparseable); the renderer draws
/// those as gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveChart {
    labels: Vec<String>,
    temperature: Vec<f64>,
    anomaly: Vec<f64>,
    capacity: usize,
    axes: ChartAxes,
}

impl Default for LiveChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveChart {
    pub fn new() -> Self {
        Self::with_capacity(CHART_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LiveChart {
            labels: Vec::new(),
            temperature: Vec::new(),
            anomaly: Vec::new(),
            capacity,
            axes: ChartAxes::default(),
        }
    }

    /// Append one live point, evicting index 0 from every series while over
    /// capacity.
    pub fn append(&mut self, label: impl Into<String>, temperature: &SensorValue, anomaly: AnomalyFlag) {
        self.labels.push(label.into());
        self.temperature.push(plot_value(temperature));
        self.anomaly.push(anomaly.as_f64());
        while self.labels.len() > self.capacity {
            self.labels.remove(0);
            self.temperature.remove(0);
            self.anomaly.remove(0);
        }
    }

    /// Replace every series wholesale with a full history. The live-append
    /// cap does not apply here; the next live append re-trims.
    pub fn load_history(&mut self, points: &[HistoryPoint]) {
        self.labels = points.iter().map(|p| p.timestamp.clone()).collect();
        self.temperature = points.iter().map(|p| plot_value(&p.temperature)).collect();
        self.anomaly = points.iter().map(|p| p.anomaly.as_f64()).collect();
    }

    /// Empty every series. Axis configuration is untouched.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.temperature.clear();
        self.anomaly.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    pub fn anomaly(&self) -> &[f64] {
        &self.anomaly
    }

    pub fn axes(&self) -> &ChartAxes {
        &self.axes
    }
}

// Sentinel and unparseable values become NaN, the renderer's gap marker.
fn plot_value(value: &SensorValue) -> f64 {
    if value.is_sentinel(ERROR_SENTINEL) {
        return f64::NAN;
    }
    value.as_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: f64) -> SensorValue {
        SensorValue::Number(n)
    }

    #[test]
    fn series_stay_index_aligned() {
        let mut chart = LiveChart::new();
        for n in 0..80 {
            chart.append(
                format!("12:00:{:02}", n % 60),
                &number(20.0 + n as f64),
                AnomalyFlag::Nominal,
            );
            assert_eq!(chart.labels().len(), chart.temperature().len());
            assert_eq!(chart.labels().len(), chart.anomaly().len());
            assert!(chart.len() <= CHART_CAPACITY);
        }
        assert_eq!(chart.len(), CHART_CAPACITY);
    }

    #[test]
    fn the_fifty_first_append_evicts_index_zero_everywhere() {
        let mut chart = LiveChart::with_capacity(50);
        for n in 0..51 {
            chart.append(format!("label-{n}"), &number(n as f64), AnomalyFlag::Nominal);
        }
        assert_eq!(chart.len(), 50);
        assert_eq!(chart.labels()[0], "label-1");
        assert_eq!(chart.temperature()[0], 1.0);
        assert!(!chart.labels().iter().any(|l| l == "label-0"));
    }

    #[test]
    fn sentinel_temperature_becomes_a_gap_anomaly_stays() {
        let mut chart = LiveChart::new();
        chart.append(
            "12:00:00",
            &SensorValue::Text("ERR".to_string()),
            AnomalyFlag::Anomaly,
        );
        assert!(chart.temperature()[0].is_nan());
        assert_eq!(chart.anomaly()[0], 1.0);
    }

    #[test]
    fn unparseable_temperature_also_gaps() {
        let mut chart = LiveChart::new();
        chart.append("12:00:00", &SensorValue::Missing, AnomalyFlag::Nominal);
        assert!(chart.temperature()[0].is_nan());
    }

    #[test]
    fn numeric_strings_plot_as_numbers() {
        let mut chart = LiveChart::new();
        chart.append(
            "12:00:00",
            &SensorValue::Text("23.5".to_string()),
            AnomalyFlag::Nominal,
        );
        assert_eq!(chart.temperature()[0], 23.5);
    }

    #[test]
    fn clear_empties_series_but_not_axes() {
        let mut chart = LiveChart::new();
        chart.append("12:00:00", &number(23.5), AnomalyFlag::Anomaly);
        let axes_before = chart.axes().clone();
        chart.clear();
        assert!(chart.is_empty());
        assert!(chart.temperature().is_empty());
        assert!(chart.anomaly().is_empty());
        assert_eq!(chart.axes(), &axes_before);
        assert_eq!(chart.axes().anomaly_min, -0.1);
        assert_eq!(chart.axes().anomaly_max, 1.1);
    }

    #[test]
    fn history_load_replaces_wholesale() {
        let mut chart = LiveChart::new();
        chart.append("12:00:00", &number(1.0), AnomalyFlag::Nominal);

        let points: Vec<HistoryPoint> = (0..120)
            .map(|n| HistoryPoint {
                timestamp: format!("2025-06-01 12:{:02}:00", n % 60),
                temperature: number(20.0 + n as f64),
                anomaly: AnomalyFlag::Nominal,
            })
            .collect();
        chart.load_history(&points);
        assert_eq!(chart.len(), 120);
        assert_eq!(chart.temperature()[0], 20.0);

        // a live append after a history load re-trims to capacity
        chart.append("13:00:00", &number(99.0), AnomalyFlag::Nominal);
        assert_eq!(chart.len(), CHART_CAPACITY);
        assert_eq!(*chart.temperature().last().unwrap(), 99.0);
    }
}
