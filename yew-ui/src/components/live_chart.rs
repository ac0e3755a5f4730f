use sensordash_client::format::time_of_day;
use sensordash_client::reconcile::ChartAxes;
use yew::prelude::*;

const TEMPERATURE_COLOR: &str = "#4299e1";
const ANOMALY_COLOR: &str = "#e53e3e";

#[derive(Properties, Clone, PartialEq)]
pub struct LiveChartProps {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub anomaly: Vec<f64>,
    pub axes: ChartAxes,
    #[prop_or(860)]
    pub width: u32,
    #[prop_or(320)]
    pub height: u32,
}

/// Dual-axis SVG line chart: a continuous temperature trace on the left
/// axis and the stepped anomaly trace on the pinned right axis. NaN
/// temperature values break the trace into segments, rendering as gaps.
#[function_component(LiveChartView)]
pub fn live_chart(props: &LiveChartProps) -> Html {
    let LiveChartProps {
        labels,
        temperature,
        anomaly,
        axes,
        width,
        height,
    } = props;

    if labels.is_empty() {
        return html! {
            <div id="live-chart" class="live-chart">
                <div class="no-data">{"No data available"}</div>
            </div>
        };
    }

    let chart_width = *width as f64;
    let chart_height = *height as f64;
    let margin_left = 60.0;
    let margin_right = 60.0;
    let margin_top = 30.0;
    let margin_bottom = 40.0;
    let plot_width = chart_width - margin_left - margin_right;
    let plot_height = chart_height - margin_top - margin_bottom;

    let data_len = labels.len();
    let x_at = |i: usize| margin_left + (i as f64 / (data_len - 1).max(1) as f64 * plot_width);

    // Left axis scale from the finite temperature values.
    let finite: Vec<f64> = temperature.iter().copied().filter(|v| v.is_finite()).collect();
    let (temp_min, temp_max) = temperature_scale(&finite);
    let y_temp = |v: f64| {
        margin_top + plot_height - ((v - temp_min) / (temp_max - temp_min) * plot_height)
    };
    let y_anomaly = |v: f64| {
        margin_top
            + plot_height
            - ((v - axes.anomaly_min) / (axes.anomaly_max - axes.anomaly_min) * plot_height)
    };

    // Temperature trace, broken into polyline segments at NaN gaps.
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (i, &v) in temperature.iter().enumerate() {
        if v.is_finite() {
            current.push((x_at(i), y_temp(v)));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    let temperature_elements: Vec<Html> = segments
        .iter()
        .map(|segment| {
            if segment.len() == 1 {
                let (x, y) = segment[0];
                html! {
                    <circle cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="2.5" fill={TEMPERATURE_COLOR} />
                }
            } else {
                let points: String = segment
                    .iter()
                    .map(|(x, y)| format!("{x:.1},{y:.1}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                html! {
                    <polyline points={points} fill="none" stroke={TEMPERATURE_COLOR} stroke-width="2" />
                }
            }
        })
        .collect();

    // Stepped anomaly trace: hold each value until the next sample.
    let mut step_points: Vec<String> = Vec::with_capacity(anomaly.len() * 2);
    for (i, &v) in anomaly.iter().enumerate() {
        let x = x_at(i);
        if i > 0 {
            let prev = y_anomaly(anomaly[i - 1]);
            step_points.push(format!("{x:.1},{prev:.1}"));
        }
        let y = y_anomaly(v);
        step_points.push(format!("{x:.1},{y:.1}"));
    }
    let anomaly_points = step_points.join(" ");

    // Right-axis ticks at whole steps inside the pinned range.
    let mut anomaly_ticks: Vec<f64> = Vec::new();
    let mut tick = axes.anomaly_min.ceil();
    while tick <= axes.anomaly_max {
        anomaly_ticks.push(if tick == 0.0 { 0.0 } else { tick });
        tick += axes.anomaly_tick_step;
    }
    let anomaly_tick_elements: Vec<Html> = anomaly_ticks
        .iter()
        .map(|&v| {
            let y = y_anomaly(v);
            html! {
                <>
                    <line x1={(chart_width - margin_right).to_string()} y1={y.to_string()} x2={(chart_width - margin_right + 5.0).to_string()} y2={y.to_string()} stroke="#666" stroke-width="1" />
                    <text x={(chart_width - margin_right + 10.0).to_string()} y={(y + 4.0).to_string()} fill="#aaa" font-size="12">{format!("{v:.0}")}</text>
                </>
            }
        })
        .collect();

    let x_label = |i: usize| time_of_day(&labels[i]).to_string();

    html! {
        <div id="live-chart" class="live-chart">
            <svg width={width.to_string()} height={height.to_string()} viewBox={format!("0 0 {width} {height}")}>
                // Left (temperature) axis
                <line x1={margin_left.to_string()} y1={margin_top.to_string()} x2={margin_left.to_string()} y2={(plot_height + margin_top).to_string()} stroke="#666" stroke-width="1" />
                // Right (anomaly) axis
                <line x1={(chart_width - margin_right).to_string()} y1={margin_top.to_string()} x2={(chart_width - margin_right).to_string()} y2={(plot_height + margin_top).to_string()} stroke="#666" stroke-width="1" />
                // X axis
                <line x1={margin_left.to_string()} y1={(plot_height + margin_top).to_string()} x2={(chart_width - margin_right).to_string()} y2={(plot_height + margin_top).to_string()} stroke="#666" stroke-width="1" />

                // Left-axis labels
                <text x={(margin_left - 10.0).to_string()} y={(plot_height + margin_top + 4.0).to_string()} fill="#aaa" font-size="12" text-anchor="end">{format!("{temp_min:.1}")}</text>
                <text x={(margin_left - 10.0).to_string()} y={(margin_top + plot_height / 2.0 + 4.0).to_string()} fill="#aaa" font-size="12" text-anchor="end">{format!("{:.1}", (temp_min + temp_max) / 2.0)}</text>
                <text x={(margin_left - 10.0).to_string()} y={(margin_top + 4.0).to_string()} fill="#aaa" font-size="12" text-anchor="end">{format!("{temp_max:.1}")}</text>

                // Right-axis ticks
                { for anomaly_tick_elements }

                // Data traces
                { for temperature_elements }
                <polyline points={anomaly_points} fill="none" stroke={ANOMALY_COLOR} stroke-width="2" />

                // X-axis time labels: oldest, middle, newest
                <text x={margin_left.to_string()} y={(chart_height - 10.0).to_string()} fill="#aaa" font-size="13" text-anchor="middle">{ x_label(0) }</text>
                <text x={(margin_left + plot_width / 2.0).to_string()} y={(chart_height - 10.0).to_string()} fill="#aaa" font-size="13" text-anchor="middle">{ x_label(data_len / 2) }</text>
                <text x={(chart_width - margin_right).to_string()} y={(chart_height - 10.0).to_string()} fill="#aaa" font-size="13" text-anchor="middle">{ x_label(data_len - 1) }</text>

                // Axis unit labels
                <text x="5" y={(margin_top + plot_height / 2.0).to_string()} fill="#aaa" font-size="11" transform={format!("rotate(-90, 5, {})", margin_top + plot_height / 2.0)}>{axes.temperature_label}</text>
                <text x={(chart_width - 5.0).to_string()} y={(margin_top + plot_height / 2.0).to_string()} fill="#aaa" font-size="11" transform={format!("rotate(90, {}, {})", chart_width - 5.0, margin_top + plot_height / 2.0)}>{axes.anomaly_label}</text>

                // Legend
                <text x="65" y="15" fill={TEMPERATURE_COLOR} font-size="10">{axes.temperature_label}</text>
                <text x="65" y="27" fill={ANOMALY_COLOR} font-size="10">{axes.anomaly_label}</text>
            </svg>
        </div>
    }
}

// Pad degenerate ranges so a flat trace still renders mid-plot.
fn temperature_scale(finite: &[f64]) -> (f64, f64) {
    if finite.is_empty() {
        return (0.0, 40.0);
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}
