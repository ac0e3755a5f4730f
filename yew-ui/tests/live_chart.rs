// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the live chart.
//
// Verifies the empty state, gap segmentation around NaN temperature values,
// and that the stepped anomaly trace always renders.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, flush};
use wasm_bindgen_test::*;
use yew::prelude::*;

use sensordash_client::reconcile::{ChartAxes, LiveChart};
use sensordash_types::{AnomalyFlag, SensorValue};
use sensordash_ui::components::live_chart::LiveChartView;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    labels: Vec<String>,
    temperature: Vec<f64>,
    anomaly: Vec<f64>,
    axes: ChartAxes,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    html! {
        <LiveChartView
            labels={props.labels.clone()}
            temperature={props.temperature.clone()}
            anomaly={props.anomaly.clone()}
            axes={props.axes.clone()}
        />
    }
}

fn props_from(chart: &LiveChart) -> WrapperProps {
    WrapperProps {
        labels: chart.labels().to_vec(),
        temperature: chart.temperature().to_vec(),
        anomaly: chart.anomaly().to_vec(),
        axes: chart.axes().clone(),
    }
}

#[wasm_bindgen_test]
async fn empty_chart_shows_placeholder() {
    let chart = LiveChart::new();

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props_from(&chart)).render();
    flush().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("No data available"));
    assert!(mount.query_selector("svg").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn sentinel_temperature_splits_the_trace() {
    let mut chart = LiveChart::new();
    chart.append("12:00:00", &SensorValue::Number(23.0), AnomalyFlag::Nominal);
    chart.append("12:00:01", &SensorValue::Number(23.5), AnomalyFlag::Nominal);
    chart.append(
        "12:00:02",
        &SensorValue::Text("ERR".to_string()),
        AnomalyFlag::Anomaly,
    );
    chart.append("12:00:03", &SensorValue::Number(24.0), AnomalyFlag::Nominal);
    chart.append("12:00:04", &SensorValue::Number(24.5), AnomalyFlag::Nominal);

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props_from(&chart)).render();
    flush().await;

    // two temperature segments around the gap, plus the anomaly trace
    let polylines = mount.query_selector_all("polyline").unwrap();
    assert_eq!(polylines.length(), 3);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn continuous_data_renders_one_trace_per_axis() {
    let mut chart = LiveChart::new();
    for n in 0..5 {
        chart.append(
            format!("12:00:0{n}"),
            &SensorValue::Number(20.0 + n as f64),
            AnomalyFlag::Nominal,
        );
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props_from(&chart)).render();
    flush().await;

    let polylines = mount.query_selector_all("polyline").unwrap();
    assert_eq!(polylines.length(), 2);

    cleanup(&mount);
}
