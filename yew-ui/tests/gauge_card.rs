// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the gauge cards.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, flush};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;

use sensordash_ui::components::gauge_card::GaugeCard;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn renders_value_under_fixed_id() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <GaugeCard id="temp-value" label="Temperature" value={"23.5 °C".to_string()} />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let value = gloo_utils::document()
        .get_element_by_id("temp-value")
        .expect("gauge value should render under its fixed id");
    assert_eq!(value.text_content().unwrap_or_default(), "23.5 °C");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn alert_prop_toggles_the_anomaly_class() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <>
                <GaugeCard id="status-a" label="System Status" value={"ANOMALY".to_string()} alert={true} />
                <GaugeCard id="status-b" label="System Status" value={"NOMINAL".to_string()} />
            </>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let cards = mount.query_selector_all(".gauge-card").unwrap();
    assert_eq!(cards.length(), 2);
    let first = cards.get(0).unwrap().dyn_into::<web_sys::Element>().unwrap();
    let second = cards.get(1).unwrap().dyn_into::<web_sys::Element>().unwrap();
    assert!(first.class_name().contains("anomaly"));
    assert!(!second.class_name().contains("anomaly"));

    cleanup(&mount);
}
