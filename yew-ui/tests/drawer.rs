// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the collapsible drawer.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, flush};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;

use sensordash_ui::components::drawer::Drawer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <Drawer title="About">
            <p>{"drawer body"}</p>
        </Drawer>
    }
}

#[wasm_bindgen_test]
async fn click_toggles_the_active_class() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    flush().await;

    let header = gloo_utils::document()
        .get_element_by_id("drawer-header")
        .expect("drawer header should render");
    let content = gloo_utils::document()
        .get_element_by_id("drawer-content")
        .expect("drawer content should render");

    assert!(!header.class_name().contains("active"));
    assert!(!content.class_name().contains("active"));

    header
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
    flush().await;

    let header = gloo_utils::document().get_element_by_id("drawer-header").unwrap();
    let content = gloo_utils::document().get_element_by_id("drawer-content").unwrap();
    assert!(header.class_name().contains("active"));
    assert!(content.class_name().contains("active"));

    cleanup(&mount);
}
