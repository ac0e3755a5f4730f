// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared harness for sensordash-ui component tests: mount/cleanup helpers
// and a scheduler flush.
//
// Every test file that does `mod support;` compiles its own copy, so some
// helpers go unused in some compilation units.
#![allow(dead_code)]

use std::time::Duration;

use yew::platform::time::sleep;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Yield to the yew scheduler so pending renders flush.
pub async fn flush() {
    sleep(Duration::ZERO).await;
}
