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

//! Bounded in-memory state the incoming updates reconcile against.
//!
//! The reconcilers own data only; rendering belongs to the UI crate. That
//! keeps every buffer rule unit-testable without a DOM.

mod chart;
mod event_log;

pub use chart::{ChartAxes, LiveChart};
pub use event_log::EventLog;
