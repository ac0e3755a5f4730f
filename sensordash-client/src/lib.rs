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

//! Browser-side client for the sensordash monitoring backend.
//!
//! This crate takes care of everything between the wire and the screen:
//! receiving updates (push channel or polling), reconciling them into
//! bounded in-memory buffers, formatting raw fields for display, and
//! driving the clear-log flow. It makes no assumptions about the UI
//! framework beyond `yew::Callback` at the transport seam; rendering and
//! all DOM access live in the UI crate.
//!
//! # Outline of usage
//!
//! ```no_run
//! # use sensordash_client::{DashboardEvent, Transport, TransportKind, TransportOptions};
//! # use yew::prelude::Callback;
//! let on_event = Callback::from(|event: DashboardEvent| {
//!     // reconcile into the EventLog / LiveChart buffers
//! });
//! let transport = Transport::start(
//!     TransportKind::Poll,
//!     TransportOptions {
//!         websocket_url: "ws://localhost:5000/stream".to_string(),
//!         api_base: String::new(),
//!         on_event,
//!     },
//! );
//! ```

pub mod api;
pub mod clear_log;
pub mod constants;
pub mod events;
pub mod format;
pub mod reconcile;
pub mod transport;

pub use api::{ApiError, ClearLogError};
pub use clear_log::{ClearLogController, ClearLogState};
pub use events::DashboardEvent;
pub use reconcile::{ChartAxes, EventLog, LiveChart};
pub use transport::{PollDriver, PushChannel, Transport, TransportKind, TransportOptions};
