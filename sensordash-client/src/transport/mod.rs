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

//! The two transport strategies, behind one seam.
//!
//! A page runs exactly one of these. Both speak [`DashboardEvent`] through
//! the caller's callback, so the reconciling side cannot tell them apart.
//! Dropping the `Transport` tears the strategy down (the socket closes, the
//! intervals cancel).

mod poll;
mod push;

pub use poll::PollDriver;
pub use push::PushChannel;

use yew::prelude::Callback;

use crate::events::DashboardEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Push,
    Poll,
}

#[derive(Clone)]
pub struct TransportOptions {
    /// Push channel endpoint, e.g. `ws://host/stream`.
    pub websocket_url: String,
    /// Base URL the poll endpoints hang off; empty means same-origin.
    pub api_base: String,
    pub on_event: Callback<DashboardEvent>,
}

pub enum Transport {
    Push(PushChannel),
    Poll(PollDriver),
}

impl Transport {
    pub fn start(kind: TransportKind, options: TransportOptions) -> anyhow::Result<Self> {
        match kind {
            TransportKind::Push => PushChannel::connect(options).map(Transport::Push),
            TransportKind::Poll => Ok(Transport::Poll(PollDriver::start(options))),
        }
    }
}
