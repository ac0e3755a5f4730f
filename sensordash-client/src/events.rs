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

//! Framework-agnostic events emitted by the transport adapters.
//!
//! Both transport strategies speak this vocabulary, so the UI reconciles
//! state the same way regardless of whether updates arrive by push or poll.

use sensordash_types::{HistoryPoint, LiveSnapshot, Reading};

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    /// Push channel established.
    Connected,

    /// Push channel closed or errored.
    ConnectionLost(String),

    /// One new sample from the push channel.
    Reading(Reading),

    /// Server-side confirmation that the event log was cleared.
    LogCleared,

    /// Gauge snapshot from the live poll.
    Live(LiveSnapshot),

    /// Recent-entries listing, oldest first, replacing the table wholesale.
    Recent(Vec<Reading>),

    /// Full history for the chart, replacing every series wholesale.
    History(Vec<HistoryPoint>),
}
