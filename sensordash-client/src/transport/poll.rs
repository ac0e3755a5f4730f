//
// Poll variant: three independent timers, each replacing its own slice of
// state wholesale on every tick. The timers carry no ordering guarantee
// relative to one another. A failed or empty response is skipped; the next
// tick simply tries again.
//
use gloo::timers::callback::Interval;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::Callback;

use super::TransportOptions;
use crate::api;
use crate::constants::{LIVE_POLL_INTERVAL_MS, LOG_SYNC_INTERVAL_MS};
use crate::events::DashboardEvent;

pub struct PollDriver {
    _live: Interval,
    _recent: Interval,
    _history: Interval,
}

impl PollDriver {
    pub fn start(options: TransportOptions) -> Self {
        let TransportOptions {
            api_base, on_event, ..
        } = options;
        debug!("polling {api_base:?} for live data and log sync");

        // initial paint, then the periodic refreshes
        refresh_live(api_base.clone(), on_event.clone());
        refresh_recent(api_base.clone(), on_event.clone());
        refresh_history(api_base.clone(), on_event.clone());

        let live = {
            let (api_base, on_event) = (api_base.clone(), on_event.clone());
            Interval::new(LIVE_POLL_INTERVAL_MS, move || {
                refresh_live(api_base.clone(), on_event.clone())
            })
        };
        let recent = {
            let (api_base, on_event) = (api_base.clone(), on_event.clone());
            Interval::new(LOG_SYNC_INTERVAL_MS, move || {
                refresh_recent(api_base.clone(), on_event.clone())
            })
        };
        let history = Interval::new(LOG_SYNC_INTERVAL_MS, move || {
            refresh_history(api_base.clone(), on_event.clone())
        });

        PollDriver {
            _live: live,
            _recent: recent,
            _history: history,
        }
    }
}

fn refresh_live(api_base: String, on_event: Callback<DashboardEvent>) {
    spawn_local(async move {
        match api::fetch_live(&api_base).await {
            Ok(Some(snapshot)) => on_event.emit(DashboardEvent::Live(snapshot)),
            Ok(None) => {}
            Err(e) => error!("live data poll failed: {e}"),
        }
    });
}

fn refresh_recent(api_base: String, on_event: Callback<DashboardEvent>) {
    spawn_local(async move {
        match api::fetch_recent(&api_base).await {
            Ok(entries) if entries.is_empty() => {}
            Ok(entries) => on_event.emit(DashboardEvent::Recent(entries)),
            Err(e) => error!("recent entries poll failed: {e}"),
        }
    });
}

fn refresh_history(api_base: String, on_event: Callback<DashboardEvent>) {
    spawn_local(async move {
        match api::fetch_history(&api_base).await {
            Ok(points) if points.is_empty() => {}
            Ok(points) => on_event.emit(DashboardEvent::History(points)),
            Err(e) => error!("history poll failed: {e}"),
        }
    });
}
