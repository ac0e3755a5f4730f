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

mod model;
mod msg;

use log::info;
use model::{Connection, Model};
pub use msg::Msg;

use sensordash_client::api;
use sensordash_client::constants::VALUE_FALLBACK;
use sensordash_client::format::{format_fixed, format_pump};
use sensordash_client::transport::TransportOptions;
use sensordash_types::Reading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::drawer::Drawer;
use crate::components::event_log::EventLogTable;
use crate::components::gauge_card::GaugeCard;
use crate::components::live_chart::LiveChartView;
use crate::constants::{transport_kind, API_BASE_URL, WEBSOCKET_URL};

pub struct Dashboard {
    model: Model,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard {
            model: Model::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.model.connect(
                transport_kind(),
                TransportOptions {
                    websocket_url: WEBSOCKET_URL.clone(),
                    api_base: API_BASE_URL.clone(),
                    on_event: ctx.link().callback(Msg::Transport),
                },
            );
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Transport(event) => self.model.apply(event),
            Msg::ClearLog => {
                if !self.model.clear_log.request_confirmation() {
                    return false;
                }
                let confirmed = gloo_utils::window()
                    .confirm_with_message(
                        "Are you sure you want to permanently clear the entire event log?",
                    )
                    .unwrap_or(false);
                if !confirmed {
                    self.model.clear_log.decline();
                    return false;
                }
                if self.model.clear_log.confirm() {
                    let finished = ctx.link().callback(Msg::ClearLogFinished);
                    let api_base = API_BASE_URL.clone();
                    spawn_local(async move {
                        finished.emit(api::clear_log(&api_base).await);
                    });
                }
                // the button disables while the request is in flight
                true
            }
            Msg::ClearLogFinished(result) => {
                self.model.clear_log.settle();
                match result {
                    Ok(()) => {
                        info!("event log cleared");
                        self.model.reset_buffers();
                    }
                    Err(e) => {
                        // failure leaves the buffers untouched
                        gloo_utils::window()
                            .alert_with_message(&format!("Error clearing log: {e}"))
                            .ok();
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let live = self.model.live.as_ref();
        let temperature = live
            .map(|s| format_fixed(&s.temperature, 1, " °C"))
            .unwrap_or_else(|| VALUE_FALLBACK.to_string());
        let water_level = live
            .map(|s| format_fixed(&s.water_level, 1, " %"))
            .unwrap_or_else(|| VALUE_FALLBACK.to_string());
        let pump = live
            .map(|s| format_pump(&s.pump_status))
            .unwrap_or_else(|| VALUE_FALLBACK.to_string());
        let vibration = live
            .map(|s| format_fixed(&s.vibration, 2, ""))
            .unwrap_or_else(|| VALUE_FALLBACK.to_string());
        let anomalous = live.map(|s| s.anomaly.is_anomaly()).unwrap_or(false);
        let status = live
            .map(|s| s.anomaly.label().to_string())
            .unwrap_or_else(|| VALUE_FALLBACK.to_string());

        let rows: Vec<Reading> = self.model.event_log.iter().cloned().collect();
        let onclear = ctx.link().callback(|_: MouseEvent| Msg::ClearLog);

        html! {
            <div class="dashboard">
                <Drawer title="About this dashboard">
                    <p>{"Live view of the pump station: temperature, water level, pump state, \
                        vibration and the anomaly detector's verdict. The chart keeps the most \
                        recent samples; the full event log is available below."}</p>
                </Drawer>

                { self.connection_banner() }

                <div class="gauge-row">
                    <GaugeCard id="temp-value" label="Temperature" value={temperature} />
                    <GaugeCard id="level-value" label="Water Level" value={water_level} />
                    <GaugeCard id="pump-status" label="Pump Status" value={pump} />
                    <GaugeCard id="vibration-value" label="Vibration" value={vibration} />
                    <GaugeCard id="anomaly-status" label="System Status" value={status} alert={anomalous} />
                </div>

                <LiveChartView
                    labels={self.model.chart.labels().to_vec()}
                    temperature={self.model.chart.temperature().to_vec()}
                    anomaly={self.model.chart.anomaly().to_vec()}
                    axes={self.model.chart.axes().clone()}
                />

                <div class="event-log-panel">
                    <div class="event-log-header">
                        <h2>{"Event Log"}</h2>
                        <button
                            id="clear-log-btn"
                            onclick={onclear}
                            disabled={self.model.clear_log.is_requesting()}
                        >
                            {"Clear Log"}
                        </button>
                    </div>
                    <EventLogTable rows={rows} />
                </div>
            </div>
        }
    }
}

impl Dashboard {
    fn connection_banner(&self) -> Html {
        match self.model.connection {
            Connection::Lost => html! {
                <div class="connection-banner lost">{"Connection lost; data may be stale"}</div>
            },
            Connection::Connecting => html! {
                <div class="connection-banner">{"Connecting…"}</div>
            },
            Connection::Polling | Connection::Connected => html! {},
        }
    }
}
