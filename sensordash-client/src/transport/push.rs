//
// Push variant: one WebSocket carrying JSON frames, decoded at the boundary
// into PushMessage. Malformed frames are logged and dropped, never
// propagated.
//
use log::{debug, warn};
use sensordash_types::{PushMessage, Reading};
use yew::prelude::Callback;
use yew_websocket::websocket::{Binary, Text, WebSocketService, WebSocketStatus, WebSocketTask};

use super::TransportOptions;
use crate::events::DashboardEvent;

/// One inbound frame, already through boundary validation. `None` means the
/// frame was undecodable and the update is ignored.
pub struct PushFrame(pub Option<PushMessage>);

fn parse_frame(text: &str) -> Option<PushMessage> {
    match PushMessage::parse(text) {
        Ok(msg) => Some(msg),
        Err(e) => {
            warn!("dropping push frame: {e}");
            None
        }
    }
}

impl From<Text> for PushFrame {
    fn from(text: Text) -> Self {
        PushFrame(text.ok().and_then(|t| parse_frame(&t)))
    }
}

impl From<Binary> for PushFrame {
    // The channel is text JSON; a proxy may still deliver it as binary.
    fn from(bin: Binary) -> Self {
        PushFrame(
            bin.ok()
                .and_then(|b| String::from_utf8(b).ok())
                .and_then(|t| parse_frame(&t)),
        )
    }
}

pub struct PushChannel {
    _task: WebSocketTask,
}

impl PushChannel {
    pub fn connect(options: TransportOptions) -> anyhow::Result<Self> {
        let events = options.on_event.clone();
        let on_frame = Callback::from(move |frame: PushFrame| match frame.0 {
            Some(PushMessage::NewData { data }) => match Reading::from_wire(data) {
                Ok(reading) => events.emit(DashboardEvent::Reading(reading)),
                Err(e) => warn!("dropping reading: {e}"),
            },
            Some(PushMessage::LogCleared) => events.emit(DashboardEvent::LogCleared),
            None => {}
        });

        let events = options.on_event;
        let notification = Callback::from(move |status| match status {
            WebSocketStatus::Opened => events.emit(DashboardEvent::Connected),
            WebSocketStatus::Closed => {
                events.emit(DashboardEvent::ConnectionLost("WebSocket closed".to_string()))
            }
            WebSocketStatus::Error => {
                events.emit(DashboardEvent::ConnectionLost("WebSocket error".to_string()))
            }
        });

        debug!("WebSocket connecting to {}", &options.websocket_url);
        let task = WebSocketService::connect(&options.websocket_url, on_frame, notification)?;
        debug!("WebSocket connection success");
        Ok(PushChannel { _task: task })
    }
}
