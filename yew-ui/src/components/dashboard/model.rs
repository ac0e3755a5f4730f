use log::{error, warn};
use sensordash_client::clear_log::ClearLogController;
use sensordash_client::events::DashboardEvent;
use sensordash_client::format::time_of_day;
use sensordash_client::reconcile::{EventLog, LiveChart};
use sensordash_client::transport::{Transport, TransportKind, TransportOptions};
use sensordash_types::LiveSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    /// Poll variant; there is no persistent channel to lose.
    Polling,
    Connecting,
    Connected,
    Lost,
}

/// All dashboard state, owned here and mutated only by the transport
/// callback and the clear-log flow.
pub struct Model {
    pub event_log: EventLog,
    pub chart: LiveChart,
    pub live: Option<LiveSnapshot>,
    pub clear_log: ClearLogController,
    pub connection: Connection,
    transport: Option<Transport>,
}

impl Model {
    pub fn new() -> Self {
        Model {
            event_log: EventLog::new(),
            chart: LiveChart::new(),
            live: None,
            clear_log: ClearLogController::new(),
            connection: Connection::Polling,
            transport: None,
        }
    }

    pub fn connect(&mut self, kind: TransportKind, options: TransportOptions) {
        if kind == TransportKind::Push {
            self.connection = Connection::Connecting;
        }
        match Transport::start(kind, options) {
            Ok(transport) => self.transport = Some(transport),
            Err(e) => {
                error!("failed to start transport: {e}");
                self.connection = Connection::Lost;
            }
        }
    }

    /// Reconcile one transport event; true when the view changed.
    pub fn apply(&mut self, event: DashboardEvent) -> bool {
        match event {
            DashboardEvent::Connected => {
                self.connection = Connection::Connected;
                true
            }
            DashboardEvent::ConnectionLost(reason) => {
                warn!("push channel lost: {reason}");
                self.connection = Connection::Lost;
                true
            }
            DashboardEvent::Reading(reading) => {
                self.live = Some(LiveSnapshot::from_reading(&reading));
                self.chart.append(
                    time_of_day(&reading.timestamp).to_string(),
                    &reading.temperature,
                    reading.anomaly,
                );
                self.event_log.prepend(reading);
                true
            }
            DashboardEvent::LogCleared => {
                self.reset_buffers();
                true
            }
            DashboardEvent::Live(snapshot) => {
                self.live = Some(snapshot);
                true
            }
            DashboardEvent::Recent(entries) => {
                self.event_log.replace_all(entries);
                true
            }
            DashboardEvent::History(points) => {
                self.chart.load_history(&points);
                true
            }
        }
    }

    pub fn reset_buffers(&mut self) {
        self.event_log.clear();
        self.chart.clear();
    }
}
