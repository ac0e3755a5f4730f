use sensordash_client::api::ClearLogError;
use sensordash_client::events::DashboardEvent;

pub enum Msg {
    /// Anything the transport produced, push or poll.
    Transport(DashboardEvent),
    /// Clear-log button clicked.
    ClearLog,
    /// The clear request settled.
    ClearLogFinished(Result<(), ClearLogError>),
}
