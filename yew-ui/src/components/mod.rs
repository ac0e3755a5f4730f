pub mod dashboard;
pub mod drawer;
pub mod event_log;
pub mod gauge_card;
pub mod live_chart;
