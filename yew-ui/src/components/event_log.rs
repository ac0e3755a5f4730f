use sensordash_client::format::{format_pump, format_value, time_of_day};
use sensordash_types::Reading;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EventLogTableProps {
    /// Rows in display order, newest first.
    pub rows: Vec<Reading>,
}

#[function_component(EventLogTable)]
pub fn event_log_table(props: &EventLogTableProps) -> Html {
    let rows: Vec<Html> = props
        .rows
        .iter()
        .map(|reading| {
            html! {
                <tr>
                    <td>{ time_of_day(&reading.timestamp).to_string() }</td>
                    <td>{ format_value(&reading.temperature, "") }</td>
                    <td>{ format_value(&reading.water_level, "") }</td>
                    <td>{ format_pump(&reading.pump_status) }</td>
                    <td>{ reading.anomaly.label() }</td>
                </tr>
            }
        })
        .collect();

    html! {
        <table id="event-log-table">
            <thead>
                <tr>
                    <th>{"Time"}</th>
                    <th>{"Temp (°C)"}</th>
                    <th>{"Level (%)"}</th>
                    <th>{"Pump"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for rows }
            </tbody>
        </table>
    }
}
