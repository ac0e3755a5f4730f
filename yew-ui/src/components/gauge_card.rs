use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GaugeCardProps {
    /// Fixed element id; part of the markup contract with the stylesheet.
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    /// Highlights the card (the `anomaly` class) while the latest sample is
    /// anomalous.
    #[prop_or_default]
    pub alert: bool,
}

#[function_component(GaugeCard)]
pub fn gauge_card(props: &GaugeCardProps) -> Html {
    html! {
        <div class={classes!("gauge-card", props.alert.then_some("anomaly"))}>
            <div class="gauge-label">{ props.label.clone() }</div>
            <div class="gauge-value" id={props.id.clone()}>{ props.value.clone() }</div>
        </div>
    }
}
