use sensordash_ui::components::dashboard::Dashboard;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    html! {
        <Dashboard />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logging");
    yew::Renderer::<App>::new().render();
}
