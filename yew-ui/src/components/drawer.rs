use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DrawerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible header/content pair toggled by the `active` class. The
/// stylesheet keys off `#drawer-header`/`#drawer-content`, so the ids stay
/// fixed.
#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="drawer">
            <div
                id="drawer-header"
                class={classes!("drawer-header", (*open).then_some("active"))}
                onclick={toggle}
            >
                { props.title.clone() }
            </div>
            <div
                id="drawer-content"
                class={classes!("drawer-content", (*open).then_some("active"))}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
