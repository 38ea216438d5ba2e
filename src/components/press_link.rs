use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Timings;

#[derive(Properties, PartialEq)]
pub struct PressLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// `.btn` link that briefly shrinks when clicked.
#[function_component(PressLink)]
pub fn press_link(props: &PressLinkProps) -> Html {
    let pressed = use_state(|| false);

    let onclick = {
        let pressed = pressed.clone();
        let forward = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            pressed.set(true);
            let pressed = pressed.clone();
            let timeout = Timeout::new(Timings::default().press_effect_ms, move || {
                pressed.set(false);
            });
            timeout.forget();
            forward.emit(e);
        })
    };

    let style = if *pressed { "transform: scale(0.95);" } else { "" };

    html! {
        <a
            href={props.href.clone()}
            class={classes!("btn", props.class.clone())}
            {style}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
