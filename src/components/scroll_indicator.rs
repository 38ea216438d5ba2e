use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::effects::scroll_indicator_opacity;

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    pub scroll_y: f64,
    /// Id of the section a click scrolls to.
    pub target: AttrValue,
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| {
            let section = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&target));
            match section {
                Some(section) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => warn!("Scroll target #{} not found", target),
            }
        })
    };

    html! {
        <div
            class="scroll-indicator"
            style={format!("opacity: {};", scroll_indicator_opacity(props.scroll_y))}
            {onclick}
        >
            <i class="fas fa-chevron-down"></i>
        </div>
    }
}
