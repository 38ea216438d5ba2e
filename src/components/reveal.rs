use yew::prelude::*;

use crate::config;
use crate::effects::{card_style, section_class};
use crate::hooks::{use_revealed, ObserveOptions};

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub class: Classes,
    /// Service and pricing cards lift when the pointer is over them.
    #[prop_or_default]
    pub lift_on_hover: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(
        node.clone(),
        ObserveOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::CARD_REVEAL_ROOT_MARGIN,
        },
    );
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        let lift = props.lift_on_hover;
        Callback::from(move |_: MouseEvent| {
            if lift {
                hovered.set(true);
            }
        })
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={card_style(revealed, *hovered)}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page `<section>` that slides up the first time it enters the viewport.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_revealed(
        node.clone(),
        ObserveOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::SECTION_REVEAL_ROOT_MARGIN,
        },
    );

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), section_class(visible))}
        >
            { for props.children.iter() }
        </section>
    }
}
