use log::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SafeImgProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that removes itself from the layout if it fails to load.
#[function_component(SafeImg)]
pub fn safe_img(props: &SafeImgProps) -> Html {
    let broken = use_state(|| false);

    let onerror = {
        let broken = broken.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            debug!("Hiding image that failed to load: {}", src);
            broken.set(true);
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={(*broken).then_some("display: none;")}
            {onerror}
        />
    }
}
