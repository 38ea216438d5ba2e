use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Flips to true the first time `node` scrolls into view and stays there.
/// Gets `true` straight away when there is nothing to observe: the browser has
/// no `IntersectionObserver`, or `node` is not attached to an element.
#[hook]
pub fn use_revealed(node: NodeRef, options: ObserveOptions) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let on_visible = {
                    let revealed = revealed.clone();
                    move || revealed.set(true)
                };
                let observer = observe_once(node, options, on_visible);
                // Nothing to wait for, show it right away.
                if observer.is_none() {
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *revealed
}

fn observe_once(
    node: &NodeRef,
    options: &ObserveOptions,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let Some(element) = node.cast::<Element>() else {
        debug!("reveal target is not mounted, showing it without observing");
        return None;
    };

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_node_is_not_observed() {
        let options = ObserveOptions { threshold: 0.1, root_margin: "0px" };
        assert!(observe_once(&NodeRef::default(), &options, || {}).is_none());
    }
}
