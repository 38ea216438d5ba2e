use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Timings;
use crate::effects::{counter_label, counter_step};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
    /// Counting starts the first time this becomes true.
    pub active: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        let target = props.target;
        use_effect_with_deps(
            move |active| {
                if *active {
                    let tick = Timings::default().counter_tick_ms;
                    spawn_local(async move {
                        let mut current = 0;
                        while current < target {
                            current = counter_step(current, target);
                            value.set(current);
                            TimeoutFuture::new(tick).await;
                        }
                    });
                }
                || ()
            },
            props.active,
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-number" data-target={props.target.to_string()}>
                { counter_label(*value) }
            </span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
