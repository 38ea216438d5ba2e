use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use portfolio::config;
use portfolio::effects::{active_section, anchor_scroll_top, navbar_background, SectionBounds};
use portfolio::pages::home::Home;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "მთავარი"),
    ("about", "ჩემ შესახებ"),
    ("services", "სერვისები"),
    ("pricing", "ფასები"),
    ("contact", "კონტაქტი"),
];

fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let section = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match section {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(section.offset_top())));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => warn!("Nav target #{} not found", id),
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let background = use_state_eq(|| navbar_background(0.0));
    let active = use_state_eq(|| None::<String>);

    {
        let background = background.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let scroll_callback = Closure::<dyn Fn()>::new({
                            let window = window.clone();
                            move || {
                                let scroll_y = window.scroll_y().unwrap_or(0.0);
                                background.set(navbar_background(scroll_y));

                                if let Some(document) = window.document() {
                                    let sections = measure_sections(&document);
                                    // No match keeps the previous highlight.
                                    if let Some(id) = active_section(scroll_y, &sections) {
                                        active.set(Some(id.to_string()));
                                    }
                                }
                            }
                        });

                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not listen for scroll events: {:?}", e);
                        }

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "navbar-collapse show"
    } else {
        "navbar-collapse"
    };

    html! {
        <nav class="navbar fixed-top" style={format!("background: {};", *background)}>
            <div class="container">
                <a class="navbar-brand" href="#home">{"პორტფოლიო"}</a>
                <button class="navbar-toggler" onclick={toggle_menu}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class={menu_class}>
                    <ul class="navbar-nav ms-auto">
                        { for NAV_LINKS.iter().map(|(id, label)| {
                            let onclick = {
                                let menu_open = menu_open.clone();
                                let id = *id;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    scroll_to_section(id);
                                })
                            };
                            let is_active = active.as_deref() == Some(*id);
                            html! {
                                <li class="nav-item">
                                    <a
                                        class={classes!("nav-link", is_active.then_some("active"))}
                                        href={format!("#{}", id)}
                                        {onclick}
                                    >
                                        { *label }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    yew::Renderer::<App>::new().render();

    info!("🚀 Georgian Portfolio Website Initialized");
    info!("📧 Contact form ready");
    info!("🎨 Animations loaded");
    info!("📱 Responsive design active");
}
