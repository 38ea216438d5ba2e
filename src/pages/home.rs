use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::counter::StatCounter;
use crate::components::press_link::PressLink;
use crate::components::reveal::{RevealCard, RevealSection};
use crate::components::safe_img::SafeImg;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::config;
use crate::effects::{parallax_transform, section_class};
use crate::hooks::{use_revealed, ObserveOptions};

const SECTION_ANIMATION_CSS: &str = r#"
    .section-hidden {
        opacity: 0;
        transform: translateY(50px);
        transition: all 0.8s ease-out;
    }

    .section-visible {
        opacity: 1;
        transform: translateY(0);
    }
"#;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "fa-laptop-code",
        title: "ვებ-გვერდების შექმნა",
        text: "თანამედროვე, სწრაფი და ადაპტირებული ვებ-გვერდები თქვენი ბიზნესისთვის.",
    },
    Service {
        icon: "fa-mobile-alt",
        title: "მობილური დიზაინი",
        text: "ინტერფეისები, რომლებიც ყველა მოწყობილობაზე გამართულად მუშაობს.",
    },
    Service {
        icon: "fa-search",
        title: "SEO ოპტიმიზაცია",
        text: "საძიებო სისტემებში უკეთესი პოზიციები და მეტი ვიზიტორი.",
    },
];

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "საბაზისო",
        price: "300₾",
        features: &["ერთგვერდიანი საიტი", "ადაპტირებული დიზაინი", "საკონტაქტო ფორმა"],
        featured: false,
    },
    Plan {
        name: "ბიზნესი",
        price: "700₾",
        features: &["5-მდე გვერდი", "SEO საწყისი პაკეტი", "ანალიტიკა"],
        featured: true,
    },
    Plan {
        name: "პრემიუმი",
        price: "1200₾",
        features: &["შეუზღუდავი გვერდები", "ონლაინ მაღაზია", "6 თვიანი მხარდაჭერა"],
        featured: false,
    },
];

const ADVANTAGES: [(&str, &str); 3] = [
    ("fa-bolt", "სწრაფი შესრულება"),
    ("fa-shield-alt", "საიმედოობა"),
    ("fa-headset", "მუდმივი მხარდაჭერა"),
];

const SKILLS: [(&str, u32); 4] = [("HTML / CSS", 95), ("JavaScript", 90), ("Rust", 80), ("UI/UX", 85)];

const STATS: [(u32, &str); 3] = [(150, "პროექტი"), (120, "კმაყოფილი კლიენტი"), (5, "წლიანი გამოცდილება")];

#[function_component(Home)]
pub fn home() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let hero = use_node_ref();
    let hero_seen = use_revealed(
        hero.clone(),
        ObserveOptions {
            threshold: config::COUNTER_TRIGGER_THRESHOLD,
            root_margin: "0px",
        },
    );
    let hero_visible = use_revealed(
        hero.clone(),
        ObserveOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::SECTION_REVEAL_ROOT_MARGIN,
        },
    );

    html! {
        <main>
            <style>{ SECTION_ANIMATION_CSS }</style>

            <section id="home" class={classes!("hero-section", section_class(hero_visible))} ref={hero}>
                <div class="hero-bg" style={format!("transform: {};", parallax_transform(scroll_y))}></div>
                <div class="container hero-content">
                    <h1 class="hero-title">{"ციფრული გადაწყვეტილებები თქვენი ბიზნესისთვის"}</h1>
                    <p class="hero-subtitle">{"ვქმნი ვებ-გვერდებს, რომლებიც მუშაობს თქვენთვის."}</p>
                    <div class="hero-buttons">
                        <PressLink href="#contact" class="btn-primary">{"დამიკავშირდით"}</PressLink>
                        <PressLink href="#services" class="btn-outline-light">{"სერვისები"}</PressLink>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().map(|(target, label)| html! {
                            <StatCounter target={*target} label={*label} active={hero_seen} />
                        }) }
                    </div>
                </div>
                <ScrollIndicator scroll_y={scroll_y} target="about" />
            </section>

            <RevealSection id="about" class="about-section">
                <div class="container">
                    <div class="row align-items-center">
                        <div class="col-lg-5">
                            <SafeImg src="/assets/profile.jpg" alt="პროფილის ფოტო" class="about-image" />
                        </div>
                        <div class="col-lg-7">
                            <h2 class="section-title">{"ჩემ შესახებ"}</h2>
                            <p>{"ვარ ვებ-დეველოპერი თბილისიდან. ვეხმარები მცირე და საშუალო ბიზნესს ონლაინ სივრცეში გამოჩენაში."}</p>
                        </div>
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="services" class="services-section">
                <div class="container">
                    <h2 class="section-title">{"სერვისები"}</h2>
                    <div class="row g-4">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="col-md-4">
                                <RevealCard class="service-card" lift_on_hover={true}>
                                    <i class={classes!("fas", service.icon)}></i>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.text }</p>
                                </RevealCard>
                            </div>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="pricing" class="pricing-section">
                <div class="container">
                    <h2 class="section-title">{"ფასები"}</h2>
                    <div class="row g-4">
                        { for PLANS.iter().map(|plan| html! {
                            <div class="col-md-4">
                                <RevealCard
                                    class={classes!("pricing-card", plan.featured.then_some("featured"))}
                                    lift_on_hover={true}
                                >
                                    <h3>{ plan.name }</h3>
                                    <div class="price">{ plan.price }</div>
                                    <ul>
                                        { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                    </ul>
                                    <PressLink href="#contact" class="btn-primary">{"შეკვეთა"}</PressLink>
                                </RevealCard>
                            </div>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="advantages" class="advantages-section">
                <div class="container">
                    <h2 class="section-title">{"რატომ მე"}</h2>
                    <div class="row g-4">
                        { for ADVANTAGES.iter().map(|(icon, title)| html! {
                            <div class="col-md-4">
                                <RevealCard class="advantage-item">
                                    <i class={classes!("fas", *icon)}></i>
                                    <h4>{ *title }</h4>
                                </RevealCard>
                            </div>
                        }) }
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="skills" class="skills-section">
                <div class="container">
                    <h2 class="section-title">{"უნარები"}</h2>
                    { for SKILLS.iter().map(|(name, level)| html! {
                        <RevealCard class="skill-item">
                            <div class="skill-name">{ *name }<span>{ format!("{}%", level) }</span></div>
                            <div class="skill-bar">
                                <div class="skill-progress" style={format!("width: {}%;", level)}></div>
                            </div>
                        </RevealCard>
                    }) }
                </div>
            </RevealSection>

            <RevealSection id="contact" class="contact-section">
                <div class="container">
                    <h2 class="section-title">{"კონტაქტი"}</h2>
                    <p class="contact-phone">
                        <i class="fas fa-phone me-2"></i>{ config::CONTACT_PHONE }
                    </p>
                    <ContactSection />
                </div>
            </RevealSection>
        </main>
    }
}
