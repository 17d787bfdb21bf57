use yew::prelude::*;
use yew_router::components::Link;

use crate::components::chat_demo::ChatDemo;
use crate::components::dashboard::Dashboard;
use crate::components::faq::Faq;
use crate::components::intro_loader::IntroLoader;
use crate::components::journey::Journey;
use crate::components::pricing::PricingCards;
use crate::components::terminal_modal::TerminalModal;
use crate::config;
use crate::Route;

const MARQUEE_CLIENTS: [&str; 6] = [
    "Nordvik Logistics",
    "Bolt & Brine",
    "Artefakt Studio",
    "Cedar Dental Group",
    "Marlowe Estates",
    "Printhaus",
];

#[function_component(Home)]
pub fn home() -> Html {
    let console_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with(
            (),
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
        );
    }

    let open_console = {
        let console_open = console_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            console_open.set(true);
        })
    };

    let close_console = {
        let console_open = console_open.clone();
        Callback::from(move |_: MouseEvent| {
            console_open.set(false);
        })
    };

    // The marquee row is doubled so the CSS loop wraps seamlessly.
    let marquee_row = || {
        MARQUEE_CLIENTS
            .iter()
            .map(|name| html! { <span class="marquee-item">{*name}</span> })
            .collect::<Html>()
    };

    html! {
        <div class="landing-page">
            <IntroLoader />

            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Your back office, running itself"}</h1>
                    <p class="hero-subtitle">
                        {"Loopwire builds AI agents and automations that capture leads, answer customers and chase invoices — wired into the tools you already use."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={config::get_booking_url()} class="hero-cta">
                            {"Book a scoping call"}
                        </a>
                        <a href="#demo" class="faq-link">
                            {"Watch the demo first"}
                        </a>
                    </div>
                </div>
            </header>

            <div class="marquee">
                <div class="marquee-track">
                    { marquee_row() }
                    { marquee_row() }
                </div>
            </div>

            <div class="feature-block">
                <div class="feature-content">
                    <h2>{"Agents that do, not just chat"}</h2>
                    <p>{"Every agent we ship is wired to your actual systems, so a conversation ends with the work done."}</p>
                    <ul class="feature-list">
                        <li>{"📥 Lead intake that qualifies and books the call"}</li>
                        <li>{"🛟 Support triage with order lookups and refunds"}</li>
                        <li>{"🧾 Invoice chasing that stays polite and relentless"}</li>
                        <li>{"🔀 Human handoff with full context, every time"}</li>
                    </ul>
                </div>
            </div>

            <Dashboard />
            <Journey />
            <ChatDemo />
            <PricingCards />
            <Faq />

            <footer class="site-footer">
                <div class="footer-links">
                    <Link<Route> to={Route::Terms} classes="footer-link">
                        {"Terms & Privacy"}
                    </Link<Route>>
                    <a href={config::get_booking_url()} class="footer-link">
                        {"Contact"}
                    </a>
                </div>
                <div class="footer-meta">
                    <span>{"© 2026 Loopwire OÜ"}</span>
                    <button class="console-egg" onclick={open_console} title="operator console">
                        {"▸ console"}
                    </button>
                </div>
            </footer>

            if *console_open {
                <TerminalModal on_close={close_console} />
            }
        </div>
    }
}
