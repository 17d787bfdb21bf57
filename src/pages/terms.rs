use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Terms)]
pub fn terms() -> Html {
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

    html! {
        <div class="legal-page">
            <h1>{"Terms of Service & Privacy"}</h1>
            <p class="legal-updated">{"Last updated: August 2026"}</p>

            <section>
                <h2>{"1. Who we are"}</h2>
                <p>
                    {"Loopwire OÜ (\"Loopwire\", \"we\") is an automation agency registered in Tallinn, Estonia. These terms cover the use of this website and the engagement terms that apply once you sign a statement of work with us."}
                </p>
            </section>

            <section>
                <h2>{"2. Engagements"}</h2>
                <p>
                    {"All work is delivered under a fixed-scope statement of work agreed before kickoff. Quoted prices are exclusive of VAT and of third-party costs (model providers, hosting, SMS gateways), which run on your own accounts and billing."}
                </p>
                <p>
                    {"Included fix windows (30 days for sprints and builds) cover defects in delivered automations, not scope changes. Retainer engagements renew monthly and can be cancelled with 30 days' notice."}
                </p>
            </section>

            <section>
                <h2>{"3. Your data"}</h2>
                <p>
                    {"The automations we build run against your own API keys and store their data in your systems. We do not host or retain your customer data. During an engagement we access your systems only as needed to build and verify the work, under the confidentiality terms of the statement of work."}
                </p>
                <p>
                    {"This website itself stores nothing about you: no analytics, no tracking cookies, no signup forms. The demo conversations on the landing page are scripted replays, not live systems."}
                </p>
            </section>

            <section>
                <h2>{"4. Intellectual property"}</h2>
                <p>
                    {"On full payment, you own the automations, prompts and configuration we deliver for you. We retain ownership of our internal tooling and templates, which you receive a perpetual license to use within the delivered work."}
                </p>
            </section>

            <section>
                <h2>{"5. Liability"}</h2>
                <p>
                    {"Automations act on your systems under rules you approve. Our liability for any claim arising from an engagement is capped at the fees paid for that engagement in the preceding three months. We are not liable for decisions made by third-party model providers' services."}
                </p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>
                    {"Questions about these terms: hello@loopwire.ee."}
                </p>
            </section>

            <Link<Route> to={Route::Home} classes="back-link">
                {"← Back to the site"}
            </Link<Route>>
        </div>
    }
}
