use yew::prelude::*;

use crate::config;

/// Pricing card grid plus the short pricing FAQ under it.
#[function_component(PricingCards)]
pub fn pricing_cards() -> Html {
    html! {
        <section id="pricing" class="pricing-container">
            <div class="pricing-header">
                <h1>{"Fixed-scope pricing, no surprises"}</h1>
                <p>{"Every engagement is scoped up front. You know the number before we write a line of automation."}</p>
            </div>

            <div class="pricing-grid">
                <div class="pricing-card main">
                    <div class="card-header">
                        <h3>{"Automation Sprint"}</h3>
                        <div class="price">
                            <span class="amount">{"€1,900"}</span>
                            <span class="period">{"/sprint"}</span>
                        </div>
                    </div>
                    <ul>
                        <li>{"One workflow, automated end to end"}</li>
                        <li>{"Delivered in two weeks"}</li>
                        <li>{"Handover docs your team can actually read"}</li>
                        <li>{"30 days of fixes included"}</li>
                    </ul>
                </div>

                <div class="pricing-card main featured">
                    <div class="card-header">
                        <h3>{"AI Agent Build"}</h3>
                        <div class="price">
                            <span class="amount">{"€4,500"}</span>
                            <span class="period">{"/project"}</span>
                        </div>
                    </div>
                    <ul>
                        <li>{"Custom chat agent on your channels"}</li>
                        <li>{"CRM, inbox and calendar wiring"}</li>
                        <li>{"Escalation to humans where it matters"}</li>
                        <li>{"Launch support and tuning"}</li>
                    </ul>
                </div>

                <div class="pricing-card features">
                    <div class="card-header">
                        <h3>{"Ops Partner"}</h3>
                        <div class="price">
                            <span class="amount">{"€2,400"}</span>
                            <span class="period">{"/month"}</span>
                        </div>
                    </div>
                    <ul>
                        <li>{"Everything in Agent Build"}</li>
                        <li>{"New automation shipped monthly"}</li>
                        <li>{"Monitoring & weekly optimization"}</li>
                        <li>{"Same-day fixes, direct line to us"}</li>
                    </ul>
                </div>
            </div>

            <a href={config::get_booking_url()} class="pricing-cta">
                <b>{"Book a scoping call"}</b>
            </a>

            <div class="pricing-faq">
                <h2>{"Common Questions"}</h2>
                <div class="faq-grid">
                    <div class="faq-item">
                        <h3>{"What if the automation breaks?"}</h3>
                        <p>{"Every build ships with monitoring and 30 days of included fixes. Ops Partner clients get same-day turnaround for as long as the retainer runs."}</p>
                    </div>
                    <div class="faq-item">
                        <h3>{"Do you replace our team?"}</h3>
                        <p>{"No. We automate the repetitive slice of their day so they handle the judgement calls. Escalation paths to a human are part of every agent we ship."}</p>
                    </div>
                    <div class="faq-item">
                        <h3>{"Which tools do you integrate with?"}</h3>
                        <p>{"Anything with an API: HubSpot, Pipedrive, Gmail, Outlook, Slack, Stripe, Xero and most of what sits next to them. Odd legacy systems are a scoping-call conversation."}</p>
                    </div>
                    <div class="faq-item">
                        <h3>{"Are there hidden fees?"}</h3>
                        <p>{"The scoped price is the whole price. You pay your own API and hosting bills, which we estimate for you before kickoff — usually tens of euros a month."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
