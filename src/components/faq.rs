use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="section-header">
                <h2>{"Frequently Asked Questions"}</h2>
            </div>

            <FaqItem question="How do I know what's worth automating?">
                <p>
                    {"That's what the audit is for. We sit with your team for a day, trace where the hours actually go, and rank every candidate by hours saved against build cost. Most clients are surprised by what tops the list — it's rarely the thing they called us about."}
                </p>
            </FaqItem>

            <FaqItem question="How long until something is live?">
                <p>
                    {"A single-workflow sprint ships in two weeks. Agent builds typically take four to six, most of which is integration and shadow-testing against your real traffic before anything talks to a customer unsupervised."}
                </p>
            </FaqItem>

            <FaqItem question="What happens to our data?">
                <p>
                    {"Your data stays in your accounts. Agents run against your own API keys, and conversation logs live in your CRM, not on our servers. Where a model provider is involved, we default to ones with no-training guarantees."}
                </p>
            </FaqItem>

            <FaqItem question="Can the agent hand off to a human?">
                <p>
                    {"Always. Every agent we ship has explicit escalation rules — sentiment, order value, keyword triggers, whatever fits your risk profile — and hands the thread to your team with full context attached."}
                </p>
            </FaqItem>

            <FaqItem question="What if we already tried a chatbot and hated it?">
                <p>
                    {"Most of our clients have. Off-the-shelf bots fail because they aren't wired to your systems — they can chat, but they can't "}<i>{"do"}</i>{" anything. Ours book the meeting, raise the replacement, send the invoice. That's the difference you saw in the demo above."}
                </p>
            </FaqItem>
        </section>
    }
}
