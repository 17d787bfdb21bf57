use yew::prelude::*;
use yew_hooks::use_visible;

use crate::timeline::hooks::{use_timeline, TimelineOptions};
use crate::timeline::script::{EntryKind, Gating, Script};

fn lead_intake_script() -> Script {
    use EntryKind::*;
    Script::new(
        "lead-intake",
        Gating::DelayFromStart,
        vec![
            (Secondary, "Hi! Do you build custom AI chat agents?", 600),
            (Primary, "We do. Where are your leads coming from right now?", 1900),
            (Secondary, "Mostly Instagram DMs and our contact form.", 3400),
            (System, "Qualifying lead · budget & timeline captured", 4600),
            (
                Primary,
                "That's a great fit for an intake agent. I can get you a 20-minute scoping call — does Thursday 14:00 work?",
                6100,
            ),
            (Secondary, "Thursday works 👍", 7600),
            (System, "Meeting booked · calendar invite sent", 8500),
        ],
    )
}

fn support_triage_script() -> Script {
    use EntryKind::*;
    Script::new(
        "support-triage",
        Gating::DelayFromStart,
        vec![
            (Secondary, "Our order #4817 arrived damaged, what now?", 600),
            (System, "Order #4817 found · warranty active", 1700),
            (
                Primary,
                "Sorry about that! I've raised a replacement for order #4817 — it ships tomorrow, no charge.",
                3200,
            ),
            (Secondary, "Oh wow, that was fast. Thanks!", 4900),
            (System, "Ticket resolved · CSAT survey queued", 5800),
        ],
    )
}

fn invoice_chasing_script() -> Script {
    use EntryKind::*;
    Script::new(
        "invoice-chasing",
        Gating::DelayFromStart,
        vec![
            (System, "Invoice #209 overdue 14 days · reminder sent", 700),
            (Secondary, "Apologies, our accountant was on leave. Paying today.", 2300),
            (Primary, "No problem — here's a fresh payment link, valid 48h.", 3900),
            (System, "Payment received · €2,340.00 · ledger updated", 5400),
        ],
    )
}

const SCENARIOS: [&str; 3] = ["Lead intake", "Support triage", "Invoice chasing"];

/// Live-looking conversation demo. Playback starts when the section scrolls
/// into view and restarts from a clean transcript on every tab switch.
#[function_component(ChatDemo)]
pub fn chat_demo() -> Html {
    let node = use_node_ref();
    let visible = use_visible(node.clone(), false);
    let scenario = use_state(|| 0usize);

    let script = match *scenario {
        1 => support_triage_script(),
        2 => invoice_chasing_script(),
        _ => lead_intake_script(),
    };

    let timeline = use_timeline(
        script,
        TimelineOptions {
            capacity: 12,
            ..TimelineOptions::default()
        },
        visible,
        None,
    );

    let tabs = SCENARIOS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let class = if *scenario == i {
                "chat-tab active"
            } else {
                "chat-tab"
            };
            let scenario = scenario.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scenario.set(i);
            });
            html! {
                <button {class} {onclick}>{*label}</button>
            }
        })
        .collect::<Html>();

    let messages = timeline
        .entries
        .iter()
        .map(|entry| {
            html! {
                <div key={entry.id} class={classes!("chat-message", entry.kind.css_class())}>
                    { &entry.content }
                </div>
            }
        })
        .collect::<Html>();

    // Indicator while the agent's next reply is still "being written".
    let typing = timeline.pending_kind == Some(EntryKind::Primary) && !timeline.entries.is_empty();

    let restart = {
        let restart = timeline.restart.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            restart.emit(());
        })
    };

    html! {
        <section ref={node} id="demo" class="chat-demo">
            <div class="section-header">
                <h2>{"Watch an agent work a real conversation"}</h2>
                <p>{"Scripted replays of conversations our deployed agents handle every day. Pick a scenario."}</p>
            </div>
            <div class="chat-window">
                <div class="chat-tabs">{tabs}</div>
                <div class="chat-transcript">
                    {messages}
                    if typing {
                        <div class="chat-message entry-primary typing-indicator">
                            <span></span><span></span><span></span>
                        </div>
                    }
                </div>
                <div class="chat-controls">
                    if timeline.complete {
                        <button class="chat-replay" onclick={restart}>{"↻ Replay"}</button>
                    }
                </div>
            </div>
        </section>
    }
}
