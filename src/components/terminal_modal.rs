use yew::prelude::*;

use crate::timeline::hooks::{use_timeline, TimelineOptions};
use crate::timeline::script::{EntryKind, Gating, Script};

fn boot_script() -> Script {
    use EntryKind::*;
    Script::new(
        "console-boot",
        Gating::AfterPrevious,
        vec![
            (System, "loopwire-os v2.4.1 — operator console", 0),
            (System, "mounting workflow graph ......... ok", 180),
            (System, "handshake: crm bridge ........... ok", 120),
            (System, "handshake: inbox relay .......... ok", 120),
            (System, "handshake: ledger sync .......... ok", 140),
            (Primary, "37 automations online, 0 stalled", 260),
            (System, "replaying last 24h: 1,204 tasks, 98.6% unattended", 220),
            (Primary, "operator access granted", 320),
        ],
    )
}

#[derive(Properties, PartialEq)]
pub struct TerminalModalProps {
    pub on_close: Callback<MouseEvent>,
}

/// Easter-egg operator console: a boot log that types itself out line by
/// line, loops forever, and unlocks a discount code after the first full
/// pass. Closing the modal tears the playback down mid-line if need be.
#[function_component(TerminalModal)]
pub fn terminal_modal(props: &TerminalModalProps) -> Html {
    let reward_unlocked = use_state(|| false);

    let on_complete = {
        let reward_unlocked = reward_unlocked.clone();
        Callback::from(move |_| {
            if !*reward_unlocked {
                reward_unlocked.set(true);
            }
        })
    };

    let timeline = use_timeline(
        boot_script(),
        TimelineOptions {
            capacity: 18,
            chars_per_tick: 2,
            tick_ms: 18,
            jitter: true,
            loop_pause_ms: Some(2600),
        },
        true,
        Some(on_complete),
    );

    let last = timeline.entries.len().saturating_sub(1);
    let lines = timeline
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let text = if i == last && timeline.is_rendering {
                timeline.partial.clone().unwrap_or_default()
            } else {
                entry.content.clone()
            };
            let caret = i == last && timeline.is_rendering;
            html! {
                <div class={classes!("terminal-line", entry.kind.css_class())}>
                    <span class="terminal-prompt">{"> "}</span>
                    { text }
                    if caret {
                        <span class="terminal-caret">{"█"}</span>
                    }
                </div>
            }
        })
        .collect::<Html>();

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="terminal-overlay" onclick={props.on_close.clone()}>
            <style>
                {r#"
                    .terminal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(2, 6, 12, 0.85);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 100;
                    }
                    .terminal-window {
                        width: min(640px, 92vw);
                        background: #05080d;
                        border: 1px solid rgba(94, 234, 212, 0.3);
                        border-radius: 12px;
                        padding: 1.5rem;
                        font-family: "SF Mono", "Fira Code", monospace;
                        font-size: 0.9rem;
                        color: #5eead4;
                    }
                    .terminal-line { min-height: 1.4em; white-space: pre-wrap; }
                    .terminal-line.entry-primary { color: #7EB2FF; }
                    .terminal-caret { animation: caret-blink 0.9s steps(1) infinite; }
                    @keyframes caret-blink { 50% { opacity: 0; } }
                    .terminal-reward {
                        margin-top: 1rem;
                        padding: 0.8rem 1rem;
                        border: 1px dashed #5eead4;
                        border-radius: 8px;
                        color: #fff;
                    }
                    .terminal-close {
                        float: right;
                        background: none;
                        border: none;
                        color: #5eead4;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="terminal-window" onclick={stop_propagation}>
                <button class="terminal-close" onclick={props.on_close.clone()}>{"✕"}</button>
                {lines}
                if *reward_unlocked {
                    <div class="terminal-reward">
                        {"Access code found: "}
                        <b>{"OPERATOR-20"}</b>
                        {" — 20% off your first automation sprint. Mention it on the call."}
                    </div>
                }
            </div>
        </div>
    }
}
