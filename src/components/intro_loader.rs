use yew::prelude::*;

use crate::timeline::hooks::{use_timeline, TimelineOptions};
use crate::timeline::script::{EntryKind, Gating, Script};

fn intro_script() -> Script {
    use EntryKind::*;
    Script::new(
        "intro-boot",
        Gating::AfterPrevious,
        vec![
            (System, "loopwire.sh --wake", 0),
            (System, "loading automations ... ok", 140),
            (Primary, "good to see you.", 220),
        ],
    )
}

/// Short boot-style splash shown once per landing visit; dismisses itself
/// the moment its script finishes playing.
#[function_component(IntroLoader)]
pub fn intro_loader() -> Html {
    let done = use_state(|| false);

    let on_complete = {
        let done = done.clone();
        Callback::from(move |_| done.set(true))
    };

    let timeline = use_timeline(
        intro_script(),
        TimelineOptions {
            capacity: 4,
            chars_per_tick: 2,
            tick_ms: 16,
            jitter: true,
            loop_pause_ms: None,
        },
        !*done,
        Some(on_complete),
    );

    if *done {
        return html! {};
    }

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
            html! {
                <div class={classes!("intro-line", entry.kind.css_class())}>{text}</div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="intro-loader">
            <style>
                {r#"
                    .intro-loader {
                        position: fixed;
                        inset: 0;
                        background: #05080d;
                        color: #5eead4;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.4rem;
                        font-family: "SF Mono", "Fira Code", monospace;
                        z-index: 200;
                    }
                    .intro-line.entry-primary { color: #7EB2FF; }
                "#}
            </style>
            {lines}
        </div>
    }
}
