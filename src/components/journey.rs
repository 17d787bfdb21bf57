use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const STEPS: [(&str, &str); 4] = [
    (
        "Audit",
        "We map every repetitive task in your operation and put a number on what it costs you.",
    ),
    (
        "Blueprint",
        "You get a fixed-scope automation plan: which agents, which integrations, in what order.",
    ),
    (
        "Build & integrate",
        "We wire the agents into your CRM, inbox and ledger, shadowing your team until they're trusted.",
    ),
    (
        "Launch & optimize",
        "Agents go live with weekly tuning. You see every handled task in a shared dashboard.",
    ),
];

/// Implementation journey: the active step follows how far the visitor has
/// scrolled through the section.
#[function_component(Journey)]
pub fn journey() -> Html {
    let active_step = use_state(|| 0usize);
    let node = use_node_ref();

    {
        let active_step = active_step.clone();
        let node = node.clone();
        use_effect_with(
            (),
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(section) = node.cast::<web_sys::HtmlElement>() {
                        let rect = section.get_bounding_client_rect();
                        let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();
                        // Progress: 0 when the section top reaches the lower
                        // third of the viewport, 1 when its bottom does.
                        let total = rect.height() + viewport * 0.66;
                        let travelled = viewport * 0.66 - rect.top();
                        let progress = (travelled / total).clamp(0.0, 1.0);
                        let step = ((progress * STEPS.len() as f64) as usize).min(STEPS.len() - 1);
                        active_step.set(step);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
        );
    }

    let steps = STEPS
        .iter()
        .copied()
        .enumerate()
        .map(|(i, (title, body))| {
            let class = if i <= *active_step {
                "journey-step active"
            } else {
                "journey-step"
            };
            html! {
                <div {class}>
                    <div class="journey-marker">{i + 1}</div>
                    <div class="journey-copy">
                        <h3>{title}</h3>
                        <p>{body}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={node} class="journey-section">
            <div class="section-header">
                <h2>{"From audit to autopilot in four steps"}</h2>
            </div>
            <div class="journey-steps">{steps}</div>
        </section>
    }
}
