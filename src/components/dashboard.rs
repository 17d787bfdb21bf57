use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Looping "operations dashboard" animation: a lead comes in, gets worked
/// by the pipeline stage by stage, the counters tick up, then the cycle
/// resets and runs again.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let stage = use_state(|| 0u32);

    {
        let stage_clone = stage.clone();
        let stage_setter = stage.setter();
        use_effect(move || {
            let delay = match *stage_clone {
                0 => 600,  // Idle dashboard, then a lead arrives
                1 => 1200, // Lead card shown, agent picks it up
                2 => 1600, // Qualifying: progress bar fills
                3 => 1400, // Proposal drafted
                4 => 2400, // Deal booked, counters tick, hold
                5 => 400,  // Reset, loop back
                _ => 600,
            };
            let next_stage = match *stage_clone {
                5 => 1,
                _ => *stage_clone + 1,
            };
            let timeout = Timeout::new(delay, move || {
                stage_setter.set(next_stage);
            });

            move || drop(timeout)
        });
    }

    let progress = match *stage {
        1 => 15,
        2 => 55,
        3 => 85,
        4 | 5 => 100,
        _ => 0,
    };

    let status = match *stage {
        1 => "New lead · instagram DM",
        2 => "Qualifying · budget, timeline",
        3 => "Proposal drafted · awaiting send",
        4 | 5 => "Booked · invoice scheduled",
        _ => "Listening for events…",
    };

    let (leads, booked) = match *stage {
        4 | 5 => ("1,205", "312"),
        _ => ("1,204", "311"),
    };

    html! {
        <section class="dashboard-section">
            <div class="section-header">
                <h2>{"Your operations, on autopilot"}</h2>
                <p>{"A live view of what a Loopwire pipeline does while your team sleeps."}</p>
            </div>
            <div class="dashboard-panel">
                <div class="dashboard-stats">
                    <div class="stat-card">
                        <span class="stat-value">{leads}</span>
                        <span class="stat-label">{"leads captured"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{booked}</span>
                        <span class="stat-label">{"deals booked"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{"98.6%"}</span>
                        <span class="stat-label">{"handled unattended"}</span>
                    </div>
                </div>
                <div class={classes!("dashboard-task", (*stage >= 1).then_some("active"))}>
                    <span class="task-status">{status}</span>
                    <div class="task-progress">
                        <div
                            class="task-progress-fill"
                            style={format!("width: {}%; transition: width 0.8s ease;", progress)}
                        ></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
