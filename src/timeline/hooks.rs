use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::player::{Phase, Step, TimelinePlayer};
use super::script::{EntryKind, Script, ScriptEntry};
use super::typewriter::Typewriter;

/// Tuning for one timeline host.
#[derive(Clone, PartialEq)]
pub struct TimelineOptions {
    /// Transcript capacity; oldest entries are evicted past this.
    pub capacity: usize,
    /// Characters revealed per typewriter tick (chained scripts only).
    pub chars_per_tick: usize,
    /// Typewriter tick interval in ms.
    pub tick_ms: u32,
    /// Add a 100-400ms randomized pause on top of each wait, so chained
    /// playback doesn't read as mechanical.
    pub jitter: bool,
    /// Replay forever: after completion, wait this long and rewind without
    /// clearing the transcript.
    pub loop_pause_ms: Option<u32>,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        TimelineOptions {
            capacity: 32,
            chars_per_tick: 2,
            tick_ms: 24,
            jitter: false,
            loop_pause_ms: None,
        }
    }
}

/// Read-only projection handed to the hosting component each render.
pub struct TimelineHandle {
    /// Transcript snapshot, oldest first. While a reveal is in flight its
    /// entry is the last one here; render `partial` in place of its content.
    pub entries: Vec<ScriptEntry>,
    /// Visible prefix of the entry currently being revealed.
    pub partial: Option<String>,
    pub is_rendering: bool,
    /// Kind of the entry whose delay is being waited out (typing indicator).
    pub pending_kind: Option<EntryKind>,
    pub complete: bool,
    pub restart: Callback<()>,
}

struct Driver {
    player: RefCell<TimelinePlayer>,
    typewriter: RefCell<Option<Typewriter>>,
    timeout: RefCell<Option<Timeout>>,
    interval: RefCell<Option<Interval>>,
    options: TimelineOptions,
    on_complete: RefCell<Option<Callback<()>>>,
    revision: Cell<u64>,
    notify: UseStateSetter<u64>,
}

impl Driver {
    fn new(options: TimelineOptions, notify: UseStateSetter<u64>) -> Self {
        Driver {
            player: RefCell::new(TimelinePlayer::new(options.capacity)),
            typewriter: RefCell::new(None),
            timeout: RefCell::new(None),
            interval: RefCell::new(None),
            options,
            on_complete: RefCell::new(None),
            revision: Cell::new(0),
            notify,
        }
    }

    /// Queues a re-render of the host component.
    fn bump(&self) {
        let next = self.revision.get() + 1;
        self.revision.set(next);
        self.notify.set(next);
    }

    /// Drops every live timer handle. Must not be called from inside a
    /// timer callback; those paths defer through a zero-delay `Timeout`
    /// instead so no closure is destroyed while it is executing.
    fn halt(&self) {
        self.timeout.borrow_mut().take();
        self.interval.borrow_mut().take();
        self.typewriter.borrow_mut().take();
    }
}

fn jitter_ms() -> u32 {
    100 + (web_sys::js_sys::Math::random() * 300.0) as u32
}

/// Schedules whatever the player asked for next. Each armed callback hands
/// its event back to the player, which drops it if the run token went stale
/// in the meantime.
fn schedule(driver: &Rc<Driver>, step: Step) {
    match step {
        Step::Stale => {}
        Step::Wait { token, delay_ms } => {
            let delay = if driver.options.jitter {
                delay_ms + jitter_ms()
            } else {
                delay_ms
            };
            let d = driver.clone();
            let handle = Timeout::new(delay, move || {
                let step = d.player.borrow_mut().advance(token);
                d.bump();
                schedule(&d, step);
            });
            driver.timeout.borrow_mut().replace(handle);
        }
        Step::Reveal { token, content } => {
            driver
                .typewriter
                .borrow_mut()
                .replace(Typewriter::new(content, driver.options.chars_per_tick));
            let d = driver.clone();
            let handle = Interval::new(driver.options.tick_ms, move || {
                if d.player.borrow().token() != token {
                    // Abandoned reveal; the next run replaces this handle.
                    return;
                }
                let done = d
                    .typewriter
                    .borrow_mut()
                    .as_mut()
                    .map(Typewriter::tick)
                    .unwrap_or(false);
                d.bump();
                if done {
                    // Tear the interval down from outside its own closure.
                    let d2 = d.clone();
                    let finish = Timeout::new(0, move || {
                        d2.interval.borrow_mut().take();
                        let step = d2.player.borrow_mut().reveal_done(token);
                        d2.bump();
                        schedule(&d2, step);
                    });
                    d.timeout.borrow_mut().replace(finish);
                }
            });
            driver.interval.borrow_mut().replace(handle);
        }
        Step::Done => {
            if let Some(on_complete) = driver.on_complete.borrow().as_ref() {
                on_complete.emit(());
            }
            if let Some(pause) = driver.options.loop_pause_ms {
                let d = driver.clone();
                let token = d.player.borrow().token();
                spawn_local(async move {
                    TimeoutFuture::new(pause).await;
                    let step = {
                        let mut player = d.player.borrow_mut();
                        if player.token() != token || player.phase() != Phase::Complete {
                            Step::Stale
                        } else {
                            player.rewind()
                        }
                    };
                    d.bump();
                    schedule(&d, step);
                });
            }
        }
    }
}

/// Drives a [`Script`] through a [`TimelinePlayer`] with real timers.
///
/// Playback starts whenever `active` is true and restarts from scratch when
/// `script` changes; the old run's timers are dropped and its token
/// invalidated before the new run arms anything. Everything is torn down on
/// unmount, so no timer outlives the host.
#[hook]
pub fn use_timeline(
    script: Script,
    options: TimelineOptions,
    active: bool,
    on_complete: Option<Callback<()>>,
) -> TimelineHandle {
    let revision = use_state(|| 0u64);
    let driver = use_memo((), {
        let notify = revision.setter();
        move |_| Rc::new(Driver::new(options, notify))
    });
    let driver = (*driver).clone();

    driver.on_complete.replace(on_complete);

    {
        let driver = driver.clone();
        use_effect_with(
            (script, active),
            move |(script, active): &(Script, bool)| {
                if *active {
                    debug!("timeline '{}' starting", script.name);
                    driver.halt();
                    let step = driver.player.borrow_mut().start(script.clone());
                    driver.bump();
                    schedule(&driver, step);
                }
                move || {
                    debug!("timeline teardown");
                    driver.player.borrow_mut().cancel();
                    driver.halt();
                }
            },
        );
    }

    let restart = {
        let driver = driver.clone();
        Callback::from(move |_| {
            driver.halt();
            let step = driver.player.borrow_mut().restart();
            driver.bump();
            schedule(&driver, step);
        })
    };

    let player = driver.player.borrow();
    let is_rendering = player.is_rendering();
    let partial = if is_rendering {
        driver
            .typewriter
            .borrow()
            .as_ref()
            .map(|tw| tw.visible().to_string())
    } else {
        None
    };

    TimelineHandle {
        entries: player.transcript().cloned().collect(),
        partial,
        is_rendering,
        pending_kind: player.pending_kind(),
        complete: player.phase() == Phase::Complete,
        restart,
    }
}
