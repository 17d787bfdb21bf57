use super::buffer::BoundedBuffer;
use super::script::{Gating, Script, ScriptEntry};

/// Identifies one playback run. Every scheduled callback carries the token
/// of the run that armed it; a token that no longer matches the player's
/// current run is stale and its event is dropped without touching state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken(u64);

/// Playback lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Complete,
}

/// While running, the single event the player is waiting for next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Waiting {
    /// A delay timer; `advance` is the legal next call.
    Delay,
    /// The in-flight reveal sub-animation; `reveal_done` is the legal
    /// next call.
    Reveal,
}

/// What the driver should do after handing the player an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The event carried a stale token, arrived in the wrong phase, or was
    /// a duplicate. Nothing changed; schedule nothing.
    Stale,
    /// Arm a timer for `delay_ms`, then call `advance(token)`.
    Wait { token: RunToken, delay_ms: u32 },
    /// Start the character reveal for `content`, then call
    /// `reveal_done(token)` when it finishes.
    Reveal { token: RunToken, content: String },
    /// Playback reached the end of the script.
    Done,
}

/// Replays a [`Script`] as a sequence of transcript appends, one gating
/// event at a time. Purely event-driven: the player never touches a clock
/// or a timer, it only tells its driver what to schedule next.
pub struct TimelinePlayer {
    script: Script,
    transcript: BoundedBuffer<ScriptEntry>,
    /// Index of the last appended entry; `None` before the first append.
    cursor: Option<usize>,
    phase: Phase,
    waiting: Waiting,
    run: u64,
}

impl TimelinePlayer {
    pub fn new(capacity: usize) -> Self {
        TimelinePlayer {
            script: Script {
                name: "",
                gating: Gating::DelayFromStart,
                entries: Vec::new(),
            },
            transcript: BoundedBuffer::new(capacity),
            cursor: None,
            phase: Phase::Idle,
            waiting: Waiting::Delay,
            run: 0,
        }
    }

    pub fn token(&self) -> RunToken {
        RunToken(self.run)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// True while a reveal sub-animation is in flight.
    pub fn is_rendering(&self) -> bool {
        self.phase == Phase::Running && self.waiting == Waiting::Reveal
    }

    pub fn transcript(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.transcript.iter()
    }

    pub fn transcript_len(&self) -> usize {
        self.transcript.len()
    }

    /// Kind of the entry whose delay is currently being waited out, if any.
    /// The chat transcript uses this for its typing indicator.
    pub fn pending_kind(&self) -> Option<super::script::EntryKind> {
        if self.phase != Phase::Running || self.waiting != Waiting::Delay {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        self.script.entries.get(next).map(|e| e.kind)
    }

    /// Begins playback of `script`, invalidating any in-flight run first.
    /// An empty script completes immediately with an empty transcript.
    pub fn start(&mut self, script: Script) -> Step {
        self.run += 1;
        self.script = script;
        self.transcript.clear();
        self.cursor = None;
        self.waiting = Waiting::Delay;
        if self.script.is_empty() {
            self.phase = Phase::Complete;
            return Step::Done;
        }
        self.phase = Phase::Running;
        Step::Wait {
            token: self.token(),
            delay_ms: self.script.entries[0].trigger_delay_ms,
        }
    }

    /// Invalidates all outstanding callbacks for the current run. The
    /// transcript is left as-is; no event may mutate state until the next
    /// `start`.
    pub fn cancel(&mut self) {
        self.run += 1;
        self.phase = Phase::Idle;
        self.waiting = Waiting::Delay;
    }

    /// `cancel` followed by `start` on the same script: cursor back to the
    /// first entry, previously buffered entries cleared.
    pub fn restart(&mut self) -> Step {
        let script = self.script.clone();
        self.start(script)
    }

    /// `Complete -> Running` without clearing the transcript. Loop path for
    /// the boot log: the bounded buffer, not a reset, is what caps growth.
    pub fn rewind(&mut self) -> Step {
        if self.phase != Phase::Complete || self.script.is_empty() {
            return Step::Stale;
        }
        self.run += 1;
        self.cursor = None;
        self.phase = Phase::Running;
        self.waiting = Waiting::Delay;
        Step::Wait {
            token: self.token(),
            delay_ms: self.script.entries[0].trigger_delay_ms,
        }
    }

    /// A delay timer fired: append the next entry and report the following
    /// gating condition.
    pub fn advance(&mut self, token: RunToken) -> Step {
        if !self.accepts(token, Waiting::Delay) {
            return Step::Stale;
        }
        let index = self.cursor.map_or(0, |c| c + 1);
        let entry = self.script.entries[index].clone();
        let content = entry.content.clone();
        self.transcript.push(entry);
        self.cursor = Some(index);

        match self.script.gating {
            Gating::AfterPrevious => {
                self.waiting = Waiting::Reveal;
                Step::Reveal {
                    token: self.token(),
                    content,
                }
            }
            Gating::DelayFromStart => self.after_entry(index),
        }
    }

    /// The in-flight reveal finished. Duplicate signals are dropped.
    pub fn reveal_done(&mut self, token: RunToken) -> Step {
        if !self.accepts(token, Waiting::Reveal) {
            return Step::Stale;
        }
        self.waiting = Waiting::Delay;
        let index = self.cursor.unwrap_or(0);
        self.after_entry(index)
    }

    fn accepts(&self, token: RunToken, expected: Waiting) -> bool {
        token == self.token() && self.phase == Phase::Running && self.waiting == expected
    }

    /// Entry `index` is fully on screen; wait for the next one or finish.
    fn after_entry(&mut self, index: usize) -> Step {
        let next = index + 1;
        if next >= self.script.len() {
            self.phase = Phase::Complete;
            return Step::Done;
        }
        let delay_ms = match self.script.gating {
            // Absolute offsets: wait out the gap between consecutive ones.
            Gating::DelayFromStart => self.script.entries[next]
                .trigger_delay_ms
                .saturating_sub(self.script.entries[index].trigger_delay_ms),
            Gating::AfterPrevious => self.script.entries[next].trigger_delay_ms,
        };
        Step::Wait {
            token: self.token(),
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::script::EntryKind;

    fn chat_script() -> Script {
        Script::new(
            "demo",
            Gating::DelayFromStart,
            vec![
                (EntryKind::Secondary, "Hi", 500),
                (EntryKind::System, "Checking...", 1500),
                (EntryKind::Primary, "Done.", 3000),
            ],
        )
    }

    fn boot_script() -> Script {
        Script::new(
            "boot",
            Gating::AfterPrevious,
            vec![
                (EntryKind::System, "init core", 0),
                (EntryKind::System, "load agents", 120),
                (EntryKind::System, "ready", 200),
            ],
        )
    }

    fn contents(player: &TimelinePlayer) -> Vec<&str> {
        player.transcript().map(|e| e.content.as_str()).collect()
    }

    #[test]
    fn delay_gated_playback_appends_in_order_with_offset_gaps() {
        let mut player = TimelinePlayer::new(16);

        // t=0: first wait is the first absolute offset.
        let step = player.start(chat_script());
        let token = match step {
            Step::Wait { token, delay_ms } => {
                assert_eq!(delay_ms, 500);
                token
            }
            other => panic!("unexpected step {other:?}"),
        };
        // t=400 equivalent: nothing fired yet, buffer empty.
        assert!(player.transcript_len() == 0);

        // t=500: entry 1 lands, next gap is 1500-500.
        match player.advance(token) {
            Step::Wait { delay_ms, .. } => assert_eq!(delay_ms, 1000),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(contents(&player), vec!["Hi"]);

        // t=1500: entry 2, gap 3000-1500.
        match player.advance(token) {
            Step::Wait { delay_ms, .. } => assert_eq!(delay_ms, 1500),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(contents(&player), vec!["Hi", "Checking..."]);

        // t=3000: last entry completes the run.
        assert_eq!(player.advance(token), Step::Done);
        assert_eq!(contents(&player), vec!["Hi", "Checking...", "Done."]);
        assert_eq!(player.phase(), Phase::Complete);
        assert_eq!(player.cursor(), Some(2));
    }

    #[test]
    fn chained_playback_interleaves_reveals() {
        let mut player = TimelinePlayer::new(16);
        let token = match player.start(boot_script()) {
            Step::Wait { token, delay_ms } => {
                assert_eq!(delay_ms, 0);
                token
            }
            other => panic!("unexpected step {other:?}"),
        };

        match player.advance(token) {
            Step::Reveal { content, .. } => assert_eq!(content, "init core"),
            other => panic!("unexpected step {other:?}"),
        }
        assert!(player.is_rendering());

        // Pause before the next line is its own relative delay.
        match player.reveal_done(token) {
            Step::Wait { delay_ms, .. } => assert_eq!(delay_ms, 120),
            other => panic!("unexpected step {other:?}"),
        }
        assert!(!player.is_rendering());

        match player.advance(token) {
            Step::Reveal { content, .. } => assert_eq!(content, "load agents"),
            other => panic!("unexpected step {other:?}"),
        }
        match player.reveal_done(token) {
            Step::Wait { delay_ms, .. } => assert_eq!(delay_ms, 200),
            other => panic!("unexpected step {other:?}"),
        }
        match player.advance(token) {
            Step::Reveal { content, .. } => assert_eq!(content, "ready"),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(player.reveal_done(token), Step::Done);
        assert_eq!(player.phase(), Phase::Complete);
        assert_eq!(contents(&player), vec!["init core", "load agents", "ready"]);
    }

    #[test]
    fn empty_script_completes_immediately() {
        let mut player = TimelinePlayer::new(4);
        let step = player.start(Script::new("empty", Gating::DelayFromStart, vec![]));
        assert_eq!(step, Step::Done);
        assert_eq!(player.phase(), Phase::Complete);
        assert_eq!(player.transcript_len(), 0);
    }

    #[test]
    fn stale_token_never_mutates_state() {
        let mut player = TimelinePlayer::new(16);
        let old = match player.start(chat_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        // Script switch mid-delay: the abandoned run's timer fires late.
        let fresh = match player.start(boot_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        assert_eq!(player.advance(old), Step::Stale);
        assert_eq!(player.transcript_len(), 0);

        // The new script plays untainted by the abandoned one.
        match player.advance(fresh) {
            Step::Reveal { content, .. } => assert_eq!(content, "init core"),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(contents(&player), vec!["init core"]);
    }

    #[test]
    fn cancel_invalidates_outstanding_timers() {
        let mut player = TimelinePlayer::new(16);
        let token = match player.start(chat_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        assert_eq!(player.advance(token), Step::Wait { token, delay_ms: 1000 });
        player.cancel();
        assert_eq!(player.phase(), Phase::Idle);
        // The armed timer fires after cancellation: dropped, buffer frozen.
        assert_eq!(player.advance(token), Step::Stale);
        assert_eq!(contents(&player), vec!["Hi"]);
    }

    #[test]
    fn restart_clears_transcript_and_resets_cursor() {
        let mut player = TimelinePlayer::new(16);
        let token = match player.start(chat_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        player.advance(token);
        player.advance(token);
        assert_eq!(player.transcript_len(), 2);

        match player.restart() {
            Step::Wait { delay_ms, .. } => assert_eq!(delay_ms, 500),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(player.transcript_len(), 0);
        assert_eq!(player.cursor(), None);
        assert_eq!(player.phase(), Phase::Running);
    }

    #[test]
    fn duplicate_reveal_completion_is_dropped() {
        let mut player = TimelinePlayer::new(16);
        let token = match player.start(boot_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        player.advance(token);
        let first = player.reveal_done(token);
        assert!(matches!(first, Step::Wait { .. }));
        // Second completion signal for the same entry.
        assert_eq!(player.reveal_done(token), Step::Stale);
    }

    #[test]
    fn reveal_done_in_delay_mode_is_rejected() {
        let mut player = TimelinePlayer::new(16);
        let token = match player.start(chat_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        assert_eq!(player.reveal_done(token), Step::Stale);
    }

    #[test]
    fn rewind_loops_without_clearing_and_eviction_caps_growth() {
        let mut player = TimelinePlayer::new(4);
        let mut token = match player.start(boot_script()) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        // Play a full pass.
        loop {
            match player.advance(token) {
                Step::Reveal { .. } => {}
                other => panic!("unexpected step {other:?}"),
            }
            match player.reveal_done(token) {
                Step::Wait { .. } => {}
                Step::Done => break,
                other => panic!("unexpected step {other:?}"),
            }
        }
        assert_eq!(player.transcript_len(), 3);

        // Loop: transcript carries over and the second pass evicts.
        token = match player.rewind() {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        loop {
            match player.advance(token) {
                Step::Reveal { .. } => {}
                other => panic!("unexpected step {other:?}"),
            }
            match player.reveal_done(token) {
                Step::Wait { .. } => {}
                Step::Done => break,
                other => panic!("unexpected step {other:?}"),
            }
        }
        assert_eq!(player.transcript_len(), 4);
        assert_eq!(
            contents(&player),
            vec!["ready", "init core", "load agents", "ready"]
        );
    }

    #[test]
    fn rewind_outside_complete_is_rejected() {
        let mut player = TimelinePlayer::new(4);
        assert_eq!(player.rewind(), Step::Stale);
        player.start(boot_script());
        assert_eq!(player.rewind(), Step::Stale);
    }

    #[test]
    fn eviction_during_one_long_pass_keeps_newest() {
        let mut player = TimelinePlayer::new(2);
        let script = Script::new(
            "long",
            Gating::DelayFromStart,
            vec![
                (EntryKind::System, "a", 0),
                (EntryKind::System, "b", 10),
                (EntryKind::System, "c", 20),
            ],
        );
        let token = match player.start(script) {
            Step::Wait { token, .. } => token,
            other => panic!("unexpected step {other:?}"),
        };
        player.advance(token);
        player.advance(token);
        player.advance(token);
        assert_eq!(contents(&player), vec!["b", "c"]);
    }
}
