/// Who a script entry belongs to, as far as the transcript is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// The agency/assistant side of a conversation, or a normal log line.
    Primary,
    /// The visitor/customer side of a conversation.
    Secondary,
    /// Status lines, separators, boot diagnostics.
    System,
}

impl EntryKind {
    /// CSS class used by the transcript renderers.
    pub fn css_class(&self) -> &'static str {
        match self {
            EntryKind::Primary => "entry-primary",
            EntryKind::Secondary => "entry-secondary",
            EntryKind::System => "entry-system",
        }
    }
}

/// One unit of a script: a message or log line plus its timing metadata.
///
/// `trigger_delay_ms` is an absolute offset from playback start for
/// `Gating::DelayFromStart` scripts, and a relative pause after the previous
/// entry's reveal for `Gating::AfterPrevious` scripts.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptEntry {
    pub id: u32,
    pub kind: EntryKind,
    pub content: String,
    pub trigger_delay_ms: u32,
}

/// How entries of a script are gated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gating {
    /// Each entry appears at its own absolute offset from t=0.
    DelayFromStart,
    /// Each entry appears after the previous entry finished revealing,
    /// plus its own relative pause.
    AfterPrevious,
}

/// Named, ordered, immutable sequence of entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    pub name: &'static str,
    pub gating: Gating,
    pub entries: Vec<ScriptEntry>,
}

impl Script {
    /// Builds a script from `(kind, content, trigger_delay_ms)` triples,
    /// assigning sequential ids.
    pub fn new(
        name: &'static str,
        gating: Gating,
        lines: impl IntoIterator<Item = (EntryKind, &'static str, u32)>,
    ) -> Self {
        let entries = lines
            .into_iter()
            .enumerate()
            .map(|(i, (kind, content, trigger_delay_ms))| ScriptEntry {
                id: i as u32 + 1,
                kind,
                content: content.to_string(),
                trigger_delay_ms,
            })
            .collect();
        Script {
            name,
            gating,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let script = Script::new(
            "demo",
            Gating::DelayFromStart,
            vec![
                (EntryKind::Secondary, "Hi", 500),
                (EntryKind::System, "Checking...", 1500),
                (EntryKind::Primary, "Done.", 3000),
            ],
        );
        let ids: Vec<u32> = script.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(script.len(), 3);
    }
}
