use super::{PointerEvent, PointerProvider};

/// Replays a fixed event list, releasing each event once its timestamp is due.
#[derive(Debug, Clone)]
pub struct ScriptedPointer<'a> {
    events: &'a [PointerEvent],
    cursor: usize,
}

impl<'a> ScriptedPointer<'a> {
    pub const fn new(events: &'a [PointerEvent]) -> Self {
        Self { events, cursor: 0 }
    }

    pub const fn empty() -> Self {
        Self::new(&[])
    }
}

impl PointerProvider for ScriptedPointer<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<PointerEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        if event.time_ms > now_ms {
            return Ok(None);
        }
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}
