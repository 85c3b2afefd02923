//! In-memory event log that doubles as a render sink.

use puzzle_core::{CellIndex, Color, SolvedWord};

use super::types::{PuzzleEvent, Topic};
use crate::api::RenderSink;

/// Records every render call as a [`PuzzleEvent`], in delivery order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PuzzleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PuzzleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on `topic`, in delivery order.
    pub fn of_topic(&self, topic: Topic) -> impl Iterator<Item = &PuzzleEvent> + '_ {
        self.events.iter().filter(move |event| event.topic() == topic)
    }

    /// Takes every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn push(&mut self, event: PuzzleEvent) {
        self.events.push(event);
    }
}

impl RenderSink for EventLog {
    fn set_highlight(&mut self, cell: CellIndex, on: bool, tint: Option<Color>) {
        let event = if on {
            PuzzleEvent::Highlighted { cell, tint }
        } else {
            PuzzleEvent::Cleared { cell }
        };
        self.push(event);
    }

    fn mark_solved(&mut self, solved: &SolvedWord) {
        self.push(PuzzleEvent::WordSolved {
            word: solved.word,
            color: solved.color,
            background: solved.background.clone(),
            cells: solved.cells.clone(),
        });
    }

    fn finished(&mut self) {
        self.push(PuzzleEvent::GameFinished);
    }
}
