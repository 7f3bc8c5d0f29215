//! UI requests queued for the game loop.
//! The front end pushes, the loop drains once per tick, so each request fires exactly once.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// "Start Game" pressed on the start screen.
    StartRequested,
    /// "Play Again" / "Try Again" pressed on an end screen.
    RestartRequested,
}

#[derive(Debug, Default)]
pub struct GameEvents {
    queue: VecDeque<GameEvent>,
}

impl GameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }

    pub fn request_start(&mut self) {
        self.push(GameEvent::StartRequested);
    }

    pub fn request_restart(&mut self) {
        self.push(GameEvent::RestartRequested);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
