use crate::{Category, Die, Hand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    TurnStarted {
        turn: usize,
        categories_left: usize,
    },
    DiceRolled {
        hand: Hand,
    },
    DiceRerolled {
        discarded: Vec<Die>,
        hand: Hand,
        rerolls_left: u8,
    },
    CategoryScored {
        category: Category,
        score: u32,
        total: u32,
    },
    SessionCompleted {
        total: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        log::debug!("event: {:?}", event);
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
