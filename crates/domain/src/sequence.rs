//! Per-entity request sequencing.
//!
//! Every request is tagged with a [`Ticket`] issued for the entity it
//! touches. When a response arrives, only the holder of the most recently
//! issued ticket may write to the store; older responses are stale.
//!
//! Polls that read several entities at once take a [`Watermark`] when they
//! are sent. Their results only apply to entities no request has touched
//! since.

use std::collections::HashMap;

use crate::id::{AlertId, DeviceName};

/// What a request writes to once it completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Device(DeviceName),
    Mode,
    Alert(AlertId),
}

/// Monotonic request number scoped to one [`EntityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    issued: u64,
    settled: u64,
}

/// Sequencer state captured when a poll is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watermark {
    slots: HashMap<EntityKey, Slot>,
}

/// Tracks the latest issued and settled ticket of every entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    slots: HashMap<EntityKey, Slot>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `key`.
    pub fn issue(&mut self, key: EntityKey) -> Ticket {
        let slot = self.slots.entry(key).or_default();
        slot.issued += 1;
        Ticket(slot.issued)
    }

    /// Record that the request holding `ticket` finished, successfully or not.
    ///
    /// Returns `true` when the ticket was current, meaning its response may
    /// be applied.
    pub fn settle(&mut self, key: &EntityKey, ticket: Ticket) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) if slot.issued == ticket.0 => {
                slot.settled = ticket.0;
                true
            }
            _ => false,
        }
    }

    /// Whether the latest request for `key` has not completed yet.
    #[must_use]
    pub fn is_pending(&self, key: &EntityKey) -> bool {
        self.slots
            .get(key)
            .is_some_and(|slot| slot.settled < slot.issued)
    }

    /// Capture the current state before sending a poll.
    #[must_use]
    pub fn watermark(&self) -> Watermark {
        Watermark {
            slots: self.slots.clone(),
        }
    }

    /// Whether a poll sent at `mark` may overwrite `key`.
    ///
    /// It may only if `key` had no request in flight when the poll was sent
    /// and none has been issued or settled since.
    #[must_use]
    pub fn is_quiet_since(&self, key: &EntityKey, mark: &Watermark) -> bool {
        let now = self.slots.get(key).copied().unwrap_or_default();
        let then = mark.slots.get(key).copied().unwrap_or_default();
        now == then && now.settled == now.issued
    }
}
