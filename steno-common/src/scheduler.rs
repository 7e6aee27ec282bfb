//! Paces queued key actions out to the host.
//!
//! [Scheduler::poll] is called once per iteration of the main loop. Each call applies at most
//! one queued action to the host key state and submits it. When the host cannot take the
//! report yet the scheduler waits, retrying the same submission on later ticks, and only
//! moves on to the next action once the host has accepted it. The queue therefore only ever
//! moves forward and a key-down is never merged with the reset that follows it.

use crate::{
    clock::{reached, Clock},
    key_encoder::{encode_text, Action},
    ring_buffer::RingBuffer,
};

/// How long to wait for the host to accept a report before logging a stall and re-arming.
pub const KEY_TIMEOUT_MS: u32 = 50;

pub const DEFAULT_CAPACITY: usize = 1024;

/// The host facing key state.
pub trait KeyState {
    /// Mark `key` as down, leaving every other key as it is.
    fn key_down(&mut self, key: u8);

    /// Release every key, modifiers included.
    fn keys_up(&mut self);

    /// Submit the current state if it differs from the last accepted one.
    ///
    /// Returns `true` if the host accepted it (or there was nothing to send) and `false` if it
    /// must be retried later.
    fn send_if_changed(&mut self) -> bool;
}

impl<K: KeyState + ?Sized> KeyState for &mut K {
    fn key_down(&mut self, key: u8) {
        (**self).key_down(key)
    }

    fn keys_up(&mut self) {
        (**self).keys_up()
    }

    fn send_if_changed(&mut self) -> bool {
        (**self).send_if_changed()
    }
}

pub struct Scheduler<C, K, const N: usize = DEFAULT_CAPACITY> {
    clock: C,
    keys: K,
    queue: RingBuffer<Action, N>,
    deadline: Option<u32>,
    timeout_ms: u32,
}

impl<C: Clock, K: KeyState, const N: usize> Scheduler<C, K, N> {
    pub fn new(clock: C, keys: K) -> Self {
        Self {
            clock,
            keys,
            queue: RingBuffer::new(),
            deadline: None,
            timeout_ms: KEY_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Queue the actions that type `text`.
    ///
    /// If the queue overflows the oldest unsent actions are dropped; this can cut earlier text
    /// short while the host is not reading.
    pub fn enqueue_text(&mut self, text: &str) {
        let evicted = encode_text(text, &mut self.queue);
        if evicted != 0 {
            crate::warn!("key queue full; dropped {} oldest actions", evicted);
        }
    }

    pub fn enqueue_action(&mut self, action: Action) {
        if self.queue.push(action).is_some() {
            crate::warn!("key queue full; dropped oldest action");
        }
    }

    /// Advance by one tick.
    pub fn poll(&mut self) {
        let now = self.clock.now_ms();

        if let Some(deadline) = self.deadline {
            if self.keys.send_if_changed() {
                self.deadline = None;
            } else {
                if reached(now, deadline) {
                    crate::warn!("host has not read keys for {}ms", self.timeout_ms);
                    self.deadline = Some(now.wrapping_add(self.timeout_ms));
                }
                return;
            }
        }

        let Some(action) = self.queue.pop() else {
            return;
        };

        match action {
            Action::Reset => self.keys.keys_up(),
            Action::Key(key) => self.keys.key_down(key),
        }

        if !self.keys.send_if_changed() {
            let deadline = now.wrapping_add(self.timeout_ms);
            crate::debug!("host busy; waiting until {}", deadline);
            self.deadline = Some(deadline);
        }
    }

    /// Nothing queued and nothing waiting to be accepted.
    pub fn is_idle(&self) -> bool {
        self.deadline.is_none() && self.queue.is_empty()
    }

    /// A submission was rejected and has not been accepted yet.
    pub fn is_waiting(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u32> {
        self.deadline
    }

    /// Number of queued actions not yet applied.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of actions lost to queue overflow.
    pub fn evicted(&self) -> u32 {
        self.queue.evicted()
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod test;
