//! Runs the scheduler against a scripted host on a virtual clock.
//!
//! The host rejects the submission attempts listed in [SimOptions::reject] (counted from 1)
//! and accepts every other one, which makes it easy to see how the scheduler waits and
//! retries.

use std::{cell::Cell, collections::HashSet, fmt};

use anyhow::{bail, Result};
use steno_common::{scheduler::KEY_TIMEOUT_MS, Action, Clock, KeyState, Scheduler};

use crate::keycodes::action_name;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub tick_ms: u32,
    pub timeout_ms: u32,
    pub reject: Vec<usize>,
    pub max_ticks: u32,
    pub start_ms: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            tick_ms: 1,
            timeout_ms: KEY_TIMEOUT_MS,
            reject: Vec::new(),
            max_ticks: 100_000,
            start_ms: 0,
        }
    }
}

#[derive(Default)]
pub struct SimClock(Cell<u32>);

impl SimClock {
    pub fn at(ms: u32) -> Self {
        Self(Cell::new(ms))
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// A report the scheduler tried to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub at: u32,
    pub attempt: usize,
    pub keys: Vec<u8>,
    pub accepted: bool,
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self
            .keys
            .iter()
            .map(|k| action_name(Action::Key(*k)))
            .collect();
        write!(
            f,
            "{:>8}ms #{:<4} {} [{}]",
            self.at,
            self.attempt,
            if self.accepted { "sent    " } else { "rejected" },
            keys.join(" ")
        )
    }
}

struct SimHost<'c> {
    clock: &'c SimClock,
    down: Vec<u8>,
    accepted: Vec<u8>,
    reject: HashSet<usize>,
    submissions: Vec<Submission>,
}

impl KeyState for SimHost<'_> {
    fn key_down(&mut self, key: u8) {
        if !self.down.contains(&key) {
            self.down.push(key);
        }
    }

    fn keys_up(&mut self) {
        self.down.clear();
    }

    fn send_if_changed(&mut self) -> bool {
        if self.down == self.accepted {
            return true;
        }
        let attempt = self.submissions.len() + 1;
        let accepted = !self.reject.contains(&attempt);
        self.submissions.push(Submission {
            at: self.clock.now_ms(),
            attempt,
            keys: self.down.clone(),
            accepted,
        });
        if accepted {
            self.accepted = self.down.clone();
        }
        accepted
    }
}

#[derive(Debug)]
pub struct Simulation {
    pub submissions: Vec<Submission>,
    pub ticks: u32,
    pub evicted: u32,
}

impl Simulation {
    pub fn accepted(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(|s| s.accepted)
    }
}

/// Type `text` and tick the scheduler until it has nothing left to do.
pub fn simulate(text: &str, opts: &SimOptions) -> Result<Simulation> {
    if opts.tick_ms == 0 {
        bail!("tick must be at least 1ms");
    }
    let clock = SimClock::at(opts.start_ms);
    let mut host = SimHost {
        clock: &clock,
        down: Vec::new(),
        accepted: Vec::new(),
        reject: opts.reject.iter().copied().collect(),
        submissions: Vec::new(),
    };

    let mut scheduler: Scheduler<_, _> =
        Scheduler::new(&clock, &mut host).with_timeout(opts.timeout_ms);
    scheduler.enqueue_text(text);

    let mut ticks = 0;
    while !scheduler.is_idle() {
        if ticks >= opts.max_ticks {
            bail!(
                "still {} actions queued after {} ticks",
                scheduler.pending(),
                ticks
            );
        }
        scheduler.poll();
        clock.advance(opts.tick_ms);
        ticks += 1;
    }
    let evicted = scheduler.evicted();
    drop(scheduler);

    log::info!("typed {:?} in {} ticks", text, ticks);

    Ok(Simulation {
        submissions: host.submissions,
        ticks,
        evicted,
    })
}

#[cfg(test)]
#[path = "simulate_test.rs"]
mod test;
