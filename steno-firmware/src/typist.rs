//! Embassy task wrapper around [Scheduler].
//!
//! Text to type arrives as `&'static str` on a [TextChannel]. The typist polls its scheduler
//! once per loop iteration and yields in between so the [ReportWriter](crate::key_reporter::ReportWriter)
//! can drain accepted reports. While there is nothing to type it sleeps on the channel instead
//! of spinning.

use embassy_futures::yield_now;
use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};
use steno_common::{Clock, KeyState, Scheduler};

pub type TextChannel<M, const N: usize> = Channel<M, &'static str, N>;

pub struct Typist<'t, C: Clock, K: KeyState, M: RawMutex, const CAP: usize, const N: usize> {
    scheduler: Scheduler<C, K, CAP>,
    texts: &'t TextChannel<M, N>,
}

impl<'t, C: Clock, K: KeyState, M: RawMutex, const CAP: usize, const N: usize>
    Typist<'t, C, K, M, CAP, N>
{
    pub fn new(scheduler: Scheduler<C, K, CAP>, texts: &'t TextChannel<M, N>) -> Self {
        Self { scheduler, texts }
    }

    pub fn scheduler(&self) -> &Scheduler<C, K, CAP> {
        &self.scheduler
    }

    /// Take any waiting text, then advance the scheduler by one tick.
    ///
    /// Waits for text when there is nothing left to send.
    pub async fn step(&mut self) {
        while let Ok(text) = self.texts.try_receive() {
            self.scheduler.enqueue_text(text);
        }
        if self.scheduler.is_idle() {
            let text = self.texts.receive().await;
            self.scheduler.enqueue_text(text);
        }
        self.scheduler.poll();
        yield_now().await;
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.step().await;
        }
    }
}

#[cfg(test)]
#[path = "typist_test.rs"]
mod test;
