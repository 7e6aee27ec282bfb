use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, TrySendError},
};
use embassy_usb::driver::EndpointIn;
use steno_common::{debug, keycodes::key_range, warn, KeyState};

use crate::{add_key_bit, del_key_bit, hid::HidWriter};

/// Report id of the NKRO keyboard collection.
pub const REPORT_ID: u8 = 6;
/// Report id, modifier byte then one bit per usage `0x00..=0xff`.
pub const REPORT_LEN: usize = crate::KEY_BITS_SIZE + 2;

pub type Report = [u8; REPORT_LEN];

/// Reports accepted for the host but not yet written to the endpoint.
///
/// A capacity of one means a new report is refused until the previous one has been picked up
/// by the [ReportWriter].
pub type ReportChannel<M, const N: usize> = Channel<M, Report, N>;

fn empty_report() -> Report {
    let mut report = [0; REPORT_LEN];
    report[0] = REPORT_ID;
    report
}

/// Keyboard state as the host sees it.
pub struct HidKeyState<'c, M: RawMutex, const N: usize> {
    report: Report,
    accepted: Report,
    channel: &'c ReportChannel<M, N>,
}

impl<'c, M: RawMutex, const N: usize> HidKeyState<'c, M, N> {
    pub fn new(channel: &'c ReportChannel<M, N>) -> Self {
        Self {
            report: empty_report(),
            accepted: empty_report(),
            channel,
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Release a single key, leaving the rest down.
    pub fn key_up(&mut self, key: u8) {
        if key_range::is_modifier(key) {
            self.report[1] &= !key_range::modifier_bit(key);
            return;
        }
        if key >= key_range::BASIC_MIN {
            del_key_bit(&mut self.report[2..], key);
        }
    }

    fn add_key(&mut self, key: u8) -> bool {
        if key_range::is_modifier(key) {
            let bit = key_range::modifier_bit(key);
            let old = self.report[1];
            self.report[1] |= bit;
            return old & bit == 0;
        }
        if key >= key_range::BASIC_MIN {
            add_key_bit(&mut self.report[2..], key)
        } else {
            false
        }
    }
}

impl<M: RawMutex, const N: usize> KeyState for HidKeyState<'_, M, N> {
    fn key_down(&mut self, key: u8) {
        if !self.add_key(key) {
            debug!("key {} already down", key);
        }
    }

    fn keys_up(&mut self) {
        self.report.iter_mut().skip(1).for_each(|b| *b = 0);
    }

    fn send_if_changed(&mut self) -> bool {
        if self.report == self.accepted {
            return true;
        }
        match self.channel.try_send(self.report) {
            Ok(()) => {
                self.accepted = self.report;
                true
            }
            Err(TrySendError::Full(_)) => false,
        }
    }
}

/// Writes accepted reports to the keyboard's interrupt endpoint.
pub struct ReportWriter<'c, E: EndpointIn, M: RawMutex, const N: usize> {
    hid_writer: HidWriter<E, REPORT_LEN>,
    channel: &'c ReportChannel<M, N>,
}

impl<'c, E: EndpointIn, M: RawMutex, const N: usize> ReportWriter<'c, E, M, N> {
    pub fn new(hid_writer: HidWriter<E, REPORT_LEN>, channel: &'c ReportChannel<M, N>) -> Self {
        Self {
            hid_writer,
            channel,
        }
    }

    /// Wait for the next accepted report and write it.
    ///
    /// A disabled endpoint holds the report until the host enables it again, so no key
    /// change is lost across a bus reset. A report that fails for any other reason is dropped.
    pub async fn write_next(&mut self) {
        let report = self.channel.receive().await;
        if let Err(e) = self.hid_writer.send(&report).await {
            warn!("Failed to send report: {:?}", e);
        }
    }

    pub async fn run(mut self) -> ! {
        self.hid_writer.ready().await;
        loop {
            self.write_next().await;
        }
    }
}

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
