use embassy_usb::driver::{Endpoint, EndpointError, EndpointIn};
use steno_common::debug;

/// Sends fixed size reports of at most `N` bytes on an interrupt IN endpoint.
pub struct HidWriter<E: EndpointIn, const N: usize> {
    ep_in: E,
}

impl<E: EndpointIn, const N: usize> HidWriter<E, N> {
    pub fn new(ep_in: E) -> Self {
        Self { ep_in }
    }

    /// Waits for the USB host to enable the endpoint.
    pub async fn ready(&mut self) {
        self.ep_in.wait_enabled().await;
    }

    /// Writes `report` as max packet sized pieces. A report shorter than `N` that ends on a
    /// packet boundary is terminated with a zero length packet.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        assert!(report.len() <= N);

        let packet = usize::from(self.ep_in.info().max_packet_size);
        let short = report.len() < N && report.len() % packet == 0;
        let terminator = short.then_some(&[] as &[u8]);
        for piece in report.chunks(packet).chain(terminator) {
            self.ep_in.write(piece).await?;
        }
        Ok(())
    }

    /// Writes `report`, waiting out any period the endpoint is disabled (bus reset or suspend)
    /// and then writing the whole report again. Other errors are returned.
    pub async fn send(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        loop {
            match self.write(report).await {
                Err(EndpointError::Disabled) => {
                    debug!("endpoint disabled; holding report");
                    self.ready().await;
                }
                res => return res,
            }
        }
    }
}
