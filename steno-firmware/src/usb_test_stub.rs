extern crate std;
use embassy_usb::driver::{
    Endpoint, EndpointAddress, EndpointError, EndpointIn, EndpointInfo, EndpointType,
};
use std::{
    sync::{Arc, Mutex},
    vec::Vec,
};

pub type Messages = Arc<Mutex<Vec<Vec<u8>>>>;

pub struct MyEndpointIn {
    pub messages: Messages,
    pub info: EndpointInfo,
}
impl MyEndpointIn {
    pub fn with_max_packet_size(max_packet_size: u16) -> Self {
        let mut ep = Self::default();
        ep.info.max_packet_size = max_packet_size;
        ep
    }
}
impl Endpoint for MyEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}
impl EndpointIn for MyEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        self.messages.lock().unwrap().push(Vec::from(buf));
        Ok(())
    }
}
impl Default for MyEndpointIn {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            info: EndpointInfo {
                addr: EndpointAddress::from(0x81),
                ep_type: EndpointType::Interrupt,
                max_packet_size: 64,
                interval_ms: 1,
            },
        }
    }
}

/// Endpoint whose writes fail with `error` at first.
///
/// A `Disabled` error lasts until the endpoint is waited on with `wait_enabled`; any other
/// error fails a single write.
pub struct FlakyEndpointIn {
    pub ep: MyEndpointIn,
    pub error: Option<EndpointError>,
}
impl FlakyEndpointIn {
    pub fn failing(error: EndpointError) -> Self {
        Self {
            ep: MyEndpointIn::default(),
            error: Some(error),
        }
    }
}
impl Endpoint for FlakyEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.ep.info
    }

    async fn wait_enabled(&mut self) {
        if self.error == Some(EndpointError::Disabled) {
            self.error = None;
        }
    }
}
impl EndpointIn for FlakyEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        match self.error {
            Some(err) => {
                if err != EndpointError::Disabled {
                    self.error = None;
                }
                Err(err)
            }
            None => self.ep.write(buf).await,
        }
    }
}
