#![no_std]
pub mod clock;
pub mod key_encoder;
pub mod keycodes;
pub mod ring_buffer;
pub mod scheduler;

#[macro_use]
mod macros;

#[cfg(feature = "log")]
#[doc(hidden)]
pub use log as __log;

pub use clock::Clock;
pub use key_encoder::Action;
pub use scheduler::{KeyState, Scheduler};
