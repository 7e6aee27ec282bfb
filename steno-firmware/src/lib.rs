#![no_std]
pub mod clock;
pub mod hid;
pub mod key_reporter;
pub mod typist;

pub use steno_common::{key_encoder::Action, Clock, KeyState, Scheduler};

pub(crate) const KEY_BITS_SIZE: usize = 32;

/// Set the bit for `kc` in a usage bitmap. Returns false if it was already set.
fn add_key_bit(keys_down: &mut [u8], kc: u8) -> bool {
    let i = (kc >> 3) as usize;
    let bp = 1 << (kc & 7);
    let old = keys_down[i];
    keys_down[i] |= bp;
    old & bp == 0
}

/// Clear the bit for `kc` in a usage bitmap. Returns false if it was already clear.
fn del_key_bit(keys_down: &mut [u8], kc: u8) -> bool {
    let i = (kc >> 3) as usize;
    let bp = 1 << (kc & 7);
    let old = keys_down[i];
    keys_down[i] &= !bp;
    old & bp != 0
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
