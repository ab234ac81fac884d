//! Terminal bell haptics adapter
//!
//! Desktops have no vibration motor; ringing the terminal bell gets the
//! same "nudge" through the terminal's own bell or urgency hint.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::application::ports::{Haptics, HapticsError};

const BELL: &[u8] = b"\x07";

/// Haptics that writes the BEL control character
pub struct BellHaptics<W: Write = io::Stderr> {
    out: RefCell<W>,
}

impl BellHaptics {
    /// Ring the bell on stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for BellHaptics {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BellHaptics<W> {
    /// Ring the bell on a custom writer
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Haptics for BellHaptics<W> {
    fn pulse(&self) -> Result<(), HapticsError> {
        let mut out = self.out.borrow_mut();
        out.write_all(BELL)
            .and_then(|_| out.flush())
            .map_err(|e| HapticsError::PulseFailed(e.to_string()))
    }
}
