//! Write-and-confirm protocol for clipboard transfers.

use std::time::Duration;
use tracing::{debug, info, warn};

use super::backend::{ClipboardBackend, Verification};
use super::error::{BackendError, TransferError};
use crate::pipeline::Transferable;

/// Default pause between writing the sentinel and reading it back.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Default sentinel written by the self-test.
pub const DEFAULT_SENTINEL: &str = "clipboard_test";

/// Result of a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Verified,
    /// The write succeeded but readback was unavailable.
    WrittenUnverifiable,
    Failed(TransferError),
}

/// Performs clipboard writes through a backend and confirms them
/// according to the backend's [`Verification`] policy.
pub struct Verifier<'a> {
    backend: &'a mut dyn ClipboardBackend,
    settle_delay: Duration,
    sentinel: &'a str,
}

impl<'a> Verifier<'a> {
    pub fn new(
        backend: &'a mut dyn ClipboardBackend,
        settle_delay: Duration,
        sentinel: &'a str,
    ) -> Self {
        Self {
            backend,
            settle_delay,
            sentinel,
        }
    }

    /// Check that the clipboard accepts writes, using the sentinel.
    ///
    /// Under [`Verification::SelfTest`] the sentinel is read back after the
    /// settle delay. A backend that cannot read back yields
    /// `WrittenUnverifiable`; a readback that differs fails.
    pub fn preflight(&mut self) -> TransferOutcome {
        if let Err(err) = self.backend.set_text(self.sentinel) {
            warn!(backend = self.backend.name(), %err, "clipboard pre-flight write failed");
            return TransferOutcome::Failed(TransferError::SetFailed(err));
        }

        match self.backend.verification() {
            Verification::TrustWrite => TransferOutcome::Verified,
            Verification::SelfTest => self.self_test(),
        }
    }

    fn self_test(&mut self) -> TransferOutcome {
        std::thread::sleep(self.settle_delay);

        match self.backend.get_text() {
            Ok(found) if found.trim() == self.sentinel.trim() => {
                debug!(backend = self.backend.name(), "clipboard self-test passed");
                TransferOutcome::Verified
            }
            Ok(found) => {
                warn!(
                    backend = self.backend.name(),
                    expected = self.sentinel,
                    found = %found.trim(),
                    "clipboard self-test mismatch"
                );
                TransferOutcome::Failed(TransferError::VerificationMismatch)
            }
            Err(BackendError::NotSupported) => {
                info!(backend = self.backend.name(), "clipboard readback not supported");
                TransferOutcome::WrittenUnverifiable
            }
            Err(err) => {
                info!(backend = self.backend.name(), %err, "clipboard readback failed");
                TransferOutcome::WrittenUnverifiable
            }
        }
    }

    /// Write the real content. Its success is checked on its own; a passed
    /// pre-flight only decides between `Verified` and `WrittenUnverifiable`.
    pub fn write(&mut self, payload: &Transferable, preflight: TransferOutcome) -> TransferOutcome {
        match self.backend.set_text(payload.text()) {
            Ok(()) => preflight,
            Err(err) => {
                warn!(backend = self.backend.name(), %err, "clipboard write failed");
                TransferOutcome::Failed(TransferError::SetFailed(err))
            }
        }
    }

    /// Pre-flight, then write `payload` unless the pre-flight failed.
    pub fn transfer(&mut self, payload: &Transferable) -> TransferOutcome {
        match self.preflight() {
            failed @ TransferOutcome::Failed(_) => failed,
            checked => self.write(payload, checked),
        }
    }
}
