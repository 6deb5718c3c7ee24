/*!
 * Init Gate
 *
 * Blocking one-time initialization barrier for the native subsystem
 */

use crate::core::errors::InitError;
use crate::core::types::InitState;
use crate::runtime::NativeRuntime;
use parking_lot::Once;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;
use tracing::{error, info};

/// One-time initialization barrier guarding native subsystem setup
///
/// The first caller of [`InitGate::ensure`] runs the native setup; every
/// other caller, including concurrent ones, blocks until that run resolves
/// and then observes the same terminal [`InitState`]. A failed setup is
/// permanent: the recorded error is replayed on every later call, never
/// retried, because re-running a partially corrupted native init is unsafe.
pub struct InitGate {
    once: Once,
    state: AtomicU8,
    error: OnceLock<InitError>,
}

impl InitGate {
    pub const fn new() -> Self {
        Self {
            once: Once::new(),
            state: AtomicU8::new(InitState::Uninitialized as u8),
            error: OnceLock::new(),
        }
    }

    /// Run native setup exactly once and report the terminal outcome
    ///
    /// Blocks while another thread holds the gate. After the first return,
    /// the outcome is fixed for the life of the gate.
    pub fn ensure(&self, runtime: &dyn NativeRuntime) -> Result<(), InitError> {
        self.once.call_once(|| {
            self.state
                .store(InitState::Initializing as u8, Ordering::Release);

            match runtime.subsystem_init() {
                Ok(()) => {
                    self.state.store(InitState::Ready as u8, Ordering::Release);
                    info!("Native subsystem initialized");
                }
                Err(status) => {
                    // Record first, publish Failed second: a reader that
                    // sees Failed must find the error already set.
                    let _ = self.error.set(InitError::NativeSetupFailed(status));
                    self.state.store(InitState::Failed as u8, Ordering::Release);
                    error!(status, "Native subsystem initialization failed");
                }
            }
        });

        match self.state() {
            InitState::Ready => Ok(()),
            InitState::Failed => Err(self
                .error
                .get()
                .cloned()
                .unwrap_or(InitError::NativeSetupFailed(-1))),
            // call_once returned, so the transition is complete
            InitState::Uninitialized | InitState::Initializing => {
                unreachable!("init gate resolved without reaching a terminal state")
            }
        }
    }

    /// Current state, racy by nature for observers outside `ensure`
    pub fn state(&self) -> InitState {
        InitState::from_u8(self.state.load(Ordering::Acquire))
    }
}

impl Default for InitGate {
    fn default() -> Self {
        Self::new()
    }
}
