/*!
 * Proxy
 *
 * Move-only owner of one native handle
 */

use super::manager::Bridge;
use super::marshal;
use crate::core::errors::InvokeError;
use crate::core::types::RawHandle;
use std::fmt;
use tracing::trace;

/// Managed-side proxy for one native-resident object
///
/// Owns its handle exclusively: `Proxy` is not `Clone`, the raw handle is
/// never exposed, and [`Proxy::close`] consumes the value. A released proxy
/// therefore cannot be named again in safe code — use-after-release is a
/// compile error, not a runtime check.
///
/// # Release discipline
///
/// `close()` is the primary release path and should be called on every exit
/// path that is done with the object. The `Drop` impl is a best-effort
/// backstop only: drop timing is up to the caller's scopes, and native
/// memory held by never-dropped proxies is never reclaimed.
///
/// # Thread safety
///
/// A proxy is not internally synchronized. Operations borrow `&self` and
/// release takes `self`, so the borrow checker already rules out a release
/// racing an invoke; share a proxy across threads behind your own lock if
/// you need more than that.
pub struct Proxy {
    raw: RawHandle,
    bridge: Bridge,
    active: bool,
}

impl Proxy {
    pub(crate) fn new(raw: RawHandle, bridge: Bridge) -> Self {
        Self {
            raw,
            bridge,
            active: true,
        }
    }

    /// Deliver a payload to the native object
    ///
    /// Marshalling failure surfaces before the native side is called; a
    /// native status failure leaves the proxy live and usable.
    pub fn send(&self, payload: &str) -> Result<(), InvokeError> {
        let native_payload = marshal::to_native(payload)?;
        trace!(handle = self.raw, len = payload.len(), "send");
        self.bridge
            .runtime()
            .send(self.raw, &native_payload)
            .map_err(InvokeError::NativeFailure)
    }

    /// Read the native object's current payload
    pub fn read(&self) -> Result<String, InvokeError> {
        trace!(handle = self.raw, "read");
        let reply = self
            .bridge
            .runtime()
            .read(self.raw)
            .map_err(InvokeError::NativeFailure)?;
        marshal::from_native(&reply)
    }

    /// Release the native object deterministically
    ///
    /// Consumes the proxy; the one native free happens here and the
    /// subsequent `Drop` sees the handle already retired.
    pub fn close(mut self) {
        self.release_internal();
    }

    // Sole transition out of the live state. The `active` flag makes the
    // close and drop paths converge on exactly one native free.
    fn release_internal(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.bridge.retire(self.raw);
    }
}

impl Drop for Proxy {
    fn drop(&mut self) {
        if self.active {
            if self.bridge.config().warn_on_drop_release {
                log::warn!(
                    "[{}] proxy for handle {:#x} released by drop fallback; call close() for deterministic cleanup",
                    self.bridge.config().name,
                    self.raw
                );
            }
            self.release_internal();
        }
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("handle", &format_args!("{:#x}", self.raw))
            .field("active", &self.active)
            .finish()
    }
}
