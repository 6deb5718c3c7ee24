/*!
 * Bridge Manager
 * Central owner of the native runtime, init gate, and live-handle registry
 */

use super::config::BridgeConfig;
use super::gate::InitGate;
use super::marshal;
use super::proxy::Proxy;
use crate::core::errors::{CreateError, InitError};
use crate::core::types::{InitState, RawHandle, NULL_HANDLE};
use crate::runtime::NativeRuntime;
use ahash::RandomState;
use dashmap::DashMap;
use log::error;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Managed-side anchor for one native subsystem
///
/// Owns the [`InitGate`] and the registry of live handles, and mints
/// [`Proxy`] values. Cheap to clone; clones share the same gate and
/// registry. One `Bridge` per native subsystem per process is the intended
/// discipline — the gate's exactly-once guarantee is per bridge.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

struct BridgeInner {
    runtime: Arc<dyn NativeRuntime>,
    gate: InitGate,
    config: BridgeConfig,
    // Handles currently owned by a live proxy. Release removes the entry
    // before the native free, so the registry never names a dead handle.
    live: DashMap<RawHandle, (), RandomState>,
}

impl Bridge {
    pub fn new(runtime: Arc<dyn NativeRuntime>) -> Self {
        Self::with_config(runtime, BridgeConfig::default())
    }

    pub fn with_config(runtime: Arc<dyn NativeRuntime>, config: BridgeConfig) -> Self {
        info!(subsystem = %config.name, "Bridge created");
        Self {
            inner: Arc::new(BridgeInner {
                runtime,
                gate: InitGate::new(),
                config,
                live: DashMap::with_hasher(RandomState::new()),
            }),
        }
    }

    /// Run one-time native setup, or replay its recorded outcome
    ///
    /// Safe to call from any number of threads; see [`InitGate::ensure`].
    pub fn ensure_initialized(&self) -> Result<(), InitError> {
        self.inner.gate.ensure(&*self.inner.runtime)
    }

    /// Current init gate state
    pub fn init_state(&self) -> InitState {
        self.inner.gate.state()
    }

    /// Create a native object and the proxy that owns it
    ///
    /// Initializes the subsystem first if no caller has yet. On any error
    /// path no native resource is outstanding: marshalling failures never
    /// reach the native side, and a failed native constructor cleans up
    /// after itself per the [`NativeRuntime::create`] contract.
    pub fn create_proxy(&self, args: &str) -> Result<Proxy, CreateError> {
        self.ensure_initialized()?;

        let native_args =
            marshal::to_native(args).map_err(|e| CreateError::InvalidArguments(e.to_string()))?;

        let raw = self
            .inner
            .runtime
            .create(&native_args)
            .map_err(CreateError::NativeFailure)?;

        if raw == NULL_HANDLE {
            return Err(CreateError::NullHandle);
        }

        if self.inner.live.insert(raw, ()).is_some() {
            // The native side re-minted a handle a live proxy still owns.
            // Refusing the new proxy keeps single ownership intact.
            error!(
                "[{}] native constructor returned live handle {:#x}",
                self.inner.config.name, raw
            );
            return Err(CreateError::HandleAliased(raw));
        }

        debug!(subsystem = %self.inner.config.name, handle = raw, "proxy created");
        Ok(Proxy::new(raw, self.clone()))
    }

    /// Number of handles currently owned by live proxies
    pub fn live_proxies(&self) -> usize {
        self.inner.live.len()
    }

    pub(crate) fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    pub(crate) fn runtime(&self) -> &dyn NativeRuntime {
        &*self.inner.runtime
    }

    /// Retire a handle: unregister it, then issue the single native free
    ///
    /// Callers must guarantee at-most-once per handle; the proxy's
    /// one-time `active` flag does.
    pub(crate) fn retire(&self, raw: RawHandle) {
        self.inner.live.remove(&raw);
        self.inner.runtime.destroy(raw);
        debug!(subsystem = %self.inner.config.name, handle = raw, "handle retired");
    }
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("subsystem", &self.inner.config.name)
            .field("init_state", &self.init_state())
            .field("live_proxies", &self.live_proxies())
            .finish()
    }
}
