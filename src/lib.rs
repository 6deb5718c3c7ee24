/*!
 * Native Bridge Library
 * Managed-side handle lifecycle layer over a natively compiled runtime
 */

pub mod bridge;
pub mod core;
pub mod monitoring;
pub mod runtime;

// Re-exports
pub use crate::bridge::{Bridge, BridgeConfig, InitGate, Proxy};
pub use crate::core::errors::{BridgeError, CreateError, InitError, InvokeError, Result};
pub use crate::core::types::{InitState, NativeStatus, RawHandle, NULL_HANDLE, STATUS_OK};
pub use crate::monitoring::init_tracing;
pub use crate::runtime::NativeRuntime;
