/*!
 * Core Types
 * Common types used across the bridge
 */

use serde::{Deserialize, Serialize};

/// Opaque handle minted by the native side
///
/// Address-sized token identifying one native-resident object. Carries no
/// interpretable structure on the managed side; the only valid use is
/// passing it back through the [`crate::runtime::NativeRuntime`] contract.
pub type RawHandle = u64;

/// Reserved sentinel: the native side returns this only on failed construction
pub const NULL_HANDLE: RawHandle = 0;

/// Status code reported by native entry points
pub type NativeStatus = i32;

/// Status value meaning the native call succeeded
pub const STATUS_OK: NativeStatus = 0;

/// Subsystem initialization state
///
/// Transitions only `Uninitialized -> Initializing -> {Ready | Failed}`
/// and never reverts. Stored as an atomic `u8` inside the init gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum InitState {
    Uninitialized = 0,
    Initializing = 1,
    Ready = 2,
    Failed = 3,
}

impl InitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    /// Decode from the atomic representation
    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Initializing,
            2 => Self::Ready,
            3 => Self::Failed,
            _ => Self::Uninitialized,
        }
    }

    /// Terminal states never transition again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

/// Common result type for bridge operations
pub type BridgeResult<T> = Result<T, super::errors::BridgeError>;
