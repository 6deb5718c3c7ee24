/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{NativeStatus, RawHandle};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subsystem initialization errors
///
/// Initialization failure is permanent for the process lifetime: the gate
/// records the first error and replays it verbatim to every later caller
/// instead of retrying a partially corrupted native setup.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InitError {
    #[error("Native subsystem setup failed with status {0}")]
    #[diagnostic(
        code(bridge::init::native_setup_failed),
        help("The native runtime could not initialize its shared state. No proxies can be created for the rest of this process.")
    )]
    NativeSetupFailed(NativeStatus),
}

/// Proxy construction errors
///
/// No native resource is outstanding on any of these paths: the native
/// constructor contract requires the failing side to clean up before
/// reporting, so a failed `create` never hands back a handle to release.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CreateError {
    #[error("Subsystem not ready: {0}")]
    #[diagnostic(transparent)]
    Init(#[from] InitError),

    #[error("Invalid constructor arguments: {0}")]
    #[diagnostic(
        code(bridge::create::invalid_arguments),
        help("Constructor arguments could not be marshalled to the native representation. The native side was not called.")
    )]
    InvalidArguments(String),

    #[error("Native constructor failed with status {0}")]
    #[diagnostic(
        code(bridge::create::native_failure),
        help("The native allocation or construction failed. Safe to retry with different arguments.")
    )]
    NativeFailure(NativeStatus),

    #[error("Native constructor returned the null handle")]
    #[diagnostic(
        code(bridge::create::null_handle),
        help("Zero is reserved as the construction-failed sentinel and must never denote a live object.")
    )]
    NullHandle,

    #[error("Native constructor returned handle {0:#x} which is already live")]
    #[diagnostic(
        code(bridge::create::handle_aliased),
        help("The native side minted a handle value still owned by a live proxy. This is a native-side contract violation; the new handle was not registered.")
    )]
    HandleAliased(RawHandle),
}

/// Operation dispatch errors
///
/// The proxy stays live and usable after any of these; no retry is
/// performed by this layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InvokeError {
    #[error("Marshalling failed at the boundary: {0}")]
    #[diagnostic(
        code(bridge::invoke::marshal_failure),
        help("Argument or result conversion failed before or after the native call. Outbound failures never reach the native side.")
    )]
    MarshalFailure(String),

    #[error("Native operation failed with status {0}")]
    #[diagnostic(
        code(bridge::invoke::native_failure),
        help("The native operation reported failure. Whether a retry makes sense depends on the wrapped object's semantics.")
    )]
    NativeFailure(NativeStatus),
}

/// Unified bridge error type with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum BridgeError {
    #[error("Initialization error: {0}")]
    #[diagnostic(transparent)]
    Init(#[from] InitError),

    #[error("Creation error: {0}")]
    #[diagnostic(transparent)]
    Create(#[from] CreateError),

    #[error("Invocation error: {0}")]
    #[diagnostic(transparent)]
    Invoke(#[from] InvokeError),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(bridge::internal_error),
        help("An unexpected internal error occurred. Please report this issue.")
    )]
    Internal(String),
}

impl From<String> for BridgeError {
    fn from(msg: String) -> Self {
        BridgeError::Internal(msg)
    }
}

impl From<&str> for BridgeError {
    fn from(msg: &str) -> Self {
        BridgeError::Internal(msg.into())
    }
}

/// Result type for bridge operations
///
/// # Must Use
/// Bridge operations can fail and must be handled; a swallowed error here
/// hides a native-side state change that already happened
pub type Result<T> = std::result::Result<T, BridgeError>;
