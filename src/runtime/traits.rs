/*!
 * Native Runtime Trait
 *
 * The four entry kinds exposed by the foreign runtime
 */

use crate::core::types::{NativeStatus, RawHandle};
use std::ffi::{CStr, CString};

/// Boundary surface between the managed side and the native collaborator
///
/// Text crosses the boundary as NUL-terminated C strings; all marshalling
/// happens on the managed side before these methods are called.
///
/// # Contract
///
/// - Entry points may block indefinitely; this layer imposes no timeout or
///   cancellation of its own. Blocking behavior is a property of the
///   wrapped native object and passes through unchanged.
/// - No call is retried by this layer. A reported failure may still have
///   had partial native side effects, which is the implementor's problem
///   to avoid (see [`NativeRuntime::create`]).
pub trait NativeRuntime: Send + Sync + 'static {
    /// One-time subsystem setup (symbol caches, thread-local state)
    ///
    /// The managed side guarantees this is called at most once per gate;
    /// implementations do not need to be idempotent.
    fn subsystem_init(&self) -> Result<(), NativeStatus>;

    /// Allocate and fully initialize one native object
    ///
    /// A returned handle is valid, owned exclusively by the caller, and
    /// never [`crate::core::types::NULL_HANDLE`]. Construction must be
    /// atomic from the caller's point of view: a failing path must clean
    /// up anything it partially allocated before returning a status, so
    /// the caller never owes a release for a failed create.
    fn create(&self, args: &CStr) -> Result<RawHandle, NativeStatus>;

    /// Free every resource owned by the object behind `handle`
    ///
    /// Undefined behavior if called twice with the same value, or with a
    /// value the managed side never received from [`NativeRuntime::create`].
    /// The managed side guarantees at-most-once per handle.
    fn destroy(&self, handle: RawHandle);

    /// Deliver a payload to the object behind `handle`
    fn send(&self, handle: RawHandle, payload: &CStr) -> Result<(), NativeStatus>;

    /// Read the object's current payload
    ///
    /// Implementations should validate that `handle` is plausible where
    /// feasible, but detecting use-after-free is not their job: once the
    /// backing memory is reclaimed, a freed handle and a never-minted one
    /// are indistinguishable. The managed side keeps released handles
    /// unreachable instead.
    fn read(&self, handle: RawHandle) -> Result<CString, NativeStatus>;
}
