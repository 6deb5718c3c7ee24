/*!
 * Shared Test Double
 *
 * Counting in-process stand-in for the native collaborator
 */
#![allow(dead_code)]

use native_bridge::{NativeRuntime, NativeStatus, RawHandle};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// Mock native runtime backing a per-handle mailbox
///
/// Counts every entry-point call so tests can assert the at-most-once
/// guarantees, and flags any destroy of a handle it does not own (the
/// managed side must make double-free unreachable, so this flag staying
/// false is the real assertion).
pub struct MockRuntime {
    next: AtomicU64,
    pub init_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub destroy_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub double_free: AtomicBool,
    pub minted: Mutex<Vec<RawHandle>>,
    mailboxes: Mutex<HashMap<RawHandle, CString>>,
    fail_init: Option<NativeStatus>,
    fail_create: Option<NativeStatus>,
    fail_send: Option<NativeStatus>,
    // When set, every create mints this exact value (alias/null scenarios)
    fixed_handle: Option<RawHandle>,
    garbage_reply: AtomicBool,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            init_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            destroy_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            double_free: AtomicBool::new(false),
            minted: Mutex::new(Vec::new()),
            mailboxes: Mutex::new(HashMap::new()),
            fail_init: None,
            fail_create: None,
            fail_send: None,
            fixed_handle: None,
            garbage_reply: AtomicBool::new(false),
        }
    }

    pub fn with_fail_init(mut self, status: NativeStatus) -> Self {
        self.fail_init = Some(status);
        self
    }

    pub fn with_fail_create(mut self, status: NativeStatus) -> Self {
        self.fail_create = Some(status);
        self
    }

    pub fn with_fail_send(mut self, status: NativeStatus) -> Self {
        self.fail_send = Some(status);
        self
    }

    pub fn with_fixed_handle(mut self, handle: RawHandle) -> Self {
        self.fixed_handle = Some(handle);
        self
    }

    /// Make subsequent reads return bytes that are not valid UTF-8
    pub fn set_garbage_reply(&self, garbage: bool) {
        self.garbage_reply.store(garbage, Ordering::SeqCst);
    }
}

impl NativeRuntime for MockRuntime {
    fn subsystem_init(&self) -> Result<(), NativeStatus> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_init {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    fn create(&self, _args: &CStr) -> Result<RawHandle, NativeStatus> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_create {
            // Failing construction leaves nothing behind
            return Err(status);
        }
        let handle = self
            .fixed_handle
            .unwrap_or_else(|| self.next.fetch_add(1, Ordering::SeqCst));
        self.mailboxes.lock().insert(handle, CString::default());
        self.minted.lock().push(handle);
        Ok(handle)
    }

    fn destroy(&self, handle: RawHandle) {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
        if self.mailboxes.lock().remove(&handle).is_none() {
            self.double_free.store(true, Ordering::SeqCst);
        }
    }

    fn send(&self, handle: RawHandle, payload: &CStr) -> Result<(), NativeStatus> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_send {
            return Err(status);
        }
        match self.mailboxes.lock().get_mut(&handle) {
            Some(slot) => {
                *slot = payload.to_owned();
                Ok(())
            }
            None => Err(-1),
        }
    }

    fn read(&self, handle: RawHandle) -> Result<CString, NativeStatus> {
        if self.garbage_reply.load(Ordering::SeqCst) {
            return Ok(CString::new(vec![0xff, 0xfe]).expect("no interior NUL"));
        }
        self.mailboxes
            .lock()
            .get(&handle)
            .cloned()
            .ok_or(-1)
    }
}
