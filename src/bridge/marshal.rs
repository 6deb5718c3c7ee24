/*!
 * Boundary Marshalling
 *
 * Text conversion between managed strings and the C string representation
 * the native entry points accept
 */

use crate::core::errors::InvokeError;
use std::ffi::{CStr, CString};

/// Marshal a managed string for the native side
///
/// Fails on interior NUL bytes; the native call is never attempted for a
/// payload that cannot be represented.
pub fn to_native(text: &str) -> Result<CString, InvokeError> {
    CString::new(text).map_err(|e| {
        InvokeError::MarshalFailure(format!("interior NUL at byte {}", e.nul_position()))
    })
}

/// Marshal a native reply back into a managed string
///
/// The native side owes no encoding guarantee, so invalid UTF-8 is a
/// marshalling failure rather than a lossy conversion.
pub fn from_native(reply: &CStr) -> Result<String, InvokeError> {
    reply
        .to_str()
        .map(str::to_owned)
        .map_err(|e| InvokeError::MarshalFailure(format!("invalid UTF-8 in native reply: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roundtrip_ascii() {
        let out = to_native("hello").unwrap();
        assert_eq!(from_native(&out).unwrap(), "hello");
    }

    #[test]
    fn test_roundtrip_empty() {
        let out = to_native("").unwrap();
        assert_eq!(from_native(&out).unwrap(), "");
    }

    #[test]
    fn test_roundtrip_unicode() {
        let out = to_native("héllo wörld 世界 🌉").unwrap();
        assert_eq!(from_native(&out).unwrap(), "héllo wörld 世界 🌉");
    }

    #[test]
    fn test_interior_nul_rejected() {
        let err = to_native("he\0llo").unwrap_err();
        assert!(matches!(err, InvokeError::MarshalFailure(ref msg) if msg.contains("byte 2")));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let reply = CString::new(vec![0xff, 0xfe, 0xfd]).unwrap();
        let err = from_native(&reply).unwrap_err();
        assert!(matches!(err, InvokeError::MarshalFailure(_)));
    }
}
