/*!
 * Native Runtime Module
 * The boundary surface any native collaborator must implement
 */

mod traits;

pub use traits::NativeRuntime;
