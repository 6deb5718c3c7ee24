/*!
 * Bridge Module
 * Handle lifecycle: one-time init gate, proxy minting, at-most-once release
 */

mod config;
mod gate;
mod manager;
pub mod marshal;
mod proxy;

pub use config::BridgeConfig;
pub use gate::InitGate;
pub use manager::Bridge;
pub use proxy::Proxy;
