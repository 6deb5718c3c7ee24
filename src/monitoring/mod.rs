/*!
 * Monitoring
 * Structured tracing setup for hosts embedding the bridge
 */

mod tracer;

pub use tracer::init_tracing;
