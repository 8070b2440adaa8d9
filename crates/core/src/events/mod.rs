//! Domain events module.
//!
//! Provides domain event types and the sink trait for notifying the UI layer
//! after successful domain mutations. The presentation layer implements the
//! sink to re-render whatever the event touches.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
