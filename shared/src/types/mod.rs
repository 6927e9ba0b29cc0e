//! Type definitions shared between configuration and the domain layer
//!
//! - `channel` - Delivery channel for one-time codes

pub mod channel;

pub use channel::Channel;
