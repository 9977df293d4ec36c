//! Scroll-driven animation for the portfolio page.
//!
//! Everything here except [`web`] is target-independent: it talks to the
//! page through the [`dom::Dom`] and [`capability::Platform`] traits, and
//! [`memory::MemoryDom`] stands in for a browser in tests.

pub mod augment;
pub mod capability;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod ease;
pub mod lifecycle;
pub mod memory;
pub mod registry;
pub mod sections;
#[cfg(feature = "hydrate")]
pub mod web;
pub mod window;

pub use capability::CapabilityProfile;
pub use config::MotionConfig;
pub use lifecycle::{MountOutcome, Orchestrator, Phase, SettleTicket, Teardown};
#[cfg(feature = "hydrate")]
pub use web::{MotionError, ScrollDriver, WebDom};
