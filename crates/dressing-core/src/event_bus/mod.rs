//! # Event Bus Module
//!
//! Publish/subscribe channel between the project orchestrator and the
//! collaborators that react to project changes (renderers, autosave, UI).
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async receivers
//! - Project events are journaled with a sequence number for catch-up
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dressing_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, ProjectEvent};
//!
//! let bus = Arc::new(EventBus::new());
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Project]),
//!     |event| {
//!         if let AppEvent::Project(ProjectEvent::Changed { operation, .. }) = event {
//!             println!("re-render after {}", operation);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
