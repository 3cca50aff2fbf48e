//! Page interaction controller for the portfolio site.
//!
//! The page is modelled as a [`dom::Document`] and time as a virtual clock, so
//! a host (browser glue or a test) drives every behaviour by feeding events
//! to a [`PageController`] and advancing it.

pub mod behaviors;
pub mod clock;
pub mod contact_client;
mod controller;
pub mod dom;
pub mod observer;
pub mod rate_limit;
pub mod selector;
pub mod settings;

pub use behaviors::EventOutcome;
pub use clock::Millis;
pub use contact_client::{ClientError, ContactClient};
pub use controller::PageController;
pub use dom::{Document, Element, ElementId};
pub use settings::ControllerSettings;
