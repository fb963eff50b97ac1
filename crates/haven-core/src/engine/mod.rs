//! Engine module for the wizard controller
//!
//! Provides the controller state machine and its builder.

pub mod builder;
pub mod core;

pub use builder::WizardBuilder;
pub use core::{SubmissionReceipt, WizardController};

pub use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use crate::model::{WizardPhase, WizardState};
