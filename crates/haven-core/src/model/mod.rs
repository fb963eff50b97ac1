//! Modelos del asistente: campos, estado, resumen y payload de envío.

pub mod fields;
pub mod payload;
pub mod state;
pub mod summary;

pub use fields::{FieldMap, FieldValue};
pub use payload::SubmissionPayload;
pub use state::{WizardPhase, WizardState};
pub use summary::{project_summary, SummaryView};
