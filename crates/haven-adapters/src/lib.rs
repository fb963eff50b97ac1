//! haven-adapters: implementaciones concretas de los puertos de `haven-core`.
//!
//! Este crate provee:
//! - `LogNotificationSink` y `RecordingNotificationSink` (notificaciones).
//! - `InMemoryFieldErrors` (anotaciones de error por campo).
//! - `ProgressRenderer` (indicador de progreso: paso activo + completados).
//! - `SimulatedSubmissionService` (envío con latencia simulada, sin red).
//!
//! Los adaptadores "recording" sirven tanto a la aplicación de demo como de
//! dobles de prueba en los tests de integración del core.

pub mod notify;
pub mod presenter;
pub mod renderer;
pub mod submission;

pub use notify::{LogNotificationSink, RecordingNotificationSink};
pub use presenter::InMemoryFieldErrors;
pub use renderer::{ProgressFrame, ProgressRenderer};
pub use submission::SimulatedSubmissionService;
