/// Estado visual de un paso en el indicador de progreso.
///
/// - `Active`: el paso actual.
/// - `Completed`: validado y superado al menos una vez.
/// - `Pending`: todavía no alcanzado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}
