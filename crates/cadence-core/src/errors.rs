// crates/cadence-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Cadence.
///
/// Las capas superiores (CLI, drivers, etc.) deberían mapear este error
/// a mensajes de usuario o logs. La cancelación NO es un error: una
/// corrida cancelada termina con éxito (ver `RunOutcome::Cancelled`).
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("invalid input: {0}")]
  InvalidInput(String),
}
