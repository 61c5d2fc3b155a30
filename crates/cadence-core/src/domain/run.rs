use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identificador único de una corrida del procesador.
///
/// Se genera con UUID v4 para garantizar unicidad global; los adapters
/// pueden usarlo para correlacionar logs o eventos de UI de una misma corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    RunId(Uuid::new_v4())
  }

  /// Construye un `RunId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    RunId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for RunId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for RunId {
  fn from(u: Uuid) -> Self {
    RunId(u)
  }
}

impl From<RunId> for Uuid {
  fn from(id: RunId) -> Self {
    id.0
  }
}

impl fmt::Display for RunId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Avisos de estado que el procesador emite por el canal de observación.
///
/// El texto concreto ("No numbers to process!", etc.) es decisión del
/// adapter; el dominio solo dice QUÉ pasó.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunNotice {
  /// La secuencia estaba vacía; no hay nada que procesar.
  Empty,
  /// Se observó la bandera de cancelación antes de procesar el siguiente elemento.
  Cancelled,
  /// Todos los elementos fueron procesados.
  Completed,
}

/// Opciones de una corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
  /// Pausa entre elementos consecutivos.
  pub delay: Duration,
  /// Pausa cosmética después del aviso de finalización.
  ///
  /// Útil para que un harness de demos respire entre corridas; cero (el
  /// valor por defecto) la desactiva por completo.
  pub trailing_pause: Duration,
}

pub const DEFAULT_DELAY_MS: u64 = 1000;

impl Default for RunOptions {
  fn default() -> Self {
    RunOptions { delay: Duration::from_millis(DEFAULT_DELAY_MS), trailing_pause: Duration::ZERO }
  }
}

impl RunOptions {
  pub fn with_delay(delay: Duration) -> Self {
    RunOptions { delay, ..Self::default() }
  }
}

/// Resultado de una corrida que terminó SIN error de validación.
///
/// La cancelación a mitad de corrida es un resultado normal, no excepcional:
/// por eso vive aquí y no en `CoreError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
  /// Todos los elementos fueron procesados (o la secuencia estaba vacía).
  Completed { processed: usize },
  /// La corrida se detuvo en un límite de elemento; `processed < total`.
  Cancelled { processed: usize, total: usize },
}

impl RunOutcome {
  pub fn processed(&self) -> usize {
    match self {
      RunOutcome::Completed { processed } => *processed,
      RunOutcome::Cancelled { processed, .. } => *processed,
    }
  }

  pub fn was_cancelled(&self) -> bool {
    matches!(self, RunOutcome::Cancelled { .. })
  }
}
