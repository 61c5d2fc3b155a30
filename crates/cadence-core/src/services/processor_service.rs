use serde_json::Value;

use crate::domain::{CancelHandle, RunId, RunNotice, RunOptions, RunOutcome, Sequence};
use crate::errors::CoreError;
use crate::ports::{RunObserver, Sleeper};

/// Procesador secuencial con pausa.
///
/// Recorre una `Sequence` en orden, un elemento a la vez, con una suspensión
/// de `opts.delay` entre elementos consecutivos. Es estrictamente secuencial
/// a propósito: la pausa es la característica, no un cuello de botella a
/// optimizar.
///
/// - La cancelación es cooperativa: se consulta el handle antes de cada
///   elemento y nada más. Una corrida cancelada es un resultado normal
///   (`RunOutcome::Cancelled`), no un error.
/// - La validación de entrada dinámica ocurre completa ANTES de procesar:
///   una llamada inválida falla con `CoreError::InvalidInput` sin haber
///   emitido ningún evento.
pub struct ProcessorService<S, O>
where
  S: Sleeper,
  O: RunObserver,
{
  sleeper: S,
  observer: O,
}

impl<S, O> ProcessorService<S, O>
where
  S: Sleeper,
  O: RunObserver,
{
  pub fn new(sleeper: S, observer: O) -> Self {
    Self { sleeper, observer }
  }

  /// Procesa una entrada dinámica (JSON).
  ///
  /// Valida primero (fail-fast) y después delega en [`process_values`].
  ///
  /// [`process_values`]: ProcessorService::process_values
  pub async fn process(
    &self,
    input: &Value,
    opts: RunOptions,
    cancel: Option<&CancelHandle>,
  ) -> Result<RunOutcome, CoreError> {
    let sequence = Sequence::parse(input)?;
    Ok(self.process_values(&sequence, opts, cancel).await)
  }

  /// Procesa una secuencia ya validada.
  ///
  /// Es infalible: con datos tipados no queda nada que pueda fallar,
  /// solo terminar (completado o cancelado).
  pub async fn process_values(
    &self,
    sequence: &Sequence,
    opts: RunOptions,
    cancel: Option<&CancelHandle>,
  ) -> RunOutcome {
    let total = sequence.len();
    self.observer.on_start(RunId::new(), total).await;

    if sequence.is_empty() {
      // Sin elementos no hay pausa: se avisa y se termina enseguida.
      self.observer.on_notice(RunNotice::Empty).await;
      return RunOutcome::Completed { processed: 0 };
    }

    for (i, value) in sequence.values().iter().enumerate() {
      if cancel.is_some_and(CancelHandle::is_cancelled) {
        self.observer.on_notice(RunNotice::Cancelled).await;
        return RunOutcome::Cancelled { processed: i, total };
      }

      self.observer.on_value(*value).await;
      self.observer.on_progress(i + 1, total).await;

      // La suspensión separa elementos: después del último no hay nada que
      // separar, así que se omite y solo queda la pausa final configurable.
      if i + 1 < total {
        self.sleeper.sleep(opts.delay).await;
      }
    }

    self.observer.on_notice(RunNotice::Completed).await;

    if !opts.trailing_pause.is_zero() {
      self.sleeper.sleep(opts.trailing_pause).await;
    }

    RunOutcome::Completed { processed: total }
  }
}
