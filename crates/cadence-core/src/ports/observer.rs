use async_trait::async_trait;

use crate::domain::{RunId, RunNotice};

/// Port de observación de una corrida.
///
/// El procesador no sabe (ni le importa) si los eventos terminan en una
/// consola, en un frontend o en un buffer de test. Todo efecto visible de
/// una corrida pasa por aquí, en el orden exacto en que ocurre:
/// `on_value(i)` siempre precede a `on_progress(i+1, total)`, y ambos
/// preceden a la suspensión que separa el elemento del siguiente.
#[async_trait]
pub trait RunObserver: Send + Sync {
  /// La corrida `run` arrancó con `total` elementos (puede ser cero).
  ///
  /// Pensado para superficies que correlacionan eventos (UI, logs); un
  /// observer de consola puede ignorarlo sin perder nada.
  async fn on_start(&self, run: RunId, total: usize);

  /// El "procesamiento" del elemento: su valor fue emitido.
  async fn on_value(&self, value: f64);

  /// Progreso 1-indexado: `processed` de `total`.
  async fn on_progress(&self, processed: usize, total: usize);

  /// Avisos de estado (vacío, cancelado, completado).
  async fn on_notice(&self, notice: RunNotice);
}
