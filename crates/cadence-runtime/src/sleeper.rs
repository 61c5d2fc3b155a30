use async_trait::async_trait;
use std::time::Duration;

use cadence_core::ports::Sleeper;

/// Implementación de `Sleeper` sobre el timer de Tokio.
///
/// La suspensión cede el control al scheduler: mientras la corrida duerme,
/// el resto del runtime (timers de cancelación incluidos) sigue avanzando.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
  async fn sleep(&self, duration: Duration) {
    tokio::time::sleep(duration).await;
  }
}
