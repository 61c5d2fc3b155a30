use async_trait::async_trait;
use std::time::Duration;

/// Port de suspensión cooperativa.
///
/// La pausa entre elementos es LA característica del procesador, así que se
/// inyecta como capacidad explícita en vez de llamar al runtime directo.
/// El adapter de producción duerme de verdad (Tokio); los tests sustituyen
/// un reloj falso y la suite corre en microsegundos.
#[async_trait]
pub trait Sleeper: Send + Sync {
  async fn sleep(&self, duration: Duration);
}
