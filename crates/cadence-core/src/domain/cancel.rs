use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Bandera compartida de cancelación cooperativa.
///
/// El llamador la crea antes de arrancar la corrida y puede activarla en
/// cualquier momento (por ejemplo desde un timer). El procesador la consulta
/// antes de cada elemento y NUNCA la resetea: una vez activada es terminal
/// para esa corrida.
///
/// Un solo flag atómico; no hace falta lock. La cancelación se observa solo
/// en los límites entre elementos (polling), no de forma preventiva: si el
/// flag se activa durante una suspensión, surte efecto al reanudar.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
  cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
  pub fn new() -> Self {
    Self { cancelled: Arc::new(AtomicBool::new(false)) }
  }

  /// Solicita la cancelación. Idempotente.
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Relaxed)
  }
}
