use async_trait::async_trait;

use cadence_core::domain::{RunId, RunNotice};
use cadence_core::ports::RunObserver;

/// Implementación de `RunObserver` que escribe en la consola.
///
/// El formato de estas líneas es ilustrativo, no un protocolo: cualquier
/// superficie estructurada (UI, eventos) implementa su propio observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl RunObserver for ConsoleObserver {
  async fn on_start(&self, _run: RunId, _total: usize) {
    // La consola no correlaciona corridas; el id es para superficies con estado.
  }

  async fn on_value(&self, value: f64) {
    println!("{value}");
  }

  async fn on_progress(&self, processed: usize, total: usize) {
    println!("Progress: {processed}/{total}");
  }

  async fn on_notice(&self, notice: RunNotice) {
    match notice {
      RunNotice::Empty => println!("No numbers to process!"),
      RunNotice::Cancelled => println!("Process cancelled!"),
      RunNotice::Completed => println!("All numbers processed!"),
    }
  }
}
