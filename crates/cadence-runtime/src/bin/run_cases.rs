use std::time::Duration;

use serde_json::{Value, json};

use cadence_core::domain::{CancelHandle, RunOptions};
use cadence_core::services::ProcessorService;
use cadence_runtime::{ConsoleObserver, RunnerConfig, TokioSleeper};

const SEPARATOR: &str = "----------------------------------------------------------------";

/// Harness de demostración: ejecuta los escenarios fijos en secuencia.
///
/// El manejo de fallos es explícito en cada caso (nada de confiar en el
/// reporte global de errores no manejados del entorno): un caso inválido
/// imprime exactamente una línea de diagnóstico y el harness sigue.
#[tokio::main]
async fn main() {
  let opts = match RunnerConfig::load() {
    Ok(cfg) => cfg.run_options(),
    Err(e) => {
      eprintln!("config error, using defaults: {e}");
      RunOptions::default()
    }
  };

  let service = ProcessorService::new(TokioSleeper, ConsoleObserver::new());

  println!("Running Case 1: Normal execution");
  run_case(&service, &json!([1, 2, 3, 4, 5]), opts, None).await;
  println!("{SEPARATOR}");

  println!("Running Case 2: Empty list");
  run_case(&service, &json!([]), opts, None).await;
  println!("{SEPARATOR}");

  println!("Running Case 3: Cancellation");
  let handle = CancelHandle::new();
  let timer_handle = handle.clone();
  // Timer externo: activa la bandera a los 2.5 s, en plena corrida.
  tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(2500)).await;
    timer_handle.cancel();
  });
  run_case(&service, &json!([1, 2, 3, 4, 5]), opts, Some(&handle)).await;
  println!("{SEPARATOR}");

  println!("Running Case 4: Invalid input (non-list)");
  run_case(&service, &json!("invalid input"), opts, None).await;
  println!("{SEPARATOR}");

  println!("Running Case 5: Invalid input (list with non-number elements)");
  run_case(&service, &json!([1, "two", 3]), opts, None).await;
}

async fn run_case(
  service: &ProcessorService<TokioSleeper, ConsoleObserver>,
  input: &Value,
  opts: RunOptions,
  cancel: Option<&CancelHandle>,
) {
  if let Err(e) = service.process(input, opts, cancel).await {
    eprintln!("{e}");
  }
}
