pub mod config;
pub mod console;
pub mod sleeper;

pub use config::RunnerConfig;
pub use console::ConsoleObserver;
pub use sleeper::TokioSleeper;
