pub mod observer;
pub mod sleeper;

pub use observer::RunObserver;
pub use sleeper::Sleeper;
