pub mod processor_service;

pub use processor_service::ProcessorService;
