pub mod orchestrator;

pub use orchestrator::{run, run_with, Config};
