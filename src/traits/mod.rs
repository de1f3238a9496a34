pub mod step_module;

pub use step_module::StepModule;
