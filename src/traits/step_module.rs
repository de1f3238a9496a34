use std::path::Path;

use async_trait::async_trait;

/// The contract between the engine and a pluggable step implementation.
///
/// A step module receives the path of its configuration fragment and is
/// responsible for loading and interpreting that resource itself; the engine
/// never parses step configuration content. A step signals failure through
/// its `Result`; the engine propagates the failure unchanged and aborts the
/// rest of the run.
#[async_trait]
pub trait StepModule: Send + Sync {
    async fn run(&self, config_path: &Path) -> anyhow::Result<()>;

    fn name(&self) -> &'static str;
}
