use crate::gmic::errors::GmicError;
use crate::gmic::{CancelToken, Engine, InputImage, RunOutcome};

/// Submit one command script to the engine and wait for its terminal state.
///
/// This is the pipeline's single suspension point: exactly one engine call is
/// outstanding, there are no retries, and the input images are consumed by
/// the call no matter how it ends.
pub async fn run_pipeline<E: Engine>(
    engine: &E,
    command: &str,
    inputs: Vec<InputImage>,
    cancel: CancelToken,
) -> RunOutcome {
    match engine.run(command, inputs, cancel).await {
        Ok(outputs) => RunOutcome::Succeeded(outputs),
        Err(GmicError::Cancelled) => RunOutcome::Cancelled,
        Err(err) => RunOutcome::Faulted(err),
    }
}
