pub mod cancel;
pub mod command;
pub mod engine;
pub mod errors;
pub mod input;
pub mod invoke;
pub mod output;

use std::future::Future;

use image::DynamicImage;

pub use cancel::{listen_for_interrupt, CancelToken};
pub use command::build_command_string;
pub use engine::GmicCliEngine;
pub use errors::{GmicError, Result};
pub use input::load_input_image;
pub use invoke::run_pipeline;
pub use output::{default_output_dir, write_output_images};

/// A decoded image owned by the pipeline and handed to the engine.
#[derive(Debug)]
pub struct InputImage {
    pub name: String,
    pub image: DynamicImage,
}

/// An image produced by the engine.
///
/// `name` becomes the output filename when present; unnamed images fall back
/// to their zero-based index in the result collection.
#[derive(Debug)]
pub struct OutputImage {
    pub name: Option<String>,
    pub image: DynamicImage,
}

/// Terminal state of a single engine invocation.
#[derive(Debug)]
pub enum RunOutcome {
    Succeeded(Vec<OutputImage>),
    Faulted(GmicError),
    Cancelled,
}

/// The external image-processing engine.
///
/// One call executes a full command script over the supplied images. The
/// engine observes the cancellation token at its own checkpoints and settles
/// into `GmicError::Cancelled` once it has wound down; the caller never
/// force-aborts the awaited call.
pub trait Engine {
    fn run(
        &self,
        command: &str,
        inputs: Vec<InputImage>,
        cancel: CancelToken,
    ) -> impl Future<Output = Result<Vec<OutputImage>>> + Send;
}
