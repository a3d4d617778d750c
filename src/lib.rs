// Library exports for reuse by other front ends
pub mod cli;
pub mod gmic;
pub mod utils;

// Re-export commonly used types
pub use cli::Args;
pub use gmic::{
    build_command_string, load_input_image, run_pipeline, write_output_images, CancelToken,
    Engine, GmicCliEngine, GmicError, InputImage, OutputImage, RunOutcome,
};
