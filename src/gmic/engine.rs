use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::gmic::errors::{GmicError, Result};
use crate::gmic::{CancelToken, Engine, InputImage, OutputImage};

/// Runs command scripts through the external `gmic` command-line executable.
///
/// Input images are staged as PNG files inside a scratch directory, the
/// executable is spawned once per run, and whatever images it writes back are
/// collected in sorted order. The scratch directory is removed when the run
/// ends, whichever way it ends.
#[derive(Debug)]
pub struct GmicCliEngine {
    program: PathBuf,
}

impl GmicCliEngine {
    /// Create an engine around `program`, verifying it can be executed.
    pub async fn new(program: impl Into<PathBuf>) -> Result<Self> {
        let program = program.into();
        if !is_engine_available(&program).await {
            return Err(GmicError::EngineNotFound(program));
        }

        Ok(Self { program })
    }

    async fn run_script(
        &self,
        command: &str,
        inputs: Vec<InputImage>,
        cancel: CancelToken,
    ) -> Result<Vec<OutputImage>> {
        if cancel.is_cancelled() {
            return Err(GmicError::Cancelled);
        }

        let scratch = tempfile::Builder::new().prefix("gmic-cli-").tempdir()?;
        let results_dir = scratch.path().join("results");
        std::fs::create_dir(&results_dir)?;

        let mut cmd = Command::new(&self.program);
        for (index, input) in inputs.iter().enumerate() {
            let staged = scratch.path().join(format!("input-{index}.png"));
            input.image.save(&staged)?;
            cmd.arg(staged);
        }
        if !command.is_empty() {
            cmd.arg(command);
        }
        cmd.arg("output").arg(results_dir.join("out.png"));

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(GmicError::Launch)?;

        // Drain stderr concurrently; G'MIC logs its progress there and a full
        // pipe would stall the child.
        let stderr_pipe = child.stderr.take();
        let stderr_task = tokio::spawn(async move {
            let mut log = String::new();
            if let Some(mut stream) = stderr_pipe {
                let _ = stream.read_to_string(&mut log).await;
            }
            log
        });

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = cancel.cancelled() => {
                // Cooperative wind-down: stop the engine process and wait for
                // it to exit before reporting the cancelled outcome.
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(GmicError::Cancelled);
            }
        };

        if !status.success() {
            let log = stderr_task.await.unwrap_or_default();
            let detail = match last_log_line(&log) {
                Some(line) => line.to_string(),
                None => format!("exit status {status}"),
            };
            return Err(GmicError::Engine(detail));
        }

        collect_output_images(&results_dir)
    }
}

impl Engine for GmicCliEngine {
    fn run(
        &self,
        command: &str,
        inputs: Vec<InputImage>,
        cancel: CancelToken,
    ) -> impl Future<Output = Result<Vec<OutputImage>>> + Send {
        self.run_script(command, inputs, cancel)
    }
}

/// Probe the executable the same way a user would check it by hand.
async fn is_engine_available(program: &Path) -> bool {
    Command::new(program)
        .arg("version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

/// G'MIC interleaves its error with the progress log on stderr; the last
/// non-empty line carries the message worth showing.
fn last_log_line(log: &str) -> Option<&str> {
    log.lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
}

/// Read back every PNG the engine wrote, in filename order.
///
/// G'MIC numbers the files itself when the image list holds more than one
/// entry, so the sorted filenames reproduce the engine's image order. The
/// images are returned unnamed; index-based naming applies downstream.
fn collect_output_images(dir: &Path) -> Result<Vec<OutputImage>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("png") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut outputs = Vec::with_capacity(paths.len());
    for path in paths {
        let image = image::open(&path)?;
        outputs.push(OutputImage { name: None, image });
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn missing_engine() -> GmicCliEngine {
        GmicCliEngine {
            program: PathBuf::from("definitely-not-a-real-engine"),
        }
    }

    #[tokio::test]
    async fn test_new_rejects_a_missing_executable() {
        let err = GmicCliEngine::new("definitely-not-a-real-engine")
            .await
            .unwrap_err();
        assert!(matches!(err, GmicError::EngineNotFound(_)));
    }

    #[tokio::test]
    async fn test_run_observes_cancellation_before_launching() {
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = missing_engine()
            .run_script("blur 2", Vec::new(), cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, GmicError::Cancelled));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_a_launch_error() {
        let err = missing_engine()
            .run_script("blur 2", Vec::new(), CancelToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GmicError::Launch(_)));
    }

    #[test]
    fn test_last_log_line_skips_blank_tail() {
        let log = "[gmic] Starting...\n[gmic] *** Error *** unknown command 'blurr'\n\n";
        assert_eq!(
            last_log_line(log),
            Some("[gmic] *** Error *** unknown command 'blurr'")
        );
        assert_eq!(last_log_line("\n  \n"), None);
        assert_eq!(last_log_line(""), None);
    }

    #[test]
    fn test_collect_output_images_is_sorted_and_png_only() {
        let dir = tempfile::tempdir().unwrap();

        let first: image::RgbImage = ImageBuffer::from_pixel(1, 1, Rgb([0, 0, 0]));
        first.save(dir.path().join("out_000000.png")).unwrap();
        let second: image::RgbImage = ImageBuffer::from_pixel(2, 2, Rgb([0, 0, 0]));
        second.save(dir.path().join("out_000001.png")).unwrap();
        std::fs::write(dir.path().join("engine.log"), b"noise").unwrap();

        let outputs = collect_output_images(dir.path()).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].image.width(), 1);
        assert_eq!(outputs[1].image.width(), 2);
        assert!(outputs.iter().all(|output| output.name.is_none()));
    }

    #[test]
    fn test_collect_output_images_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = collect_output_images(dir.path()).unwrap();
        assert!(outputs.is_empty());
    }
}
