use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::style;

mod cli;
mod gmic;
mod utils;

use cli::Args;
use gmic::{
    build_command_string, default_output_dir, listen_for_interrupt, load_input_image,
    run_pipeline, write_output_images, CancelToken, GmicCliEngine, RunOutcome,
};
use utils::verbose_println;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Nothing to do without commands: show the usage text, same as --help.
    if args.commands.is_empty() {
        let _ = Args::command().print_help();
        return;
    }

    if let Err(err) = run(args).await {
        println!("{} {}", style("Error:").red().bold(), err.root_cause());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let engine = GmicCliEngine::new(&args.gmic_path).await?;

    let mut inputs = Vec::new();
    if let Some(path) = &args.input {
        verbose_println(
            args.verbose,
            &format!("Loading input image: {}", path.display()),
        );
        inputs.push(load_input_image(path)?);
    }

    let script = build_command_string(&args.commands);
    verbose_println(args.verbose, &format!("Command script: {script}"));

    let cancel = CancelToken::new();
    let interrupt = listen_for_interrupt(cancel.clone());

    let outcome = run_pipeline(&engine, &script, inputs, cancel).await;
    interrupt.abort();

    match outcome {
        RunOutcome::Succeeded(outputs) => {
            if outputs.is_empty() {
                verbose_println(args.verbose, "The run produced no output images");
                return Ok(());
            }

            // An empty -o value counts as unspecified, like omitting the flag.
            let output_dir = match args.output_folder.as_deref() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => {
                    let dir = default_output_dir()?;
                    println!("No output folder specified, using: {}", dir.display());
                    dir
                }
            };

            let written = write_output_images(&outputs, &output_dir)
                .context("Failed to write output images")?;
            println!(
                "{} Saved {} image(s) to {}",
                style("✓").green(),
                written.len(),
                output_dir.display()
            );
            Ok(())
        }
        RunOutcome::Faulted(err) => Err(anyhow::Error::new(err).context("Error running G'MIC")),
        RunOutcome::Cancelled => {
            println!("{}", style("Run cancelled").yellow());
            Ok(())
        }
    }
}
