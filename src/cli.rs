use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gmic-cli",
    about = "Runs G'MIC command scripts over images",
    long_about = "
G'MIC Command-Line Runner

Executes the given G'MIC commands through the external gmic executable,
optionally feeding them one input image, and saves every result image as a
PNG file.

Example Usage:
  # Generate an image and save it to a chosen folder
  gmic-cli -o ~/processed sample lena blur 2

  # Feed one input image through a script
  gmic-cli -i ~/Photos/IMG_001.jpg -o ~/processed sharpen 100

  # Commands may start with a dash
  gmic-cli -i ~/Photos/IMG_001.jpg -blur 4 -sharpen 100

  # Without -o a randomly named folder is created next to the executable
  gmic-cli -i ~/Photos/IMG_001.jpg blur 2"
)]
pub struct Args {
    /// Input image fed to the engine as its only input
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output folder for result images (created when missing; a randomly
    /// named folder next to the executable is used when omitted)
    #[arg(short = 'o', long = "output-folder", value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// Path of the G'MIC command-line executable
    #[arg(long = "gmic", default_value = "gmic", value_name = "PATH")]
    pub gmic_path: PathBuf,

    /// Enable verbose output with detailed progress information
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// G'MIC commands to execute, joined into a single script
    #[arg(value_name = "COMMANDS", allow_hyphen_values = true)]
    pub commands: Vec<String>,
}
