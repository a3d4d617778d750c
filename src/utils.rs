use std::io;
use std::path::{Path, PathBuf};

use console::style;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of the synthesized output-folder name.
const RANDOM_NAME_LEN: usize = 10;

/// Print a message only when verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Random name for the synthesized output folder.
pub fn random_folder_name() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(RANDOM_NAME_LEN)
        .map(char::from)
        .collect()
}

/// Replace characters that are unsafe in filenames so an engine-supplied
/// image name can be used on disk as-is.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_folder_name_shape() {
        let name = random_folder_name();
        assert_eq!(name.len(), RANDOM_NAME_LEN);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));

        // Two equal draws in a row would mean the generator is broken.
        assert_ne!(random_folder_name(), random_folder_name());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("sunset"), "sunset");
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
        assert_eq!(sanitize_filename("  padded  "), "padded");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
    }

    #[test]
    fn test_executable_dir_exists() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
    }
}
