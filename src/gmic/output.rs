use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::gmic::errors::Result;
use crate::gmic::OutputImage;
use crate::utils::{executable_dir, random_folder_name, sanitize_filename};

/// Folder used when no `--output-folder` is given: a randomly named
/// subdirectory next to the executable.
pub fn default_output_dir() -> Result<PathBuf> {
    Ok(executable_dir()?.join(random_folder_name()))
}

/// Persist each result image as `<name>.png`, falling back to the image's
/// zero-based index when it carries no usable name.
///
/// Each image is encoded into memory before its file is created, so a failing
/// encode leaves no partial file behind and earlier siblings stay intact. An
/// empty collection touches nothing, not even the directory.
pub fn write_output_images(images: &[OutputImage], dir: &Path) -> Result<Vec<PathBuf>> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(images.len());
    for (index, output) in images.iter().enumerate() {
        let stem = match &output.name {
            Some(name) if !name.trim().is_empty() => sanitize_filename(name),
            _ => index.to_string(),
        };
        let path = dir.join(format!("{stem}.png"));

        let mut encoded = Vec::new();
        output
            .image
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;
        fs::write(&path, &encoded)?;

        written.push(path);
    }

    Ok(written)
}
