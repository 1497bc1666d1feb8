use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve `output` for a single image; relative paths land next to `input`.
pub fn resolve_output_path(input: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }

    match input.parent() {
        Some(dir) => dir.join(output),
        None => output.to_path_buf(),
    }
}

/// Resolve `output` for a directory of images; relative paths land inside `input_dir`.
pub fn resolve_output_dir(input_dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        input_dir.join(output)
    }
}

/// Text file path for `image`, mirroring its position under `input_dir`.
///
/// The source extension is kept (`a.png` becomes `a.png.txt`) so images that
/// share a stem never write to the same file.
pub fn frame_text_path(input_dir: &Path, out_dir: &Path, image: &Path) -> PathBuf {
    let relative = image.strip_prefix(input_dir).unwrap_or(image);
    let mut name = relative.as_os_str().to_os_string();
    name.push(".txt");
    out_dir.join(name)
}

/// Write `text` to `path`, creating missing parent directories first.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {:?}", parent))?;
    }

    let mut file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    file.write_all(text.as_bytes()).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}
