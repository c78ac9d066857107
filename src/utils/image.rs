use image::{
    ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, ErrorKind},
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::error::{Result, WhiteoutError};

/// Decode any supported image and force it into RGBA8.
///
/// The format is sniffed from the file content, so extensions don't matter.
/// Sources without alpha come out fully opaque.
pub fn read_rgba_image(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => WhiteoutError::NotFound(path.to_path_buf()),
        _ => WhiteoutError::io(path, err),
    })?;
    let reader = reader
        .with_guessed_format()
        .map_err(|err| WhiteoutError::io(path, err))?;
    log::debug!("decoding {} as {:?}", path.display(), reader.format());

    let image = reader
        .decode()
        .map_err(|err| WhiteoutError::decode(path, err))?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// Encode as PNG into a sibling temporary file, then rename it over `path`.
///
/// Either the whole new file lands at `path` or the previous content stays.
/// The temporary file never outlives a failed write. Symlinks are followed,
/// the link stays and its target receives the new content.
pub fn write_png_atomic(
    image: &RgbaImage,
    path: &Path,
    compression: CompressionType,
    filtering: FilterType,
) -> Result {
    let path = &resolve_target(path)?;
    let tmp_path = temp_sibling(path)?;
    log::debug!("writing {} through {}", path.display(), tmp_path.display());

    let result = write_png(image, &tmp_path, compression, filtering)
        .and_then(|_| copy_permissions(path, &tmp_path))
        .and_then(|_| fs::rename(&tmp_path, path).map_err(|err| WhiteoutError::io(path, err)));

    if result.is_err() {
        if let Err(err) = fs::remove_file(&tmp_path) {
            if err.kind() != ErrorKind::NotFound {
                log::warn!("could not remove {}: {}", tmp_path.display(), err);
            }
        }
    }
    result
}

fn write_png(
    image: &RgbaImage,
    path: &Path,
    compression: CompressionType,
    filtering: FilterType,
) -> Result {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| WhiteoutError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(&mut writer, compression, filtering);
    image
        .write_with_encoder(encoder)
        .map_err(|err| WhiteoutError::encode(path, err))?;

    let file = writer
        .into_inner()
        .map_err(|err| WhiteoutError::io(path, err.into_error()))?;
    file.sync_all().map_err(|err| WhiteoutError::io(path, err))
}

/// Keep the mode bits of the file being replaced.
fn copy_permissions(original: &Path, replacement: &Path) -> Result {
    match fs::metadata(original) {
        Ok(meta) => fs::set_permissions(replacement, meta.permissions())
            .map_err(|err| WhiteoutError::io(replacement, err)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(WhiteoutError::io(original, err)),
    }
}

/// Existing paths resolve through symlinks to the file actually written.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(err) => Err(WhiteoutError::io(path, err)),
    }
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// `dir/name.ext` -> `dir/.name.ext.<pid>-<n>.whiteout.tmp`
///
/// Same directory so the final rename never crosses filesystems. `n` is unique
/// per call, concurrent writes to one path each get their own file.
fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        WhiteoutError::io(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(
        ".{}-{}.whiteout.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::temp_sibling;

    #[test]
    fn test_temp_sibling_stays_in_directory() {
        let tmp = temp_sibling(Path::new("some/dir/photo.jpg")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("some/dir")));
        let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".photo.jpg."));
        assert!(name.ends_with(".whiteout.tmp"));
    }

    #[test]
    fn test_temp_sibling_unique_per_call() {
        let path = Path::new("dir/photo.png");
        let a = temp_sibling(path).unwrap();
        let b = temp_sibling(path).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.parent(), b.parent());
    }

    #[test]
    fn test_temp_sibling_relative_name() {
        let tmp = temp_sibling(Path::new("photo.png")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("")));
    }

    #[test]
    fn test_temp_sibling_needs_file_name() {
        assert!(temp_sibling(Path::new("/")).is_err());
    }
}
