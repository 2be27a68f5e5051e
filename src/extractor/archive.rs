//! Bundle compression
//!
//! Replaces an extracted bundle directory with a `{name}.zip` archive next
//! to it. The archive preserves the relative layout, so the name-encoded
//! timestamp (and with it retention behavior) carries over unchanged.

use std::fs::File;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::common::fs::{from_forward_slashes, relative_file_list};
use crate::error::{Result, fs as fs_error};

/// Compress a bundle directory into `{dir}.zip` and remove the directory
pub fn compress_bundle(bundle_dir: &Path) -> Result<PathBuf> {
    let archive_path = bundle_dir.with_extension("zip");
    let file = File::create(&archive_path)
        .map_err(|e| fs_error::write_failed(archive_path.display().to_string(), e.to_string()))?;

    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for rel in relative_file_list(bundle_dir) {
        writer
            .start_file(rel.as_str(), options)
            .map_err(|e| fs_error::io_error(format!("zip entry '{rel}': {e}")))?;
        let source = from_forward_slashes(bundle_dir, &rel);
        let mut reader = File::open(&source)
            .map_err(|e| fs_error::read_failed(source.display().to_string(), e.to_string()))?;
        std::io::copy(&mut reader, &mut writer)
            .map_err(|e| fs_error::io_error(format!("zip entry '{rel}': {e}")))?;
    }

    writer
        .finish()
        .map_err(|e| fs_error::io_error(format!("finalizing archive: {e}")))?;

    std::fs::remove_dir_all(bundle_dir)
        .map_err(|e| fs_error::io_error(format!("removing uncompressed bundle: {e}")))?;

    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_compress_bundle_replaces_directory() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("users_index_20260806_101530");
        std::fs::create_dir_all(bundle.join("models")).unwrap();
        std::fs::write(bundle.join("manifest.json"), "{}").unwrap();
        std::fs::write(bundle.join("models/user.rb"), "class User; end").unwrap();

        let archive = compress_bundle(&bundle).unwrap();
        assert!(archive.ends_with("users_index_20260806_101530.zip"));
        assert!(archive.exists());
        assert!(!bundle.exists());

        // The archive lists the original layout
        let reader = File::open(&archive).unwrap();
        let mut zip = zip::ZipArchive::new(reader).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"manifest.json".to_string()));
        assert!(names.contains(&"models/user.rb".to_string()));
    }
}
