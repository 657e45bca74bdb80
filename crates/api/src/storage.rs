//! Local storage for uploaded product images.
//!
//! Files land in `UPLOAD_DIR` under a collision-free name and are served
//! back by the router at `/uploads/<name>`.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Route prefix under which stored files are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Image storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory that receives uploaded files.
    pub upload_dir: PathBuf,
    /// Base URL used to build the public address of a stored file.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var           | Default                  |
    /// |-------------------|--------------------------|
    /// | `UPLOAD_DIR`      | `storage/uploads`        |
    /// | `PUBLIC_BASE_URL` | `http://localhost:8000`  |
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "storage/uploads".into())
            .into();
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());

        Self {
            upload_dir,
            public_base_url,
        }
    }
}

/// An image received in a multipart product form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Largest accepted product image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Content types accepted for product images.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

impl ImageUpload {
    pub fn is_allowed_type(&self) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&self.content_type.to_ascii_lowercase().as_str())
    }

    fn extension(&self) -> &'static str {
        match self.content_type.to_ascii_lowercase().as_str() {
            "image/png" => "png",
            _ => "jpg",
        }
    }
}

/// Writes uploaded images to disk and hands back their public URL.
#[derive(Debug, Clone)]
pub struct ImageStore {
    config: StorageConfig,
}

impl ImageStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.config.upload_dir
    }

    /// Persist the image and return where it lives.
    pub async fn save(&self, image: &ImageUpload) -> std::io::Result<StoredImage> {
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;

        let name = format!(
            "{}_{}.{}",
            file_stem(&image.file_name),
            Uuid::new_v4().simple(),
            image.extension()
        );
        tokio::fs::write(self.config.upload_dir.join(&name), &image.bytes).await?;

        tracing::debug!(file = %name, bytes = image.bytes.len(), "Stored product image");

        let url = format!(
            "{}{UPLOADS_ROUTE}/{name}",
            self.config.public_base_url.trim_end_matches('/')
        );
        Ok(StoredImage { name, url })
    }

    /// Delete a previously stored image. Failures are logged, not returned.
    pub async fn remove(&self, image: &StoredImage) {
        let path = self.config.upload_dir.join(&image.name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(file = %image.name, "Removed orphaned product image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(file = %image.name, error = %e, "Failed to remove product image"),
        }
    }
}

/// An image written by [`ImageStore::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// File name inside the upload directory.
    pub name: String,
    /// Public URL the file is served from.
    pub url: String,
}

/// Client file name without directories or extension, reduced to
/// `[A-Za-z0-9_-]`. Falls back to `image` when nothing usable remains.
fn file_stem(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    };
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: &str, content_type: &str) -> ImageUpload {
        ImageUpload {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[test]
    fn stem_drops_extension_and_directories() {
        assert_eq!(file_stem("photo.png"), "photo");
        assert_eq!(file_stem("archive.tar.gz"), "archive_tar");
        assert_eq!(file_stem("../../etc/passwd"), "passwd");
        assert_eq!(file_stem("C:\\pics\\cat.jpg"), "cat");
    }

    #[test]
    fn stem_falls_back_for_unusable_names() {
        assert_eq!(file_stem(""), "image");
        assert_eq!(file_stem(".png"), "_png");
        assert_eq!(file_stem("???.jpg"), "image");
    }

    #[test]
    fn only_jpeg_and_png_are_allowed() {
        assert!(upload("a.jpg", "image/jpeg").is_allowed_type());
        assert!(upload("a.jpg", "image/jpg").is_allowed_type());
        assert!(upload("a.png", "IMAGE/PNG").is_allowed_type());
        assert!(!upload("a.gif", "image/gif").is_allowed_type());
        assert!(!upload("a.txt", "text/plain").is_allowed_type());
    }

    #[tokio::test]
    async fn save_writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(StorageConfig {
            upload_dir: dir.path().join("nested"),
            public_base_url: "http://cdn.test/".to_string(),
        });

        let stored = store.save(&upload("shoe.png", "image/png")).await.unwrap();

        let prefix = "http://cdn.test/uploads/shoe_";
        assert!(stored.url.starts_with(prefix), "unexpected url {}", stored.url);
        assert!(stored.url.ends_with(&stored.name));
        assert!(stored.name.ends_with(".png"));

        let written = std::fs::read(dir.path().join("nested").join(&stored.name)).unwrap();
        assert_eq!(written, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn remove_deletes_the_file_and_tolerates_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(StorageConfig {
            upload_dir: dir.path().to_path_buf(),
            public_base_url: "http://localhost:8000".to_string(),
        });
        let stored = store.save(&upload("a.jpg", "image/jpeg")).await.unwrap();
        let path = dir.path().join(&stored.name);
        assert!(path.exists());

        store.remove(&stored).await;
        assert!(!path.exists());

        // A second removal is a no-op.
        store.remove(&stored).await;
    }

    #[tokio::test]
    async fn save_never_reuses_a_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(StorageConfig {
            upload_dir: dir.path().to_path_buf(),
            public_base_url: "http://localhost:8000".to_string(),
        });

        let first = store.save(&upload("a.jpg", "image/jpeg")).await.unwrap();
        let second = store.save(&upload("a.jpg", "image/jpeg")).await.unwrap();
        assert_ne!(first, second);
    }
}
