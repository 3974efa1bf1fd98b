//! Object storage for generated reports.
//!
//! The store holds no state for this service beyond the uploaded PDFs; a
//! report is uploaded once, identified by its storage key, and fetched back
//! by human filename on the download path.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Presigned share links live for the S3 maximum of 7 days.
const SHARE_URL_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Result of a successful upload: storage identifier plus a shareable link.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub file_id: String,
    pub url: String,
}

/// A file fetched back from the store.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub content: Bytes,
    pub content_type: String,
}

/// Narrow interface over the cloud file store. Held in `AppState` as
/// `Arc<dyn FileStore>`; router tests substitute an in-memory map.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stores `content` under `filename` and returns its id and a shareable
    /// URL.
    async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredUpload, AppError>;

    /// Fetches a file by exact filename. `Ok(None)` means the name is
    /// unknown; transport failures are errors.
    async fn download(&self, filename: &str) -> Result<Option<StoredFile>, AppError>;
}

/// S3-compatible object store (MinIO locally, AWS in production).
pub struct S3FileStore {
    client: S3Client,
    bucket: String,
    prefix: Option<String>,
}

impl S3FileStore {
    pub fn new(client: S3Client, bucket: String, prefix: Option<String>) -> Self {
        Self {
            client,
            bucket,
            prefix,
        }
    }

    /// Object key for a filename, under the configured destination prefix.
    fn object_key(&self, filename: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}/{}", prefix.trim_end_matches('/'), filename),
            None => filename.to_string(),
        }
    }
}

#[async_trait]
impl FileStore for S3FileStore {
    async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredUpload, AppError> {
        let key = self.object_key(filename);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload PDF to storage: {e}")))?;

        // Shareable link: a presigned GET stands in for a public-reader grant.
        let presign_config = PresigningConfig::expires_in(SHARE_URL_TTL)
            .map_err(|e| AppError::Storage(format!("Invalid presigning configuration: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .presigned(presign_config)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create shareable link: {e}")))?;

        info!("Report stored at {key}");

        Ok(StoredUpload {
            file_id: key,
            url: presigned.uri().to_string(),
        })
    }

    async fn download(&self, filename: &str) -> Result<Option<StoredFile>, AppError> {
        let key = self.object_key(filename);

        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(AppError::Storage(format!(
                    "Failed to download file from storage: {service_err}"
                )));
            }
        };

        let content_type = output
            .content_type()
            .unwrap_or("application/pdf")
            .to_string();

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to read file from storage: {e}")))?;

        Ok(Some(StoredFile {
            content: data.into_bytes(),
            content_type,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_store(prefix: Option<&str>) -> S3FileStore {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .no_credentials()
            .load()
            .await;
        S3FileStore::new(
            S3Client::new(&config),
            "career-reports".to_string(),
            prefix.map(|p| p.to_string()),
        )
    }

    #[tokio::test]
    async fn test_object_key_without_prefix() {
        let store = make_store(None).await;
        assert_eq!(store.object_key("Asha_Career_Report.pdf"), "Asha_Career_Report.pdf");
    }

    #[tokio::test]
    async fn test_object_key_with_prefix() {
        let store = make_store(Some("reports")).await;
        assert_eq!(
            store.object_key("Asha_Career_Report.pdf"),
            "reports/Asha_Career_Report.pdf"
        );
    }

    #[tokio::test]
    async fn test_object_key_trims_trailing_slash() {
        let store = make_store(Some("reports/")).await;
        assert_eq!(
            store.object_key("Asha_Career_Report.pdf"),
            "reports/Asha_Career_Report.pdf"
        );
    }
}
