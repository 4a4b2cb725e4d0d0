//! Exercises the real S3 code path against a local MinIO:
//!
//! ```bash
//! docker run -d -p 9000:9000 -e MINIO_ROOT_USER=minioadmin \
//!   -e MINIO_ROOT_PASSWORD=minioadmin minio/minio server /data
//! ```

use aws_sdk_s3::config::{Credentials, Region};
use clipdrop::services::storage::{ObjectStorage, S3Storage};
use std::time::Duration;

#[tokio::test]
#[ignore = "Requires a running MinIO at 127.0.0.1:9000"]
async fn test_single_put_and_presigned_get() {
    let config = aws_config::from_env()
        .endpoint_url("http://127.0.0.1:9000")
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "minioadmin",
            "minioadmin",
            None,
            None,
            "static",
        ))
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(true)
        .build();
    let client = aws_sdk_s3::Client::from_conf(s3_config);

    let bucket = "clipdrop-test";
    if client.head_bucket().bucket(bucket).send().await.is_err() {
        client.create_bucket().bucket(bucket).send().await.unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    tokio::fs::write(&file, b"hello from clipdrop").await.unwrap();

    let storage = S3Storage::new(client.clone(), bucket.to_string());
    storage
        .upload_file("it/hello.txt", &file, "text/plain")
        .await
        .unwrap();

    let url = storage
        .presign_download(
            "it/hello.txt",
            "inline; filename=\"hello.txt\"",
            Duration::from_secs(600),
        )
        .await
        .unwrap();

    assert!(url.starts_with("http://127.0.0.1:9000/clipdrop-test/it/hello.txt"));
    assert!(url.contains("X-Amz-Signature="));
    assert!(url.contains("response-content-disposition="));

    client
        .delete_object()
        .bucket(bucket)
        .key("it/hello.txt")
        .send()
        .await
        .unwrap();
}
