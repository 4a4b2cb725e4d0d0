use crate::error::AppError;
use crate::utils::content_type::Disposition;
use std::path::Path;

/// Checks that `path` is an uploadable regular file within the size limit.
///
/// Stat failures (missing file, dangling symlink, permission denied) and
/// non-regular targets (directories, devices) are all reported as `NotAFile`.
/// Returns the file size on success.
pub async fn validate_file(path: &Path, max_bytes: u64) -> Result<u64, AppError> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|_| AppError::NotAFile)?;

    if !meta.is_file() {
        return Err(AppError::NotAFile);
    }

    check_size(meta.len(), max_bytes)?;
    Ok(meta.len())
}

/// Size policy for the single PUT. A file exactly at the limit is accepted.
pub fn check_size(size: u64, max_bytes: u64) -> Result<(), AppError> {
    if size > max_bytes {
        return Err(AppError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Sanitizes a filename for use inside a quoted Content-Disposition value.
///
/// CR/LF are stripped (header injection), backslashes and double quotes are
/// escaped. Backslashes first, so quote escapes are not escaped twice.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\r' | '\n' => {}
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the Content-Disposition value the signed URL forces on responses.
pub fn content_disposition(disposition: Disposition, original_name: &str) -> String {
    format!(
        "{}; filename=\"{}\"",
        disposition,
        sanitize_filename(original_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size_boundary() {
        const LIMIT: u64 = 5 * 1024 * 1024 * 1024;
        assert!(check_size(0, LIMIT).is_ok());
        assert!(check_size(LIMIT, LIMIT).is_ok());

        let err = check_size(LIMIT + 1, LIMIT).unwrap_err();
        assert!(matches!(err, AppError::TooLarge { .. }));
        assert_eq!(
            err.to_string(),
            "File is larger than 5 GB (single PUT limit)"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("my file.doc"), "my file.doc");

        // CR/LF stripped entirely
        assert_eq!(sanitize_filename("evil\r\nname.txt"), "evilname.txt");
        assert_eq!(sanitize_filename("a\rb\nc"), "abc");

        // Quotes and backslashes escaped
        assert_eq!(sanitize_filename("say \"hi\".txt"), "say \\\"hi\\\".txt");
        assert_eq!(sanitize_filename("back\\slash"), "back\\\\slash");
        assert_eq!(sanitize_filename("a\"b\\c\r\n.pdf"), "a\\\"b\\\\c.pdf");
    }

    #[test]
    fn test_sanitized_output_has_no_raw_crlf_or_bare_quotes() {
        let hostile = "inject\"ion\\attempt\r\nSet-Cookie: x";
        let cleaned = sanitize_filename(hostile);
        assert!(!cleaned.contains('\r'));
        assert!(!cleaned.contains('\n'));
        // Every quote and backslash in the output is part of an escape pair
        let bytes = cleaned.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    assert!(matches!(bytes.get(i + 1), Some(b'\\') | Some(b'"')));
                    i += 2;
                }
                b'"' => panic!("unescaped quote in {:?}", cleaned),
                _ => i += 1,
            }
        }
    }

    #[test]
    fn test_content_disposition_format() {
        assert_eq!(
            content_disposition(Disposition::Inline, "report.pdf"),
            "inline; filename=\"report.pdf\""
        );
        assert_eq!(
            content_disposition(Disposition::Attachment, "data.bin"),
            "attachment; filename=\"data.bin\""
        );
        assert_eq!(
            content_disposition(Disposition::Attachment, "odd\"name\r\n.zip"),
            "attachment; filename=\"odd\\\"name.zip\""
        );
    }

    #[tokio::test]
    async fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ok.txt");
        tokio::fs::write(&file, b"hello").await.unwrap();

        assert_eq!(validate_file(&file, 1024).await.unwrap(), 5);

        // Exactly at the limit
        assert_eq!(validate_file(&file, 5).await.unwrap(), 5);

        // One byte over
        let err = validate_file(&file, 4).await.unwrap_err();
        assert!(matches!(err, AppError::TooLarge { size: 5, limit: 4 }));

        // Directories and missing paths are both "not a file"
        let err = validate_file(dir.path(), 1024).await.unwrap_err();
        assert!(matches!(err, AppError::NotAFile));
        let err = validate_file(&dir.path().join("nope"), 1024).await.unwrap_err();
        assert!(matches!(err, AppError::NotAFile));
    }
}
