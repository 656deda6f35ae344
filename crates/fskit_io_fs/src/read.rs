//! Bounded head reads with UTF-8-safe decoding.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::spec::FsOpError;

/// Read at most `limit` bytes from the start of the file at `path`.
///
/// Equivalent to the `head -c` utility: the returned buffer holds the first
/// `min(limit, file size)` bytes, exactly as stored. No decoding is
/// performed.
pub fn head<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<u8>, FsOpError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FsOpError::from_io(path, e))?;
    read_bounded(path, file, limit)
}

/// Read at most `limit` bytes from the file at `path` and decode them as
/// UTF-8.
///
/// Invalid byte sequences are replaced with U+FFFD, one replacement character
/// per maximal invalid subsequence rather than one per byte. A read that cuts
/// a multi-byte codepoint at the `limit` boundary therefore ends in exactly
/// one U+FFFD; invalid bytes are never passed through and never dropped
/// silently. The result is always valid UTF-8.
pub fn head_to_string<P: AsRef<Path>>(path: P, limit: usize) -> Result<String, FsOpError> {
    let raw_head = head(path, limit)?;
    Ok(String::from_utf8_lossy(&raw_head).into_owned())
}

/// Same as [`head_to_string`], appending `truncation_message` when the file
/// holds more than `limit` bytes.
///
/// The file's total size is taken from the opened handle's metadata; the
/// message is appended after decoding, if and only if that size exceeds
/// `limit`. A file of `limit` bytes or fewer is returned whole, unmodified.
pub fn head_to_string_with_message<P: AsRef<Path>>(
    path: P,
    limit: usize,
    truncation_message: &str,
) -> Result<String, FsOpError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FsOpError::from_io(path, e))?;
    let n_size_total = file
        .metadata()
        .map_err(|e| FsOpError::from_io(path, e))?
        .len();

    let raw_head = read_bounded(path, file, limit)?;
    let mut text_head = String::from_utf8_lossy(&raw_head).into_owned();
    if n_size_total > limit as u64 {
        text_head.push_str(truncation_message);
    }
    Ok(text_head)
}

fn read_bounded(path: &Path, file: File, limit: usize) -> Result<Vec<u8>, FsOpError> {
    let mut raw_head = Vec::new();
    file.take(limit as u64)
        .read_to_end(&mut raw_head)
        .map_err(|e| FsOpError::from_io(path, e))?;
    Ok(raw_head)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{head, head_to_string, head_to_string_with_message};
    use crate::spec::FsOpError;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("fskit_read_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn write_bytes(path: &Path, raw: &[u8]) {
        std::fs::write(path, raw).expect("write bytes");
    }

    #[test]
    fn head_returns_exactly_the_first_limit_bytes() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("hundred.bin");
        let raw_content: Vec<u8> = (0u8..100).collect();
        write_bytes(&path_file, &raw_content);

        let raw_head = head(&path_file, 10).expect("head");
        assert_eq!(raw_head, &raw_content[..10]);
    }

    #[test]
    fn head_short_file_returns_whole_content() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("short.bin");
        write_bytes(&path_file, b"hello");

        let raw_head = head(&path_file, 10).expect("head");
        assert_eq!(raw_head, b"hello");
    }

    #[test]
    fn head_zero_limit_returns_empty_buffer() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("short.bin");
        write_bytes(&path_file, b"hello");

        let raw_head = head(&path_file, 0).expect("head");
        assert!(raw_head.is_empty());
    }

    #[test]
    fn head_missing_file_is_not_found() {
        let tmp = TestDir::new();
        let err = head(tmp.path().join("no_such.bin"), 10).expect_err("missing must fail");
        assert!(matches!(err, FsOpError::NotFound(_)));
    }

    #[test]
    fn head_to_string_substitutes_mid_codepoint_truncation() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("greek.txt");
        // Five alphas, two bytes each; limit 5 cuts the third one in half.
        write_bytes(&path_file, "ααααα".as_bytes());

        let text_head = head_to_string(&path_file, 5).expect("head to string");
        assert_eq!(text_head, "αα\u{FFFD}");
    }

    #[test]
    fn head_to_string_collapses_invalid_sequence_to_one_marker() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("torn.bin");
        // E2 82 is a maximal subpart of the three-byte Euro sign sequence.
        write_bytes(&path_file, b"ab\xE2\x82hi");

        let text_head = head_to_string(&path_file, 10).expect("head to string");
        assert_eq!(text_head, "ab\u{FFFD}hi");
    }

    #[test]
    fn head_to_string_valid_content_is_unchanged() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("plain.txt");
        write_bytes(&path_file, b"plain ascii");

        let text_head = head_to_string(&path_file, 1024).expect("head to string");
        assert_eq!(text_head, "plain ascii");
    }

    #[test]
    fn head_with_message_skips_message_when_file_fits() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("five.txt");
        write_bytes(&path_file, b"abcde");

        let text_head =
            head_to_string_with_message(&path_file, 10, "...[truncated]").expect("head");
        assert_eq!(text_head, "abcde");
    }

    #[test]
    fn head_with_message_skips_message_at_exact_limit() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("ten.txt");
        write_bytes(&path_file, b"abcdefghij");

        let text_head =
            head_to_string_with_message(&path_file, 10, "...[truncated]").expect("head");
        assert_eq!(text_head, "abcdefghij");
    }

    #[test]
    fn head_with_message_appends_when_file_exceeds_limit() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("twenty.txt");
        write_bytes(&path_file, b"abcdefghijklmnopqrst");

        let text_head =
            head_to_string_with_message(&path_file, 10, "...[truncated]").expect("head");
        assert_eq!(text_head, "abcdefghij...[truncated]");
    }

    #[test]
    fn head_with_message_substitutes_before_appending() {
        let tmp = TestDir::new();
        let path_file = tmp.path().join("greek_long.txt");
        // 20 bytes total; limit 5 cuts the third alpha in half.
        write_bytes(&path_file, "αααααααααα".as_bytes());

        let text_head = head_to_string_with_message(&path_file, 5, "…").expect("head");
        assert_eq!(text_head, "αα\u{FFFD}…");
    }
}
