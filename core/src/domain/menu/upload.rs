use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

/// Largest accepted menu-board image.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^.]+$").unwrap());

static NAME_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_.\-]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub size_bytes: u64,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }

    pub fn check_size(&self) -> Result<(), CoreError> {
        if self.size_bytes > MAX_IMAGE_BYTES {
            tracing::warn!(
                "Rejected image {}: {} bytes exceeds {}",
                self.file_name,
                self.size_bytes,
                MAX_IMAGE_BYTES
            );
            return Err(CoreError::FileTooLarge);
        }

        Ok(())
    }

    pub fn menu_guess(&self) -> String {
        menu_guess_from_file_name(&self.file_name)
    }
}

/// Turns an uploaded file name into delimiter-separated menu text,
/// e.g. `김치찌개_된장찌개.png` becomes `김치찌개, 된장찌개`.
pub fn menu_guess_from_file_name(file_name: &str) -> String {
    let stem = EXTENSION.replace(file_name, "");
    NAME_SEPARATORS.replace_all(&stem, ", ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_strips_extension_and_splits_separators() {
        assert_eq!(
            menu_guess_from_file_name("김치찌개_된장찌개-제육볶음.png"),
            "김치찌개, 된장찌개, 제육볶음"
        );
    }

    #[test]
    fn test_guess_only_strips_last_extension() {
        assert_eq!(menu_guess_from_file_name("lunch.menu.jpg"), "lunch, menu");
    }

    #[test]
    fn test_guess_without_extension() {
        assert_eq!(menu_guess_from_file_name("비빔밥"), "비빔밥");
    }

    #[test]
    fn test_size_limit() {
        assert!(ImageAttachment::new("a.png", MAX_IMAGE_BYTES).check_size().is_ok());
        assert_eq!(
            ImageAttachment::new("a.png", MAX_IMAGE_BYTES + 1).check_size(),
            Err(CoreError::FileTooLarge)
        );
    }
}
