use crate::InputError;

/// A user-selected local file, read into memory by the host.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    file_name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap a file the host has read.
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Name the user picked.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Media type reported by the host, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Check the selection before it becomes a capture session.
    ///
    /// The media type is checked first, then the size ceiling.
    pub fn validate(&self, max_bytes: u64) -> Result<(), InputError> {
        if !is_image_media_type(&self.media_type) {
            return Err(InputError::InvalidFileType {
                media_type: self.media_type.clone(),
            });
        }

        if self.size() > max_bytes {
            return Err(InputError::FileTooLarge {
                size: self.size(),
                limit: max_bytes,
            });
        }

        Ok(())
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// `image/<subtype>` with a non-empty token subtype and no parameters.
fn is_image_media_type(media_type: &str) -> bool {
    let Some((top, subtype)) = media_type.split_once('/') else {
        return false;
    };

    top.eq_ignore_ascii_case("image")
        && !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$&^_.+-".contains(c))
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
