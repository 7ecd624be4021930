use std::path::Path;

use iced::widget::image::Handle;

use crate::api::ImageUpload;
use crate::error::PanelError;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let media_type = mime_guess::from_path(&file_name)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());

        Self {
            file_name,
            media_type,
            bytes,
        }
    }

    pub fn read(path: &Path) -> Result<Self, PanelError> {
        log::info!("Reading image file: {}", path.display());
        let bytes = std::fs::read(path).map_err(|err| {
            let message = format!("{}: failed to read file ({err})", path.display());
            log::error!("{message}");
            PanelError::Validation(message)
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(file_name, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

#[derive(Debug, Clone)]
pub struct PendingImage {
    file: SelectedFile,
    preview: Handle,
}

impl PendingImage {
    pub fn file_name(&self) -> &str {
        &self.file.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.file.media_type
    }

    #[cfg(test)]
    pub fn bytes(&self) -> &[u8] {
        &self.file.bytes
    }

    pub fn preview(&self) -> &Handle {
        &self.preview
    }

    pub fn to_upload(&self) -> ImageUpload {
        ImageUpload {
            file_name: self.file.file_name.clone(),
            media_type: self.file.media_type.clone(),
            bytes: self.file.bytes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum ImageAttachment {
    #[default]
    Empty,
    Attached(PendingImage),
}

impl ImageAttachment {
    /// Files whose media type is not `image/*` are rejected and the current
    /// state is kept.
    pub fn attach(&mut self, file: SelectedFile) -> Result<(), PanelError> {
        if !file.is_image() {
            log::warn!(
                "Rejected {} with media type {}",
                file.file_name,
                file.media_type
            );
            return Err(PanelError::validation("Please select an image file"));
        }

        log::debug!("Attached {} ({} bytes)", file.file_name, file.bytes.len());
        let preview = Handle::from_bytes(file.bytes.clone());
        *self = Self::Attached(PendingImage { file, preview });
        Ok(())
    }

    pub fn clear(&mut self) {
        if self.is_attached() {
            log::debug!("Cleared pending image");
        }
        *self = Self::Empty;
    }

    pub fn pending(&self) -> Option<&PendingImage> {
        match self {
            Self::Empty => None,
            Self::Attached(image) => Some(image),
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZone {
    #[default]
    Idle,
    Hovering,
}
