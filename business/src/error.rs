use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// The text does not fit in any symbol version at the requested level.
    #[error("text of {len} bytes does not fit in a QR code at {level:?} error correction")]
    DataTooLong { len: usize, level: crate::ErrorCorrection },
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

impl QrError {
    /// Short message suitable for showing next to the input field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DataTooLong { .. } => "Text is too long for a QR code",
            Self::Encode(_) => "Could not encode text as a QR code",
        }
    }
}
