//! Text to QR module grid, backed by the `qrcode` crate.

use log::debug;
use qrcode::{EcLevel, QrCode};
use serde::Deserialize;

use crate::QrError;

/// Error correction level, from least to most redundant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl ErrorCorrection {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::Quartile, Self::High];
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => Self::L,
            ErrorCorrection::Medium => Self::M,
            ErrorCorrection::Quartile => Self::Q,
            ErrorCorrection::High => Self::H,
        }
    }
}

/// Square grid of QR modules, `true` meaning a dark module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
    level: ErrorCorrection,
}

impl ModuleGrid {
    /// Builds a grid from row-major modules. Returns `None` unless
    /// `modules.len() == size * size` and `size > 0`.
    pub fn from_modules(size: usize, modules: Vec<bool>, level: ErrorCorrection) -> Option<Self> {
        if size == 0 || size.checked_mul(size) != Some(modules.len()) {
            return None;
        }
        Some(Self {
            size,
            modules,
            level,
        })
    }

    fn from_code(code: &QrCode, level: ErrorCorrection) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();
        Self {
            size: code.width(),
            modules,
            level,
        }
    }

    /// Modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Level actually used for the symbol, after any boost.
    pub fn level(&self) -> ErrorCorrection {
        self.level
    }

    /// Whether the module at column `x`, row `y` is dark.
    ///
    /// Coordinates outside the grid read as light.
    pub fn module_at(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.modules[y * self.size + x]
    }
}

/// Encodes `text` at `level` using the smallest symbol version that fits.
///
/// With `boost` set, the level is then raised as far as possible without
/// moving to a larger version.
pub fn encode(text: &str, level: ErrorCorrection, boost: bool) -> Result<ModuleGrid, QrError> {
    let data = text.as_bytes();
    let code = QrCode::with_error_correction_level(data, level.into()).map_err(|err| match err {
        qrcode::types::QrError::DataTooLong => QrError::DataTooLong {
            len: data.len(),
            level,
        },
        other => QrError::Encode(other),
    })?;

    if !boost {
        return Ok(ModuleGrid::from_code(&code, level));
    }

    let version = code.version();
    let boosted = ErrorCorrection::ALL
        .iter()
        .rev()
        .take_while(|higher| **higher > level)
        .find_map(|higher| {
            QrCode::with_version(data, version, (*higher).into())
                .ok()
                .map(|code| (code, *higher))
        });

    match boosted {
        Some((code, higher)) => {
            debug!("Boosted error correction from {level:?} to {higher:?} at {version:?}");
            Ok(ModuleGrid::from_code(&code, higher))
        }
        None => Ok(ModuleGrid::from_code(&code, level)),
    }
}
