use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// Kind of COBOL source file, which decides how it gets compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FileType {
    /// A main program, compiled to an executable.
    #[default]
    Executable,
    /// A callable subprogram, compiled to a dynamic module.
    Module,
}

impl FileType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Executable => "Executable",
            Self::Module => "Module",
        }
    }

    pub fn all() -> &'static [FileType] {
        &[Self::Executable, Self::Module]
    }
}

/// Text encodings a source file can be loaded and saved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Decode bytes with this encoding. Latin-1 never fails.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| AppError::Encoding(format!("invalid utf-8: {}", e))),
            Self::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        AppError::Encoding(format!(
                            "character U+{:04X} not representable in {}",
                            u32::from(c),
                            self.name()
                        ))
                    })
                })
                .collect(),
        }
    }

    /// Decode as UTF-8 when valid, otherwise fall back to Latin-1.
    pub fn detect_and_decode(bytes: &[u8]) -> (Self, String) {
        match std::str::from_utf8(bytes) {
            Ok(text) => (Self::Utf8, text.to_string()),
            Err(_) => (Self::Latin1, bytes.iter().map(|&b| b as char).collect()),
        }
    }
}
