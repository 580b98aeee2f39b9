use std::fs;
use std::path::{Path, PathBuf};

use super::file_filters::{FilterKind, ensure_extension};
use crate::app::infrastructure::error::{AppError, Result};

/// Starting content for a new source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    Program,
    Module,
    Empty,
}

impl Template {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Module => "Module",
            Self::Empty => "Empty",
        }
    }

    pub fn all() -> &'static [Template] {
        &[Self::Program, Self::Module, Self::Empty]
    }

    /// Template behind the `index`-th choice of a dialog listing `all()`.
    pub fn from_index(index: i32) -> Option<Template> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
    }

    /// Render the template with `program_id` as PROGRAM-ID.
    pub fn render(&self, program_id: &str) -> String {
        let body = match self {
            Self::Program => PROGRAM_TEMPLATE,
            Self::Module => MODULE_TEMPLATE,
            Self::Empty => return String::new(),
        };
        body.replace("{PROGRAM_ID}", program_id)
    }
}

const PROGRAM_TEMPLATE: &str = "      ******************************************************************
      * Author:
      * Date:
      * Purpose:
      * Tectonics: cobc
      ******************************************************************
       IDENTIFICATION DIVISION.
       PROGRAM-ID. {PROGRAM_ID}.
       DATA DIVISION.
       FILE SECTION.
       WORKING-STORAGE SECTION.
       PROCEDURE DIVISION.
       MAIN-PROCEDURE.
            DISPLAY \"Hello world\"
            STOP RUN.
       END PROGRAM {PROGRAM_ID}.
";

const MODULE_TEMPLATE: &str = "      ******************************************************************
      * Author:
      * Date:
      * Purpose:
      * Tectonics: cobc
      ******************************************************************
       IDENTIFICATION DIVISION.
       PROGRAM-ID. {PROGRAM_ID}.
       DATA DIVISION.
       FILE SECTION.
       WORKING-STORAGE SECTION.
       LINKAGE SECTION.
       01 PARAMETRES.
           02 PA-RETURN-CODE PIC 99 VALUE 0.
       PROCEDURE DIVISION USING PARAMETRES.
       MAIN-PROCEDURE.
            DISPLAY \"In {PROGRAM_ID}\"
            MOVE 0 TO PA-RETURN-CODE
            GOBACK.
       END PROGRAM {PROGRAM_ID}.
";

/// What the new-file wizard collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRequest {
    pub directory: String,
    pub name: String,
    pub template: Template,
}

impl NewFileRequest {
    /// Destination path, with `.cbl` appended to extension-less names.
    pub fn target_path(&self) -> PathBuf {
        let joined = Path::new(&self.directory).join(&self.name);
        PathBuf::from(ensure_extension(&joined.to_string_lossy(), FilterKind::Cobol))
    }

    /// PROGRAM-ID derived from the file stem, upper-cased with spaces turned
    /// into dashes.
    pub fn program_id(&self) -> String {
        let target = self.target_path();
        let stem = target
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        stem.trim().replace([' ', '_'], "-").to_uppercase()
    }
}

/// Create the requested file on disk and return its path.
///
/// Fails with `FileExists` unless `overwrite` is set.
pub fn create_new_file(request: &NewFileRequest, overwrite: bool) -> Result<PathBuf> {
    if request.name.trim().is_empty() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "file name is empty",
        )));
    }
    let path = request.target_path();
    if path.exists() && !overwrite {
        return Err(AppError::FileExists(path.to_string_lossy().to_string()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, request.template.render(&request.program_id()))?;
    tracing::info!("created {} from {} template", path.display(), request.template.display_name());
    Ok(path)
}
