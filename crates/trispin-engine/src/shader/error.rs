use std::fmt;
use std::io;
use std::path::PathBuf;

use super::ShaderStage;

/// Why a shader program could not be built.
///
/// Every variant is terminal: no partially built program exists once one of
/// these is returned.
#[derive(Debug)]
pub enum ShaderError {
    /// A stage's source file could not be read.
    SourceMissing {
        stage: ShaderStage,
        path: PathBuf,
        source: io::Error,
    },
    /// A stage failed to parse or validate. `log` is the compiler diagnostic.
    Compile { stage: ShaderStage, log: String },
    /// The stages could not be combined into a program.
    Link { log: String },
}

impl ShaderError {
    /// The stage the failure is attributed to, if any (link errors span both).
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::SourceMissing { stage, .. } | ShaderError::Compile { stage, .. } => {
                Some(*stage)
            }
            ShaderError::Link { .. } => None,
        }
    }

    /// Compiler/linker diagnostic text. Empty for missing sources.
    pub fn diagnostic_log(&self) -> &str {
        match self {
            ShaderError::SourceMissing { .. } => "",
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => log,
        }
    }

    pub(crate) fn link(log: impl Into<String>) -> Self {
        ShaderError::Link { log: log.into() }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::SourceMissing { stage, path, .. } => {
                write!(f, "{stage} shader not found: {}", path.display())
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "failed to compile {stage} shader:\n{log}")
            }
            ShaderError::Link { log } => write!(f, "failed to link program:\n{log}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::SourceMissing { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_names_stage_and_path() {
        let err = ShaderError::SourceMissing {
            stage: ShaderStage::Fragment,
            path: PathBuf::from("shaders/none.frag"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "fragment shader not found: shaders/none.frag");
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn link_error_has_no_stage() {
        let err = ShaderError::link("location 1 unmatched");
        assert_eq!(err.stage(), None);
        assert_eq!(err.diagnostic_log(), "location 1 unmatched");
    }
}
