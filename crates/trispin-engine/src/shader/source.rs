use std::fs;
use std::path::{Path, PathBuf};

use super::{ShaderError, ShaderStage};

/// Raw source text of both stages, read from disk once.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    vertex: StageSource,
    fragment: StageSource,
}

#[derive(Debug, Clone)]
struct StageSource {
    path: PathBuf,
    text: String,
}

impl ShaderSources {
    /// Reads the vertex file, then the fragment file.
    ///
    /// The first unreadable file wins, so a missing vertex file is reported
    /// even when the fragment file is missing too.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex = read_stage(ShaderStage::Vertex, vertex_path.as_ref())?;
        let fragment = read_stage(ShaderStage::Fragment, fragment_path.as_ref())?;
        Ok(Self { vertex, fragment })
    }

    /// Builds sources from in-memory text; `path` values are for diagnostics only.
    #[cfg(test)]
    pub(crate) fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: StageSource {
                path: PathBuf::from("<vertex>"),
                text: vertex.into(),
            },
            fragment: StageSource {
                path: PathBuf::from("<fragment>"),
                text: fragment.into(),
            },
        }
    }

    pub fn text(&self, stage: ShaderStage) -> &str {
        &self.get(stage).text
    }

    pub fn path(&self, stage: ShaderStage) -> &Path {
        &self.get(stage).path
    }

    fn get(&self, stage: ShaderStage) -> &StageSource {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_stage(stage: ShaderStage, path: &Path) -> Result<StageSource, ShaderError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(StageSource {
            path: path.to_path_buf(),
            text,
        }),
        Err(source) => {
            log::error!("{stage} shader not found: {}", path.display());
            Err(ShaderError::SourceMissing {
                stage,
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn loads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(dir.path(), "a.vert", "vertex text");
        let fs_ = write(dir.path(), "a.frag", "fragment text");

        let sources = ShaderSources::load(&vs, &fs_).unwrap();
        assert_eq!(sources.text(ShaderStage::Vertex), "vertex text");
        assert_eq!(sources.text(ShaderStage::Fragment), "fragment text");
        assert_eq!(sources.path(ShaderStage::Fragment), fs_.as_path());
    }

    #[test]
    fn missing_vertex_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs_ = write(dir.path(), "a.frag", "fragment text");

        let err = ShaderSources::load(dir.path().join("nope.vert"), &fs_).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::SourceMissing { stage: ShaderStage::Vertex, .. }
        ));
    }

    #[test]
    fn missing_fragment_file() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(dir.path(), "a.vert", "vertex text");

        let err = ShaderSources::load(&vs, dir.path().join("nope.frag")).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::SourceMissing { stage: ShaderStage::Fragment, .. }
        ));
    }

    #[test]
    fn both_missing_reports_vertex() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShaderSources::load(dir.path().join("x.vert"), dir.path().join("x.frag"))
            .unwrap_err();
        assert_eq!(err.stage(), Some(ShaderStage::Vertex));
    }
}
