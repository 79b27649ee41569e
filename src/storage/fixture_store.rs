use crate::config::{DEFAULT_DATA_DIR_NAME, GeneratorConfig, WritePolicy};
use crate::document::Document;
use crate::document::identifier::DocumentId;
use crate::fake::FakeSource;
use crate::generator::FixtureGenerator;
use crate::result::FixtureResult;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Result of a save. `written` is false only when a write failure was swallowed
/// under [`WritePolicy::LogAndContinue`].
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub page_count: usize,
    pub written: bool,
    pub document: Document,
}

/// Writes fixtures as `<base_dir>/<data_dir_name>/data_<id>.json`.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    base_dir: PathBuf,
    data_dir_name: String,
    write_policy: WritePolicy,
}

impl FixtureStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            data_dir_name: DEFAULT_DATA_DIR_NAME.to_string(),
            write_policy: WritePolicy::default(),
        }
    }

    pub fn with_config(base_dir: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            data_dir_name: config.data_dir_name.clone(),
            write_policy: config.write_policy,
        }
    }

    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(&self.data_dir_name)
    }

    pub fn file_name(id: &DocumentId) -> String {
        format!("data_{}.json", id)
    }

    pub fn path_for(&self, id: &DocumentId) -> PathBuf {
        self.data_dir().join(Self::file_name(id))
    }

    /// Generate a document and write it to disk.
    ///
    /// Directory creation failures are always returned. A failed file write is returned
    /// under [`WritePolicy::Propagate`] and logged then reported as `written: false`
    /// under [`WritePolicy::LogAndContinue`]. Existing files are overwritten.
    pub async fn save_document<F: FakeSource>(
        &self,
        generator: &mut FixtureGenerator<F>,
        id: &DocumentId,
        page_count: u32,
    ) -> FixtureResult<SaveOutcome> {
        let document = generator.generate_document(id, page_count)?;
        let json = document.to_json_pretty()?;

        let dir = self.data_dir();
        tokio::fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), "data directory ready");

        let path = self.path_for(id);
        let written = match tokio::fs::write(&path, json.as_bytes()).await {
            Ok(()) => {
                info!(path = %path.display(), pages = document.pages.len(), "saved fixture");
                true
            }
            Err(e) => match self.write_policy {
                WritePolicy::Propagate => return Err(e.into()),
                WritePolicy::LogAndContinue => {
                    error!(path = %path.display(), error = %e, "failed to write fixture, continuing");
                    false
                }
            },
        };

        Ok(SaveOutcome {
            path,
            page_count: document.pages.len(),
            written,
            document,
        })
    }

    pub async fn save_document_str<F: FakeSource>(
        &self,
        generator: &mut FixtureGenerator<F>,
        id: &str,
        page_count: u32,
    ) -> FixtureResult<SaveOutcome> {
        let id = DocumentId::parse(id)?;
        self.save_document(generator, &id, page_count).await
    }

    pub async fn load(&self, id: &DocumentId) -> FixtureResult<Document> {
        load_document(&self.path_for(id)).await
    }
}

pub async fn load_document(path: &Path) -> FixtureResult<Document> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(Document::from_json(&text)?)
}
