use crate::config::GeneratorConfig;
use crate::document::identifier::DocumentId;
use crate::document::status::PageStatus;
use crate::document::{Document, Page};
use crate::error::FixtureError;
use crate::fake::{FakeSource, RandomFaker};
use crate::result::FixtureResult;
use tracing::debug;

/// Builds fixture documents in memory. Holds no state between calls beyond its fake source.
pub struct FixtureGenerator<F: FakeSource> {
    faker: F,
    config: GeneratorConfig,
}

impl FixtureGenerator<RandomFaker> {
    /// A generator anchored at the current time, seeded from `config.seed` when present.
    pub fn from_config(config: GeneratorConfig) -> Self {
        let faker = RandomFaker::now(config.seed, config.past_days);
        Self::new(faker, config)
    }
}

impl<F: FakeSource> FixtureGenerator<F> {
    pub fn new(faker: F, config: GeneratorConfig) -> Self {
        Self { faker, config }
    }

    pub fn generate_page(&mut self, id: &DocumentId, position: u32) -> FixtureResult<Page> {
        if position == 0 {
            return Err(FixtureError::InvalidPosition(position));
        }

        let page = Page {
            id: id.page_id(position),
            index: id.page_index(position)?,
            src: id.image_src(&self.config.image_base_url),
            status: PageStatus::Preprocessed,
            updated_at: self.faker.past_timestamp(),
            created_at: self.faker.past_timestamp(),
        };
        debug!(page_id = %page.id, index = %page.index, "generated page");
        Ok(page)
    }

    pub fn generate_document(&mut self, id: &DocumentId, page_count: u32) -> FixtureResult<Document> {
        let title = self.faker.words(self.config.title_words);
        let description = self.faker.sentence();
        let updated_at = self.faker.past_timestamp();
        let created_at = self.faker.past_timestamp();

        let pages = (1..=page_count)
            .map(|position| self.generate_page(id, position))
            .collect::<FixtureResult<Vec<_>>>()?;

        debug!(document_id = %id, pages = pages.len(), "generated document");
        Ok(Document {
            id: id.to_string(),
            title,
            description,
            updated_at,
            created_at,
            pages,
        })
    }

    /// Parse `id` and generate; a malformed identifier is an error, never a partial document.
    pub fn generate_document_str(&mut self, id: &str, page_count: u32) -> FixtureResult<Document> {
        let id = DocumentId::parse(id)?;
        self.generate_document(&id, page_count)
    }
}
