use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub mod auth_env;
pub mod config;
pub mod document;
pub mod error;
pub mod fake;
pub mod generator;
pub mod result;
pub mod storage;

pub use config::{GeneratorConfig, WritePolicy};
pub use document::identifier::{DocumentId, IdentifierError};
pub use document::status::PageStatus;
pub use document::{Document, Page};
pub use error::FixtureError;
pub use fake::{FakeSource, RandomFaker};
pub use generator::FixtureGenerator;
pub use result::FixtureResult;
pub use storage::{FixtureStore, SaveOutcome};

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    info!("Tracing initialized");
}
