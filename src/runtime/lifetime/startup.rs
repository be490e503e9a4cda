use std::sync::Arc;

use tracing::debug;

use crate::config::StaticConfig;
use crate::errors::Result;
use crate::services::{
    RandomCodeGenerator, Resolver, ShortenerService, ShortenerSettings, StatsService,
};
use crate::storage::{LinkStore, SlotBackend, StorageFactory};

/// Services shared by every execution mode
#[derive(Clone)]
pub struct StartupContext {
    pub store: Arc<LinkStore>,
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<Resolver>,
    pub stats: Arc<StatsService>,
}

impl StartupContext {
    /// Wire the services over an existing slot backend.
    pub fn with_backend(backend: Arc<dyn SlotBackend>, config: &StaticConfig) -> Self {
        let store = Arc::new(LinkStore::new(backend));
        let generator = Arc::new(RandomCodeGenerator::new(config.shortener.code_length));
        let shortener = Arc::new(ShortenerService::new(
            store.clone(),
            generator,
            ShortenerSettings::from_config(&config.shortener),
        ));

        Self {
            resolver: Arc::new(Resolver::new(store.clone())),
            stats: Arc::new(StatsService::new(store.clone())),
            shortener,
            store,
        }
    }
}

/// 准备启动上下文：创建存储后端并组装服务
pub fn prepare_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let backend = StorageFactory::create(&config.storage)?;
    let context = StartupContext::with_backend(backend, config);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(context)
}
