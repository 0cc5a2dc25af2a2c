mod config;
mod job_queue;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use job_queue::{IJobQueue, InMemoryJobQueue};
pub use repos::{
    IJoinRecordRepo, IOccurrenceRepo, IPushNotificationRepo, IRoleRepo, ITemplateRepo, IUserRepo,
    Repos,
};
pub use services::{Channels, IChannelSender, RecordingChannelSender, RelayChannelSender};
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};

#[derive(Clone)]
pub struct HuddleContext {
    pub repos: Repos,
    pub config: Config,
    pub channels: Channels,
    pub job_queue: Arc<dyn IJobQueue>,
    pub sys: Arc<dyn ISys>,
}

/// Sets up the infrastructure context. The document store itself is an
/// external collaborator, so the repositories here are in memory behind the
/// repo traits; channel senders are built from the configured relay urls.
pub fn setup_context() -> HuddleContext {
    let config = Config::new();
    let channels = Channels::from_config(&config);
    HuddleContext {
        repos: Repos::create_inmemory(),
        config,
        channels,
        job_queue: Arc::new(InMemoryJobQueue::new()),
        sys: Arc::new(RealSys {}),
    }
}
