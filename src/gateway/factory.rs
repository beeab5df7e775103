use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::LogPublisher;
use crate::gateway::memory::MemoryPublisher;

// publishers are shared by every request served from the same library instance
pub fn create_publisher(config: &Configuration) -> Arc<dyn EventPublisher> {
    match config.publisher {
        GatewayPublisherVia::Logs => {
            Arc::new(LogPublisher::new(config.branch_id.as_str()))
        }
        GatewayPublisherVia::Memory => {
            Arc::new(MemoryPublisher::new())
        }
    }
}
