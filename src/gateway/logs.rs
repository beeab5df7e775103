use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event as a structured log record.
#[derive(Debug)]
pub struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub(crate) fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(branch = self.branch_id.as_str(), event = event.name.as_str(), key = event.key.as_str(), "{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let publisher = LogPublisher::new("test");
        let event = DomainEvent::new(DomainEventType::Added, "card_issued", "members", "Clark Kent", &HashMap::new(), &"Clark Kent").expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}
