use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains published events in process; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::MemoryPublisher;

    #[tokio::test]
    async fn test_should_retain_published_events() {
        let publisher = MemoryPublisher::new();
        let shared = publisher.clone();
        let opened = DomainEvent::new(DomainEventType::Updated, "library_opened", "session", "test", &HashMap::new(), &1).expect("build event");
        let closed = DomainEvent::new(DomainEventType::Updated, "library_closed", "session", "test", &HashMap::new(), &1).expect("build event");
        publisher.publish(&opened).await.expect("should publish");
        publisher.publish(&closed).await.expect("should publish");
        assert_eq!(vec!["library_opened".to_string(), "library_closed".to_string()], shared.event_names());
    }
}
