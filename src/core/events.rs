use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for library state changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent abstracts domain event for a completed library transaction
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    /// Builds an event for a library transaction, with `data` stored as its JSON payload.
    pub fn new<T: Serialize>(kind: DomainEventType, name: &str, group: &str, key: &str,
                             metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_event() {
        let metadata = HashMap::from([("branch_id".to_string(), "test".to_string())]);
        let event = DomainEvent::new(DomainEventType::Added, "card_issued", "members", "Bruce Banner",
                                     &metadata, &"Bruce Banner").expect("build event");
        assert_eq!("card_issued", event.name.as_str());
        assert_eq!("members", event.group.as_str());
        assert_eq!("Bruce Banner", event.key.as_str());
        assert_eq!("\"Bruce Banner\"", event.json_data.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(Some(&"test".to_string()), event.metadata.get("branch_id"));
    }

    #[tokio::test]
    async fn test_should_give_each_event_its_own_id() {
        let first = DomainEvent::new(DomainEventType::Updated, "books_renewed", "loans", "Bruce Banner",
                                     &HashMap::new(), &vec![1, 2]).expect("build event");
        let second = DomainEvent::new(DomainEventType::Deleted, "books_returned", "loans", "Bruce Banner",
                                      &HashMap::new(), &vec![3]).expect("build event");
        assert_eq!("[1,2]", first.json_data.as_str());
        assert_ne!(first.event_id, second.event_id);
    }

    #[tokio::test]
    async fn test_should_serialize_event() {
        let event = DomainEvent::new(DomainEventType::Updated, "library_opened", "session", "test",
                                     &HashMap::new(), &1).expect("build event");
        let json = serde_json::to_string(&event).expect("serialize event");
        let parsed: DomainEvent = serde_json::from_str(json.as_str()).expect("parse event");
        assert_eq!(event, parsed);
    }
}
