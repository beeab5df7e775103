use serde::{Deserialize, Serialize};
use crate::core::library::Day;

// Calendar is the logical clock of a library; it only moves forward, one day per opening.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Calendar {
    current_day: Day,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_day(&self) -> Day {
        self.current_day
    }

    pub fn advance(&mut self) -> Day {
        self.current_day += 1;
        self.current_day
    }
}

#[cfg(test)]
mod tests {
    use crate::calendar::Calendar;

    #[tokio::test]
    async fn test_should_initialize_and_advance() {
        let mut calendar = Calendar::new();
        assert_eq!(0, calendar.current_day());
        assert_eq!(1, calendar.advance());
        assert_eq!(2, calendar.advance());
        assert_eq!(2, calendar.current_day());
    }

    #[tokio::test]
    async fn test_should_not_share_state_between_instances() {
        let mut first = Calendar::new();
        first.advance();
        let second = Calendar::new();
        assert_eq!(1, first.current_day());
        assert_eq!(0, second.current_day());
    }
}
