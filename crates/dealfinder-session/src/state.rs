//! SessionState: the numbered result set and its lookup indexes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use dealfinder_core::deal::Deal;

/// Topics retained per session, most recent last.
const MAX_TOPICS: usize = 10;

/// Per-session state. Owned exclusively by the orchestrator: created on
/// the first turn, refreshed after every successful synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// The last ranked set shown to the user, keyed by result number.
    pub numbered_results: BTreeMap<u32, Deal>,
    /// Lowercased clean name → result number.
    pub name_index: HashMap<String, u32>,
    /// Lowercased attribute token → result numbers carrying it.
    pub attribute_index: HashMap<String, Vec<u32>>,
    /// Recent conversation topics, most recent last.
    pub conversation_topics: Vec<String>,
    pub last_query: Option<String>,
}

impl SessionState {
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            numbered_results: BTreeMap::new(),
            name_index: HashMap::new(),
            attribute_index: HashMap::new(),
            conversation_topics: Vec::new(),
            last_query: None,
        }
    }

    /// Replace the numbered result set and rebuild both indexes.
    pub fn record_results(&mut self, query: &str, deals: &[Deal]) {
        self.numbered_results = deals
            .iter()
            .map(|d| (d.result_number, d.clone()))
            .collect();

        self.name_index = deals
            .iter()
            .filter(|d| !d.clean_name.is_empty())
            .map(|d| (d.clean_name.to_lowercase(), d.result_number))
            .collect();

        let mut attribute_index: HashMap<String, Vec<u32>> = HashMap::new();
        for deal in deals {
            for token in deal.descriptors.tokens() {
                attribute_index.entry(token).or_default().push(deal.result_number);
            }
        }
        self.attribute_index = attribute_index;

        self.last_query = Some(query.to_string());
        self.push_topic(query);
        self.last_activity = Utc::now();
    }

    /// Remember a topic, bounded, most recent last, no duplicates.
    pub fn push_topic(&mut self, topic: &str) {
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() {
            return;
        }
        self.conversation_topics.retain(|t| t != &topic);
        self.conversation_topics.push(topic);
        if self.conversation_topics.len() > MAX_TOPICS {
            self.conversation_topics.remove(0);
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    pub fn has_results(&self) -> bool {
        !self.numbered_results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealfinder_core::deal::Descriptors;

    fn deal(number: u32, name: &str, color: Option<&str>) -> Deal {
        Deal {
            result_number: number,
            result_id: format!("id{number:09}"),
            title: name.to_string(),
            clean_name: name.to_string(),
            price: "$10.00".to_string(),
            original_price: None,
            discount: None,
            store: "Amazon".to_string(),
            rating: None,
            url: String::new(),
            content: String::new(),
            keywords: vec![],
            descriptors: Descriptors {
                color: color.map(String::from),
                store: "Amazon".to_string(),
                ..Default::default()
            },
            verification: None,
            scoring: None,
        }
    }

    #[test]
    fn record_results_rebuilds_indexes() {
        let mut state = SessionState::new("s1".to_string());
        state.record_results(
            "phones",
            &[deal(1, "iPhone 15", Some("Blue")), deal(2, "Pixel 9", None)],
        );

        assert_eq!(state.numbered_results.len(), 2);
        assert_eq!(state.name_index.get("iphone 15"), Some(&1));
        assert_eq!(state.attribute_index.get("blue"), Some(&vec![1]));
        assert_eq!(state.last_query.as_deref(), Some("phones"));

        // A new set replaces everything.
        state.record_results("tablets", &[deal(1, "iPad", None)]);
        assert_eq!(state.numbered_results.len(), 1);
        assert!(state.name_index.get("iphone 15").is_none());
    }

    #[test]
    fn topics_are_bounded_and_deduped() {
        let mut state = SessionState::new("s1".to_string());
        for i in 0..15 {
            state.push_topic(&format!("topic {i}"));
        }
        assert_eq!(state.conversation_topics.len(), 10);

        state.push_topic("topic 14");
        assert_eq!(state.conversation_topics.last().unwrap(), "topic 14");
        assert_eq!(
            state.conversation_topics.iter().filter(|t| *t == "topic 14").count(),
            1
        );
    }
}
