use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub id: String,
    pub date: String,
    pub location: String,
    pub notes: String,
    /// Raw provider payload, never interpreted.
    pub weather: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct CreateWeatherRecord {
    pub date: String,
    pub location: String,
    pub notes: String,
    pub weather: serde_json::Value,
}

/// In-memory record store that lives as long as the process.
#[derive(Default)]
pub struct WeatherStore {
    records: RwLock<HashMap<String, WeatherRecord>>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: CreateWeatherRecord) -> WeatherRecord {
        let mut records = self.records.write().await;

        let mut id = Uuid::new_v4().to_string();
        while records.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let weather_record = WeatherRecord {
            id: id.clone(),
            date: record.date,
            location: record.location,
            notes: record.notes,
            weather: record.weather,
        };

        records.insert(id, weather_record.clone());
        weather_record
    }

    pub async fn get(&self, id: &str) -> Option<WeatherRecord> {
        self.records.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn sample() -> CreateWeatherRecord {
        CreateWeatherRecord {
            date: "2023-01-01".to_string(),
            location: "London".to_string(),
            notes: "test".to_string(),
            weather: json!({ "historical": {} }),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = WeatherStore::new();
        let record = store.insert(sample()).await;

        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(store.get(&record.id).await, Some(record));
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let store = WeatherStore::new();
        store.insert(sample()).await;
        assert!(store.get("does-not-exist").await.is_none());
    }

    #[tokio::test]
    async fn test_identical_inputs_get_distinct_ids() {
        let store = WeatherStore::new();
        let first = store.insert(sample()).await;
        let second = store.insert(sample()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_inserts() {
        let store = Arc::new(WeatherStore::new());
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(sample()).await.id })
            })
            .collect();

        for handle in handles {
            let id = handle.await.unwrap();
            assert!(store.get(&id).await.is_some());
        }
        assert_eq!(store.len().await, 32);
    }
}
