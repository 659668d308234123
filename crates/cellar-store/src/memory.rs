use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::traits::{ClientError, ObjectClient, ObjectMeta};

#[derive(Clone)]
struct StoredObject {
    data: Vec<u8>,
    modified: DateTime<Utc>,
}

/// In-memory, HashMap-based object client.
///
/// Intended for tests and embedding. All objects are held in memory
/// behind a `RwLock` for safe concurrent access. Like a real object
/// store, writes to the same name are last-write-wins and a delete of an
/// absent object reports not-found.
pub struct InMemoryObjectClient {
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryObjectClient {
    /// Create a new empty client.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Remove all objects.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }

    /// Sorted names of every stored object.
    pub fn names(&self) -> Vec<String> {
        let map = self.objects.read().expect("lock poisoned");
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for InMemoryObjectClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectClient for InMemoryObjectClient {
    async fn put(&self, name: &str, payload: Vec<u8>) -> Result<(), ClientError> {
        let mut map = self.objects.write().expect("lock poisoned");
        map.insert(
            name.to_string(),
            StoredObject {
                data: payload,
                modified: Utc::now(),
            },
        );
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Vec<u8>, ClientError> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(name)
            .map(|obj| obj.data.clone())
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn delete(&self, name: &str) -> Result<(), ClientError> {
        let mut map = self.objects.write().expect("lock poisoned");
        map.remove(name)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn stat(&self, name: &str) -> Result<ObjectMeta, ClientError> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(name)
            .map(|obj| ObjectMeta {
                size: obj.data.len() as u64,
                modified: obj.modified,
            })
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn list(&self, prefix: &str, recursive: bool) -> Result<Vec<String>, ClientError> {
        let map = self.objects.read().expect("lock poisoned");
        let mut names: Vec<String> = map
            .keys()
            .filter(|name| name.starts_with(prefix))
            .filter(|name| recursive || !name[prefix.len()..].contains('/'))
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for InMemoryObjectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectClient")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_get() {
        let client = InMemoryObjectClient::new();
        client.put("acme/a", b"payload".to_vec()).await.unwrap();
        assert_eq!(client.get("acme/a").await.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let client = InMemoryObjectClient::new();
        assert!(matches!(
            client.get("acme/missing").await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn put_overwrites() {
        let client = InMemoryObjectClient::new();
        client.put("acme/a", b"old".to_vec()).await.unwrap();
        client.put("acme/a", b"new".to_vec()).await.unwrap();
        assert_eq!(client.get("acme/a").await.unwrap(), b"new");
        assert_eq!(client.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_fails() {
        let client = InMemoryObjectClient::new();
        client.put("acme/a", b"x".to_vec()).await.unwrap();
        client.delete("acme/a").await.unwrap();
        assert!(client.is_empty());
        assert!(matches!(
            client.delete("acme/a").await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn stat_reports_size_and_modified() {
        let client = InMemoryObjectClient::new();
        let before = Utc::now();
        client.put("acme/a", vec![0u8; 42]).await.unwrap();
        let meta = client.stat("acme/a").await.unwrap();
        assert_eq!(meta.size, 42);
        assert!(meta.modified >= before);
    }

    #[tokio::test]
    async fn list_recursive_and_flat() {
        let client = InMemoryObjectClient::new();
        for name in ["acme/a", "acme/a/b", "acme/c", "other/x"] {
            client.put(name, b"v".to_vec()).await.unwrap();
        }

        let all = client.list("acme/", true).await.unwrap();
        assert_eq!(all, vec!["acme/a", "acme/a/b", "acme/c"]);

        let flat = client.list("acme/", false).await.unwrap();
        assert_eq!(flat, vec!["acme/a", "acme/c"]);
    }

    #[tokio::test]
    async fn names_is_sorted() {
        let client = InMemoryObjectClient::new();
        client.put("b", b"2".to_vec()).await.unwrap();
        client.put("a", b"1".to_vec()).await.unwrap();
        assert_eq!(client.names(), vec!["a", "b"]);
    }
}
