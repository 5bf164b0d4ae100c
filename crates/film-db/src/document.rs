//! Document backend held in process memory.
//!
//! Every document gets a 12-byte object id rendered as 24 lowercase hex
//! digits: a 4-byte timestamp, 5 bytes fixed per process, and a 3-byte
//! counter.
//!
//! An identifier is valid when it is 24 hex digits in either case, or any
//! 12-byte string, whose bytes are then the object id itself.
//!
//! Collections keep insertion order unless built with
//! [`DocumentCollection::sorted_by`].

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use film_models::{NewUser, RecordId, UserRecord};
use tokio::sync::RwLock;

use crate::gateway::{Resource, ResourceStore, StoreError, UserStore};

const OBJECT_ID_LEN: usize = 12;
const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_LEN * 2;

fn is_object_id_hex(raw: &str) -> bool {
    raw.len() == OBJECT_ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn is_valid_object_id(raw: &str) -> bool {
    is_object_id_hex(raw) || raw.len() == OBJECT_ID_LEN
}

/// Produces process-unique object ids.
#[derive(Debug)]
pub struct ObjectIdGenerator {
    process: [u8; 5],
    counter: AtomicU32,
}

impl ObjectIdGenerator {
    pub fn new() -> Self {
        Self {
            process: rand::random(),
            counter: AtomicU32::new(rand::random::<u32>() & 0x00FF_FFFF),
        }
    }

    pub fn next_id(&self) -> RecordId {
        let timestamp = Utc::now().timestamp() as u32;
        let count = self.counter.fetch_add(1, AtomicOrdering::Relaxed) & 0x00FF_FFFF;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        RecordId::Object(hex::encode(bytes))
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn object_key(raw: &str) -> Option<RecordId> {
    if is_object_id_hex(raw) {
        Some(RecordId::Object(raw.to_ascii_lowercase()))
    } else if raw.len() == OBJECT_ID_LEN {
        Some(RecordId::Object(hex::encode(raw.as_bytes())))
    } else {
        None
    }
}

type DocumentOrder<R> = fn(&R, &R) -> Ordering;

pub struct DocumentCollection<R: Resource> {
    docs: RwLock<Vec<R>>,
    order: Option<DocumentOrder<R>>,
    ids: Arc<ObjectIdGenerator>,
}

impl<R: Resource> DocumentCollection<R> {
    pub fn new(ids: Arc<ObjectIdGenerator>) -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            order: None,
            ids,
        }
    }

    /// Lists documents sorted by `order` instead of insertion order.
    pub fn sorted_by(mut self, order: DocumentOrder<R>) -> Self {
        self.order = Some(order);
        self
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for DocumentCollection<R> {
    fn is_valid_id(&self, raw: &str) -> bool {
        is_valid_object_id(raw)
    }

    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let mut docs = self.docs.read().await.clone();
        if let Some(order) = self.order {
            // Stable, so ties keep insertion order.
            docs.sort_by(order);
        }
        Ok(docs)
    }

    async fn find_by_id(&self, raw: &str) -> Result<Option<R>, StoreError> {
        let Some(key) = object_key(raw) else {
            return Ok(None);
        };
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|doc| doc.id() == &key).cloned())
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError> {
        let doc = R::from_draft(self.ids.next_id(), draft);
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update_by_id(&self, raw: &str, draft: R::Draft) -> Result<Option<R>, StoreError> {
        let Some(key) = object_key(raw) else {
            return Ok(None);
        };
        let mut docs = self.docs.write().await;
        let Some(slot) = docs.iter_mut().find(|doc| doc.id() == &key) else {
            return Ok(None);
        };
        *slot = R::from_draft(key, draft);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, raw: &str) -> Result<bool, StoreError> {
        let Some(key) = object_key(raw) else {
            return Ok(false);
        };
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|doc| doc.id() != &key);
        Ok(docs.len() < before)
    }
}

/// User accounts with a unique username index.
pub struct DocumentUsers {
    users: RwLock<Vec<UserRecord>>,
    ids: Arc<ObjectIdGenerator>,
}

impl DocumentUsers {
    pub fn new(ids: Arc<ObjectIdGenerator>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            ids,
        }
    }
}

#[async_trait]
impl UserStore for DocumentUsers {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UniqueViolation);
        }

        let record = UserRecord {
            id: self.ids.next_id(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use film_models::{Director, Movie, NewDirector, NewMovie, Role};

    fn movies() -> DocumentCollection<Movie> {
        DocumentCollection::new(Arc::new(ObjectIdGenerator::new()))
    }

    fn draft(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            director: "Bong Joon-ho".to_string(),
            year: 2019,
        }
    }

    fn id_string(id: &RecordId) -> String {
        id.to_string()
    }

    #[test]
    fn test_generated_ids_are_valid_and_unique() {
        let ids = ObjectIdGenerator::new();
        let a = id_string(&ids.next_id());
        let b = id_string(&ids.next_id());
        assert!(is_valid_object_id(&a));
        assert!(is_valid_object_id(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_id_validity() {
        assert!(is_valid_object_id("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert!(is_valid_object_id("65A1F0C2E4B0A1B2C3D4E5F6"));
        assert!(!is_valid_object_id("1"));
        assert!(!is_valid_object_id("65a1f0c2e4b0a1b2c3d4e5fz"));
        assert!(!is_valid_object_id("65a1f0c2e4b0a1b2c3d4e5f6a"));
        assert!(is_valid_object_id("abcdefghijkl"));
        assert!(!is_valid_object_id("abcdefghijk"));
    }

    #[tokio::test]
    async fn test_twelve_byte_id_addresses_its_hex_form() {
        let store = movies();
        store.insert(draft("Parasite")).await.unwrap();

        assert!(store.is_valid_id("abcdefghijkl"));
        assert!(store.find_by_id("abcdefghijkl").await.unwrap().is_none());
        assert_eq!(
            object_key("abcdefghijkl"),
            Some(RecordId::Object("6162636465666768696a6b6c".to_string()))
        );
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = movies();
        let created = store.insert(draft("Parasite")).await.unwrap();

        let found = store
            .find_by_id(&created.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = movies();
        store.insert(draft("Zodiac")).await.unwrap();
        store.insert(draft("Alien")).await.unwrap();

        let titles: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Zodiac", "Alien"]);
    }

    #[tokio::test]
    async fn test_sorted_collection() {
        let store = DocumentCollection::<Director>::new(Arc::new(ObjectIdGenerator::new()))
            .sorted_by(|a, b| a.name.cmp(&b.name));
        for name in ["Tika", "Royyan", "Ang Lee"] {
            store
                .insert(NewDirector {
                    name: name.to_string(),
                    birth_year: 1990,
                })
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Ang Lee", "Royyan", "Tika"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_ids() {
        let store = movies();
        let missing = "65a1f0c2e4b0a1b2c3d4e5f6";

        assert!(store.update_by_id(missing, draft("X")).await.unwrap().is_none());
        assert!(!store.delete_by_id(missing).await.unwrap());
        assert!(store.find_by_id("not-an-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let store = movies();
        let created = store.insert(draft("Parasite")).await.unwrap();
        let raw = created.id.to_string();

        let updated = store
            .update_by_id(&raw, draft("Parasite 2"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Parasite 2");

        assert!(store.delete_by_id(&raw.to_uppercase()).await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let users = DocumentUsers::new(Arc::new(ObjectIdGenerator::new()));
        let new_user = NewUser {
            username: "budi".to_string(),
            password_hash: "digest".to_string(),
            role: Role::User,
        };

        users.insert_user(new_user.clone()).await.unwrap();
        assert!(matches!(
            users.insert_user(new_user).await,
            Err(StoreError::UniqueViolation)
        ));
        assert!(users.find_by_username("budi").await.unwrap().is_some());
        assert!(users.find_by_username("sari").await.unwrap().is_none());
    }
}
