use super::DataStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewUser;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                let user = NewUser::new(format!("Test User {}", i + 1), 20 + i as i64);
                self.push(user);
            }
            self
        }

        pub fn with_user(mut self, name: &str, age: i64) -> Self {
            self.push(NewUser::new(name, age));
            self
        }

        pub fn with_full_user(mut self, user: NewUser) -> Self {
            self.push(user);
            self
        }

        fn push(&mut self, user: NewUser) {
            let mut records = self.store.load();
            records.push(Record::new(user).unwrap());
            self.store.records = records;
        }
    }
}
