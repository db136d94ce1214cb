//! Runtime storage backend selection

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_aliases() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("sqlite"), None);
    }
}
