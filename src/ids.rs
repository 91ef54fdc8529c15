use uuid::Uuid;

/// Source of opaque unique identifiers for newly created entities.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> String;
}

pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: "prefix-1", "prefix-2", ...
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_unique_ids() {
        let mut ids = UuidIdGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36); // hyphenated UUID
    }

    #[test]
    fn test_sequential_generator_is_deterministic() {
        let mut ids = SequentialIdGenerator::new("id");
        assert_eq!(ids.next_id(), "id-1");
        assert_eq!(ids.next_id(), "id-2");
        assert_eq!(ids.next_id(), "id-3");
    }
}
