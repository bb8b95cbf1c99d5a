use serde::{Deserialize, Serialize};
use std::fmt;

/// A person stored in the heap. Weight is the only ordering key.
///
/// Ids are assigned monotonically by the caller and never change; only the
/// position of a person inside the heap array moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: u32,
    pub weight: u32,
}

impl Person {
    pub fn new(person_id: u32, weight: u32) -> Self {
        Person { person_id, weight }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({} kg)", self.person_id, self.weight)
    }
}
