use serde::{Deserialize, Serialize};

/// A customer as exposed on the wire. Field order here is the JSON field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub gender: String,
}

impl Customer {
    pub fn new(id: i32, name: &str, email: &str, gender: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            gender: gender.to_string(),
        }
    }
}
