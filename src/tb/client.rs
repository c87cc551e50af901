use crate::ids::ClientId;

/// Identity record for a bank client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
    id: ClientId,
}

impl Client {
    pub fn new(name: impl Into<String>, id: ClientId) -> Self {
        return Self {
            name: name.into(),
            id,
        };
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn id(&self) -> ClientId {
        return self.id;
    }
}
