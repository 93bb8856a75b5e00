use std::collections::BTreeMap;

// No Serialize on purpose: the password must never reach a response body.
// Login answers with a separate summary type.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEntry {
    pub id: i32,
    pub username: String,
    pub password: String,
    // stored as the literal "true"/"false"
    pub is_admin: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub is_admin: Option<String>,
}

#[derive(Debug)]
pub struct UserTable {
    pub(crate) entries: BTreeMap<i32, UserEntry>,
    pub(crate) next_id: i32,
}

impl UserTable {
    pub fn new() -> Self {
        UserTable {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub(crate) fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for UserTable {
    fn default() -> Self {
        UserTable::new()
    }
}
