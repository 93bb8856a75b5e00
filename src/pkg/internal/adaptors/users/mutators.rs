use crate::pkg::internal::adaptors::users::spec::{CreateUserInput, UserEntry, UserTable};

pub struct UserMutator<'a> {
    table: &'a mut UserTable,
}

impl<'a> UserMutator<'a> {
    pub fn new(table: &'a mut UserTable) -> Self {
        UserMutator { table }
    }

    /// Username collisions are not checked here; lookup resolves duplicates
    /// by taking the first match in id order.
    pub fn create(&mut self, user: CreateUserInput) -> UserEntry {
        let id = self.table.allocate_id();
        let entry = UserEntry {
            id,
            username: user.username,
            password: user.password,
            is_admin: user.is_admin.unwrap_or_else(|| "false".to_string()),
        };
        self.table.entries.insert(id, entry.clone());
        entry
    }
}
