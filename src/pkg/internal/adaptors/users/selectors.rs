use crate::pkg::internal::adaptors::users::spec::{UserEntry, UserTable};

pub struct UserSelector<'a> {
    table: &'a UserTable,
}

impl<'a> UserSelector<'a> {
    pub fn new(table: &'a UserTable) -> Self {
        UserSelector { table }
    }

    // first match in id (insertion) order when duplicates exist
    pub fn get_by_username(&self, username: &str) -> Option<UserEntry> {
        self.table
            .entries
            .values()
            .find(|user| user.username == username)
            .cloned()
    }
}
