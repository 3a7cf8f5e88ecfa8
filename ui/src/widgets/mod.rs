mod user_table;

pub use user_table::{UserTableEvent, user_table};
