pub mod personal_access_tokens;
pub mod users;
