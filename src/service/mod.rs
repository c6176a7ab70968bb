pub mod credential_reset;
pub mod password;
