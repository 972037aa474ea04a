pub mod account;
pub mod blocklist;
pub mod email;
pub mod password;
