pub mod consent;
pub mod contact;
pub mod home;
pub mod lang;
pub mod listing;
