pub mod registrations;
pub mod users;
