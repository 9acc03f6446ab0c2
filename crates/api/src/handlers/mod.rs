pub mod contact;
pub mod pin;
pub mod projects;
pub mod tags;
pub mod uploads;
