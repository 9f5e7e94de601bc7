pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod favorites;
pub mod image;
pub mod likes;
pub mod media;
pub mod middleware;
pub mod news;
pub mod photographers;
pub mod photos;
pub mod profiles;
pub mod support;
pub mod validate;
pub mod views;
