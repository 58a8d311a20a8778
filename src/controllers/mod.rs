pub mod admin;
pub mod dto;
pub mod feed;
pub mod health;
pub mod posts;
