pub mod connection;
pub mod entities;
pub mod events;
pub mod repositories;
