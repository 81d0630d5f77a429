//! Request handlers

pub mod agents;
pub mod claims;
pub mod disasters;
pub mod health;
pub mod home;
pub mod periods;
