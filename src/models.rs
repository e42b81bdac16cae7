pub mod auth;
pub mod client;
pub mod desk;
pub mod support;
pub mod workflow;
pub mod workspace;
