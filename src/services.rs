pub mod auth;
pub mod client_service;
pub mod desk_service;
pub mod scheduler;
pub mod support_service;
pub mod workflow_service;
pub mod workspace_service;
