//! Núcleo de estado do painel de operações NavalHub: sessão, guarda de
//! rotas e os quadros de trabalho do técnico e do cliente.

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
