pub mod app_config;
pub mod constants;
pub mod db;
pub mod middleware;
pub mod moderation;
pub mod orm;
pub mod session;
pub mod user;
pub mod web;
