pub mod assignment;
pub mod handlers;
pub mod models;
pub mod projection;
pub mod report;
pub mod repository;
pub mod seed;
