pub mod explain;
pub mod handlers;
pub mod matcher;
