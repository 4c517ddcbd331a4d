//! Progress reporters implementing the application's progress port

pub mod reporter;
