pub mod advisor;
pub mod aggregate;
