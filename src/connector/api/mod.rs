pub mod container;
pub mod controller;
pub mod http;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use http::{http_router, serve, ApiError, TextRequest};
pub use router::Router;
