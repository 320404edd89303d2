pub mod contact;
pub mod demo;
pub mod info;

pub use contact::{ContactAck, ContactForm};
pub use demo::{DemoRequest, DemoResponse};
pub use info::{HealthStatus, ModelInfo, Specifications};
