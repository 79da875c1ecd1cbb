mod sandbox;

pub use sandbox::{SandboxConfig, SandboxGateway};
