//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a scaffold" or "list templates".

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{ScaffoldService, generate_and_deliver, generate_scaffold};
pub use template_service::{TemplateInfo, TemplateService};
