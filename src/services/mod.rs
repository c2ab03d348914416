pub mod projection;

pub use projection::{project_doctors, project_services, project_testimonials};
