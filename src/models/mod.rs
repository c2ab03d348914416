pub mod appointment;
pub mod catalog;
pub mod content;
pub mod view;

pub use appointment::{AppointmentRequest, AppointmentResponse};
pub use catalog::{CLINIC, Clinic, DOCTORS, Doctor, SERVICES, Service, TESTIMONIALS, Testimonial};
pub use view::{DoctorStatView, DoctorView, ServiceView, TestimonialView};
