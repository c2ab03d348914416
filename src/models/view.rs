//! Render-ready view models
//!
//! Each view model is the explicit, typed merge of a locale-independent
//! catalog record with its locale-specific text. The projection functions
//! in `services::projection` are the only constructors.

use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::{Doctor, Service, Testimonial};
use super::content::{DoctorText, ServiceText, TestimonialText};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceView {
    pub id: String,
    pub icon: String,
    pub featured: bool,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
}

impl ServiceView {
    pub fn merge(service: &Service, text: &ServiceText, price: &str) -> Self {
        Self {
            id: service.id.to_string(),
            icon: service.icon.to_string(),
            featured: service.featured,
            title: text.title.to_string(),
            description: text.description.to_string(),
            features: text.features.iter().map(|f| f.to_string()).collect(),
            price: price.to_string(),
        }
    }
}

/// One highlight figure on a doctor card, with its localized label.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoctorStatView {
    pub key: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoctorView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub experience: String,
    pub featured: bool,
    pub role: String,
    pub specialty: String,
    pub bio: String,
    pub education: String,
    pub languages: Vec<String>,
    pub stats: Vec<DoctorStatView>,
}

impl DoctorView {
    pub fn merge(
        doctor: &Doctor,
        text: &DoctorText,
        education: &str,
        languages: &[&str],
        stats: Vec<DoctorStatView>,
    ) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.to_string(),
            category: doctor.category.to_string(),
            experience: doctor.experience.to_string(),
            featured: doctor.featured,
            role: text.role.to_string(),
            specialty: text.specialty.to_string(),
            bio: text.bio.to_string(),
            education: education.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestimonialView {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub treatment: String,
    pub rating: u8,
    pub verified: bool,
    pub featured: bool,
    pub text: String,
}

impl TestimonialView {
    pub fn merge(testimonial: &Testimonial, text: &TestimonialText) -> Self {
        Self {
            id: testimonial.id,
            name: testimonial.name.to_string(),
            initials: testimonial.initials.to_string(),
            treatment: testimonial.treatment.to_string(),
            rating: testimonial.rating,
            verified: testimonial.verified,
            featured: testimonial.featured,
            text: text.text.to_string(),
        }
    }
}
