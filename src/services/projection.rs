//! Locale projection
//!
//! Pure functions merging the static catalogs with per-locale content tables
//! into render-ready view models. Referentially transparent, no I/O.
//!
//! A catalog id with no text for the requested locale is a content-authoring
//! defect: it is logged, trips a debug assertion, and projects as empty
//! strings so a production page degrades instead of failing.

use crate::models::catalog::{DOCTORS, Doctor, SERVICES, TESTIMONIALS};
use crate::models::content;
use crate::models::view::{DoctorStatView, DoctorView, ServiceView, TestimonialView};
use crate::utils::{Locale, bundle_str};

/// Project all services for the given locale, in catalog order.
pub fn project_services(locale: Locale) -> Vec<ServiceView> {
    let price = content::price_placeholder(locale);
    SERVICES
        .iter()
        .map(|service| match content::service_text(locale, service.id) {
            Some(text) => ServiceView::merge(service, text, price),
            None => {
                missing_text(locale, "service", service.id);
                ServiceView {
                    id: service.id.to_string(),
                    icon: service.icon.to_string(),
                    featured: service.featured,
                    title: String::new(),
                    description: String::new(),
                    features: Vec::new(),
                    price: price.to_string(),
                }
            },
        })
        .collect()
}

/// Project all doctors for the given locale, in catalog order.
pub fn project_doctors(locale: Locale) -> Vec<DoctorView> {
    let education = content::education(locale);
    let languages = content::spoken_languages(locale);
    DOCTORS
        .iter()
        .map(|doctor| {
            let stats = project_stats(locale, doctor);
            match content::doctor_text(locale, doctor.id) {
                Some(text) => DoctorView::merge(doctor, text, education, languages, stats),
                None => {
                    missing_text(locale, "doctor", doctor.id);
                    DoctorView {
                        id: doctor.id,
                        name: doctor.name.to_string(),
                        category: doctor.category.to_string(),
                        experience: doctor.experience.to_string(),
                        featured: doctor.featured,
                        role: String::new(),
                        specialty: String::new(),
                        bio: String::new(),
                        education: education.to_string(),
                        languages: languages.iter().map(|l| l.to_string()).collect(),
                        stats,
                    }
                },
            }
        })
        .collect()
}

/// Project all testimonials for the given locale, in catalog order.
pub fn project_testimonials(locale: Locale) -> Vec<TestimonialView> {
    TESTIMONIALS
        .iter()
        .map(|testimonial| match content::testimonial_text(locale, testimonial.id) {
            Some(text) => TestimonialView::merge(testimonial, text),
            None => {
                missing_text(locale, "testimonial", testimonial.id);
                TestimonialView {
                    id: testimonial.id,
                    name: testimonial.name.to_string(),
                    initials: testimonial.initials.to_string(),
                    treatment: testimonial.treatment.to_string(),
                    rating: testimonial.rating,
                    verified: testimonial.verified,
                    featured: testimonial.featured,
                    text: String::new(),
                }
            },
        })
        .collect()
}

fn project_stats(locale: Locale, doctor: &Doctor) -> Vec<DoctorStatView> {
    doctor
        .stats
        .iter()
        .map(|(key, value)| DoctorStatView {
            key: key.to_string(),
            value: value.to_string(),
            label: bundle_str(locale, &format!("statsLabels.{}", key)).to_string(),
        })
        .collect()
}

fn missing_text(locale: Locale, kind: &str, id: impl std::fmt::Display) {
    tracing::warn!(locale = %locale, kind, %id, "missing localized text for catalog entry");
    debug_assert!(false, "missing {} text for id {} in locale {}", kind, id, locale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    /// Every locale must project a complete view model for every catalog id.
    #[test]
    fn test_projection_completeness() {
        for locale in Locale::ALL {
            let services = project_services(locale);
            assert_eq!(services.len(), catalog::SERVICES.len());
            for service in &services {
                assert!(!service.title.is_empty(), "{} service {}", locale, service.id);
                assert!(!service.description.is_empty(), "{} service {}", locale, service.id);
                assert_eq!(service.features.len(), 3, "{} service {}", locale, service.id);
                assert!(!service.price.is_empty());
            }

            let doctors = project_doctors(locale);
            assert_eq!(doctors.len(), catalog::DOCTORS.len());
            for doctor in &doctors {
                assert!(!doctor.role.is_empty(), "{} doctor {}", locale, doctor.id);
                assert!(!doctor.specialty.is_empty(), "{} doctor {}", locale, doctor.id);
                assert!(!doctor.bio.is_empty(), "{} doctor {}", locale, doctor.id);
                assert!(!doctor.education.is_empty());
                assert_eq!(doctor.languages.len(), 4);
                assert!(!doctor.stats.is_empty());
                for stat in &doctor.stats {
                    assert!(!stat.label.is_empty(), "{} stat {}", locale, stat.key);
                }
            }

            let testimonials = project_testimonials(locale);
            assert_eq!(testimonials.len(), catalog::TESTIMONIALS.len());
            for testimonial in &testimonials {
                assert!(!testimonial.text.is_empty(), "{} testimonial {}", locale, testimonial.id);
            }
        }
    }

    #[test]
    fn test_doctor_projection_localizes_role() {
        let doctors = project_doctors(Locale::En);
        assert_eq!(doctors[0].id, 1);
        assert_eq!(doctors[0].role, "Oncological Surgeon");

        let doctors = project_doctors(Locale::Pl);
        assert_eq!(doctors[0].role, "Chirurg Onkolog");
    }

    #[test]
    fn test_price_placeholder_per_locale() {
        assert_eq!(project_services(Locale::En)[0].price, "Contact us");
        assert_eq!(project_services(Locale::Pl)[0].price, "Zapytaj");
        assert_eq!(project_services(Locale::Uk)[0].price, "Запитайте");
        assert_eq!(project_services(Locale::Es)[0].price, "Consultar");
    }

    #[test]
    fn test_projection_is_ordered_by_catalog() {
        let ids: Vec<u32> = project_doctors(Locale::Es).iter().map(|d| d.id).collect();
        let expected: Vec<u32> = catalog::DOCTORS.iter().map(|d| d.id).collect();
        assert_eq!(ids, expected);
    }
}
