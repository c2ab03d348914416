//! Locale-independent content catalogs
//!
//! Static, read-only records initialized at compile time and shared across
//! all request handlers. Locale-dependent text lives in [`super::content`]
//! and is merged in by the projection functions.

use serde::Serialize;

/// A medical service offered by the clinic.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub featured: bool,
}

/// A member of the medical team.
///
/// `stats` are (stat-key, display value) pairs; the key indexes the
/// `statsLabels` section of the locale bundle.
#[derive(Debug, Clone, Copy)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub experience: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
    pub featured: bool,
}

/// A patient testimonial.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub initials: &'static str,
    pub treatment: &'static str,
    pub rating: u8,
    pub verified: bool,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicStats {
    pub treatments: u32,
    pub specialists: u32,
    pub satisfaction: u32,
    pub awards: u32,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinks {
    pub facebook: &'static str,
    pub instagram: &'static str,
    pub twitter: &'static str,
    pub youtube: &'static str,
    pub linkedin: &'static str,
}

/// Clinic contact details and headline figures, rendered on every page.
#[derive(Debug, Clone, Serialize)]
pub struct Clinic {
    pub name: &'static str,
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub stats: ClinicStats,
    pub social: SocialLinks,
}

pub static CLINIC: Clinic = Clinic {
    name: "WOJTEK",
    phone: "32 42 47 370",
    whatsapp: "+48 32 42 47 370",
    email: "rejestracja@gabinetyborki.pl",
    address: "ul. Borki 20, 44-200 Rybnik, Silesia",
    stats: ClinicStats {
        treatments: 50_000,
        specialists: 18,
        satisfaction: 98,
        awards: 15,
        years: 25,
    },
    social: SocialLinks {
        facebook: "https://facebook.com/GabinetyBorki",
        instagram: "#",
        twitter: "#",
        youtube: "#",
        linkedin: "#",
    },
};

pub static SERVICES: &[Service] = &[
    Service { id: "odontologia", icon: "fa-tooth", featured: true },
    Service { id: "cardiologia", icon: "fa-heartbeat", featured: false },
    Service { id: "oftalmologia", icon: "fa-eye", featured: false },
    Service { id: "ortopedia", icon: "fa-bone", featured: false },
    Service { id: "psiquiatria", icon: "fa-brain", featured: false },
    Service { id: "pediatria", icon: "fa-baby", featured: false },
    Service { id: "oncologia", icon: "fa-ribbon", featured: false },
    Service { id: "geriatria", icon: "fa-user-clock", featured: false },
    Service { id: "nutricion", icon: "fa-apple-alt", featured: false },
    Service { id: "proctologia", icon: "fa-stethoscope", featured: false },
    Service { id: "estetica", icon: "fa-spa", featured: false },
    Service { id: "rehabilitacion", icon: "fa-running", featured: false },
];

pub static DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "lek. Wiesław Durczok",
        category: "oncologia",
        experience: "20+",
        stats: &[("surgeries", "5K+"), ("patients", "8K+")],
        featured: true,
    },
    Doctor {
        id: 2,
        name: "dr nauk o zdrowiu Patrycja Kłósek-Bzowska",
        category: "nutricion",
        experience: "12+",
        stats: &[("patients", "3K+"), ("plans", "5K+")],
        featured: false,
    },
    Doctor {
        id: 3,
        name: "lek. med. Anna Koterba",
        category: "psiquiatria",
        experience: "15+",
        stats: &[("patients", "4K+"), ("consultations", "12K+")],
        featured: false,
    },
    Doctor {
        id: 4,
        name: "dr n. med. Ewa Kraszewska",
        category: "oftalmologia",
        experience: "18+",
        stats: &[("surgeries", "3K+"), ("patients", "10K+")],
        featured: false,
    },
    Doctor {
        id: 5,
        name: "lek. med. Anna Krynicka-Mazurek",
        category: "geriatria",
        experience: "14+",
        stats: &[("patients", "6K+"), ("assessments", "8K+")],
        featured: false,
    },
    Doctor {
        id: 6,
        name: "lek. Teresa Lubszczyk",
        category: "infectologia",
        experience: "22+",
        stats: &[("cases", "15K+"), ("patients", "20K+")],
        featured: false,
    },
    Doctor {
        id: 7,
        name: "dr n. med. Iwona Pawełczyk",
        category: "proctologia",
        experience: "16+",
        stats: &[("procedures", "4K+"), ("surgeries", "2K+")],
        featured: false,
    },
    Doctor {
        id: 8,
        name: "lek. Mariusz Puszkarz",
        category: "ortopedia",
        experience: "15+",
        stats: &[("surgeries", "6K+"), ("patients", "12K+")],
        featured: false,
    },
    Doctor {
        id: 9,
        name: "dr n. med. Sławomir Rychlik",
        category: "cardiologia",
        experience: "20+",
        stats: &[("echocardiograms", "8K+"), ("patients", "15K+")],
        featured: false,
    },
    Doctor {
        id: 10,
        name: "dr n. med. Katarzyna Radkowska-Braun",
        category: "senologia",
        experience: "17+",
        stats: &[("screenings", "10K+"), ("patients", "7K+")],
        featured: false,
    },
    Doctor {
        id: 11,
        name: "lek. Michał Seemann",
        category: "ortopedia",
        experience: "12+",
        stats: &[("athletes", "2K+"), ("surgeries", "3K+")],
        featured: false,
    },
    Doctor {
        id: 12,
        name: "lek. Dejan Simić",
        category: "ortopedia",
        experience: "18+",
        stats: &[("prostheses", "1K+"), ("surgeries", "5K+")],
        featured: false,
    },
    Doctor {
        id: 13,
        name: "mgr Marzena Sobota",
        category: "rehabilitacion",
        experience: "10+",
        stats: &[("sessions", "15K+"), ("patients", "3K+")],
        featured: false,
    },
    Doctor {
        id: 14,
        name: "lek. stom. Aleksandra Stysz",
        category: "odontologia",
        experience: "8+",
        stats: &[("treatments", "8K+"), ("patients", "4K+")],
        featured: false,
    },
    Doctor {
        id: 15,
        name: "lek. dent. Barbara Stysz",
        category: "odontologia",
        experience: "25+",
        stats: &[("endodoncias", "5K+"), ("patients", "12K+")],
        featured: false,
    },
    Doctor {
        id: 16,
        name: "lek. stom. Wojciech Stysz",
        category: "odontologia",
        experience: "28+",
        stats: &[("implants", "3K+"), ("treatments", "10K+")],
        featured: true,
    },
    Doctor {
        id: 17,
        name: "lek. med. Iwona Sułecka",
        category: "estetica",
        experience: "20+",
        stats: &[("treatments", "6K+"), ("patients", "8K+")],
        featured: false,
    },
    Doctor {
        id: 18,
        name: "lek. Agata Szpila-Duda",
        category: "pediatria",
        experience: "12+",
        stats: &[("children", "5K+"), ("consultations", "15K+")],
        featured: false,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Laura Martínez",
        initials: "LM",
        treatment: "Implantes + Carillas",
        rating: 5,
        verified: true,
        featured: false,
    },
    Testimonial {
        id: 2,
        name: "Pedro Sánchez",
        initials: "PS",
        treatment: "Invisalign + Blanqueamiento",
        rating: 5,
        verified: true,
        featured: true,
    },
    Testimonial {
        id: 3,
        name: "Ana López",
        initials: "AL",
        treatment: "Tratamiento completo",
        rating: 5,
        verified: true,
        featured: false,
    },
];
