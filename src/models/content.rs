//! Per-locale content tables
//!
//! Typed, compile-time text tables keyed by catalog id. Every locale must
//! cover every id in every catalog; a gap is a content-authoring defect
//! caught by the completeness test in `services::projection`.

use crate::utils::Locale;

/// Locale-dependent text for a service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceText {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

/// Locale-dependent text for a doctor.
#[derive(Debug, Clone, Copy)]
pub struct DoctorText {
    pub id: u32,
    pub role: &'static str,
    pub specialty: &'static str,
    pub bio: &'static str,
}

/// Locale-dependent testimonial body.
#[derive(Debug, Clone, Copy)]
pub struct TestimonialText {
    pub id: u32,
    pub text: &'static str,
}

pub fn service_text(locale: Locale, id: &str) -> Option<&'static ServiceText> {
    service_table(locale).iter().find(|s| s.id == id)
}

pub fn doctor_text(locale: Locale, id: u32) -> Option<&'static DoctorText> {
    doctor_table(locale).iter().find(|d| d.id == id)
}

pub fn testimonial_text(locale: Locale, id: u32) -> Option<&'static TestimonialText> {
    testimonial_table(locale).iter().find(|t| t.id == id)
}

/// Displayed price placeholder; the site never shows real prices.
pub fn price_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Consultar",
        Locale::Pl => "Zapytaj",
        Locale::Uk => "Запитайте",
        Locale::En => "Contact us",
    }
}

/// Education institution shown on every doctor card, constant per locale.
pub fn education(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Universidad de Medicina",
        Locale::Pl => "Uniwersytet Medyczny",
        Locale::Uk => "Медичний університет",
        Locale::En => "Medical University",
    }
}

/// Spoken languages shown on every doctor card, constant per locale.
pub fn spoken_languages(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Es => &["Polaco", "Ucraniano", "Español", "Inglés"],
        Locale::Pl => &["Polski", "Ukraiński", "Hiszpański", "Angielski"],
        Locale::Uk => &["Польська", "Українська", "Іспанська", "Англійська"],
        Locale::En => &["Polish", "Ukrainian", "Spanish", "English"],
    }
}

fn service_table(locale: Locale) -> &'static [ServiceText] {
    match locale {
        Locale::Es => SERVICES_ES,
        Locale::Pl => SERVICES_PL,
        Locale::Uk => SERVICES_UK,
        Locale::En => SERVICES_EN,
    }
}

fn doctor_table(locale: Locale) -> &'static [DoctorText] {
    match locale {
        Locale::Es => DOCTORS_ES,
        Locale::Pl => DOCTORS_PL,
        Locale::Uk => DOCTORS_UK,
        Locale::En => DOCTORS_EN,
    }
}

fn testimonial_table(locale: Locale) -> &'static [TestimonialText] {
    match locale {
        Locale::Es => TESTIMONIALS_ES,
        Locale::Pl => TESTIMONIALS_PL,
        Locale::Uk => TESTIMONIALS_UK,
        Locale::En => TESTIMONIALS_EN,
    }
}

static SERVICES_ES: &[ServiceText] = &[
    ServiceText { id: "odontologia", title: "Odontología", description: "Servicios dentales completos incluyendo periodoncia, tratamientos conservadores y estética dental.", features: ["Periodoncia especializada", "Tratamientos conservadores", "Estética dental"] },
    ServiceText { id: "cardiologia", title: "Cardiología", description: "Diagnóstico y tratamiento de enfermedades cardiovasculares con tecnología avanzada.", features: ["Electrocardiograma", "Ecocardiografía", "Prevención cardiovascular"] },
    ServiceText { id: "oftalmologia", title: "Oftalmología", description: "Cuidado integral de la salud visual. Diagnóstico y tratamiento de enfermedades oculares.", features: ["Examen completo de vista", "Tratamiento de cataratas", "Glaucoma"] },
    ServiceText { id: "ortopedia", title: "Ortopedia", description: "Especialistas en sistema musculoesquelético. Tratamiento de lesiones y enfermedades óseas.", features: ["Traumatología", "Cirugía ortopédica", "Rehabilitación"] },
    ServiceText { id: "psiquiatria", title: "Psiquiatría", description: "Atención especializada en salud mental. Diagnóstico y tratamiento de trastornos psiquiátricos.", features: ["Evaluación psiquiátrica", "Tratamiento farmacológico", "Seguimiento continuo"] },
    ServiceText { id: "pediatria", title: "Pediatría", description: "Cuidado médico integral para niños y adolescentes en un ambiente acogedor.", features: ["Control de crecimiento", "Vacunaciones", "Atención preventiva"] },
    ServiceText { id: "oncologia", title: "Cirugía Oncológica", description: "Especialistas en diagnóstico y tratamiento quirúrgico de enfermedades oncológicas.", features: ["Diagnóstico temprano", "Cirugía especializada", "Seguimiento oncológico"] },
    ServiceText { id: "geriatria", title: "Geriatría", description: "Atención médica especializada para adultos mayores. Cuidado integral de la tercera edad.", features: ["Evaluación geriátrica", "Prevención de caídas", "Manejo de polifarmacia"] },
    ServiceText { id: "nutricion", title: "Nutrición Clínica", description: "Dietética clínica y psiconutrición. Planes alimentarios personalizados.", features: ["Dietas personalizadas", "Psiconutrición", "Control de peso"] },
    ServiceText { id: "proctologia", title: "Proctología", description: "Diagnóstico y tratamiento de enfermedades del colon, recto y ano.", features: ["Colonoscopia", "Tratamiento de hemorroides", "Cirugía mínimamente invasiva"] },
    ServiceText { id: "estetica", title: "Medicina Estética", description: "Tratamientos estéticos no invasivos para rejuvenecimiento y cuidado de la piel.", features: ["Botox y rellenos", "Tratamientos faciales", "Rejuvenecimiento"] },
    ServiceText { id: "rehabilitacion", title: "Rehabilitación", description: "Fisioterapia y rehabilitación para recuperación funcional y mejora de calidad de vida.", features: ["Fisioterapia", "Terapia manual", "Ejercicio terapéutico"] },
];

static SERVICES_PL: &[ServiceText] = &[
    ServiceText { id: "odontologia", title: "Stomatologia", description: "Kompleksowe usługi stomatologiczne obejmujące periodontologię, leczenie zachowawcze i estetykę dentystyczną.", features: ["Periodontologia specjalistyczna", "Leczenie zachowawcze", "Estetyka dentystyczna"] },
    ServiceText { id: "cardiologia", title: "Kardiologia", description: "Diagnostyka i leczenie chorób układu krążenia z wykorzystaniem zaawansowanej technologii.", features: ["Elektrokardiogram", "Echokardiografia", "Profilaktyka kardiologiczna"] },
    ServiceText { id: "oftalmologia", title: "Okulistyka", description: "Kompleksowa opieka nad zdrowiem wzroku. Diagnostyka i leczenie chorób oczu.", features: ["Pełne badanie wzroku", "Leczenie zaćmy", "Jaskra"] },
    ServiceText { id: "ortopedia", title: "Ortopedia", description: "Specjaliści układu mięśniowo-szkieletowego. Leczenie urazów i chorób kości.", features: ["Traumatologia", "Chirurgia ortopedyczna", "Rehabilitacja"] },
    ServiceText { id: "psiquiatria", title: "Psychiatria", description: "Specjalistyczna opieka zdrowia psychicznego. Diagnostyka i leczenie zaburzeń psychicznych.", features: ["Ocena psychiatryczna", "Leczenie farmakologiczne", "Ciągła obserwacja"] },
    ServiceText { id: "pediatria", title: "Pediatria", description: "Kompleksowa opieka medyczna dla dzieci i młodzieży w przyjaznym środowisku.", features: ["Kontrola rozwoju", "Szczepienia", "Opieka profilaktyczna"] },
    ServiceText { id: "oncologia", title: "Chirurgia Onkologiczna", description: "Specjaliści w diagnostyce i chirurgicznym leczeniu chorób nowotworowych.", features: ["Wczesna diagnostyka", "Specjalistyczna chirurgia", "Obserwacja onkologiczna"] },
    ServiceText { id: "geriatria", title: "Geriatria", description: "Specjalistyczna opieka medyczna dla osób starszych. Kompleksowa opieka senioralna.", features: ["Ocena geriatryczna", "Profilaktyka upadków", "Zarządzanie polifarmacją"] },
    ServiceText { id: "nutricion", title: "Dietetyka Kliniczna", description: "Dietetyka kliniczna i psychodietetyka. Indywidualne plany żywieniowe.", features: ["Spersonalizowane diety", "Psychodietetyka", "Kontrola wagi"] },
    ServiceText { id: "proctologia", title: "Proktologia", description: "Diagnostyka i leczenie chorób jelita grubego, odbytnicy i odbytu.", features: ["Kolonoskopia", "Leczenie hemoroidów", "Chirurgia małoinwazyjna"] },
    ServiceText { id: "estetica", title: "Medycyna Estetyczna", description: "Nieinwazyjne zabiegi estetyczne odmładzające i pielęgnujące skórę.", features: ["Botoks i wypełniacze", "Zabiegi na twarz", "Odmładzanie"] },
    ServiceText { id: "rehabilitacion", title: "Rehabilitacja", description: "Fizjoterapia i rehabilitacja dla odzyskania funkcji i poprawy jakości życia.", features: ["Fizjoterapia", "Terapia manualna", "Ćwiczenia terapeutyczne"] },
];

static SERVICES_UK: &[ServiceText] = &[
    ServiceText { id: "odontologia", title: "Стоматологія", description: "Комплексні стоматологічні послуги, включаючи пародонтологію, консервативне лікування та естетичну стоматологію.", features: ["Спеціалізована пародонтологія", "Консервативне лікування", "Естетична стоматологія"] },
    ServiceText { id: "cardiologia", title: "Кардіологія", description: "Діагностика та лікування серцево-судинних захворювань з використанням передових технологій.", features: ["Електрокардіограма", "Ехокардіографія", "Профілактика серцево-судинних захворювань"] },
    ServiceText { id: "oftalmologia", title: "Офтальмологія", description: "Комплексний догляд за здоров'ям зору. Діагностика та лікування захворювань очей.", features: ["Повний огляд зору", "Лікування катаракти", "Глаукома"] },
    ServiceText { id: "ortopedia", title: "Ортопедія", description: "Спеціалісти з м'язово-скелетної системи. Лікування травм та захворювань кісток.", features: ["Травматологія", "Ортопедична хірургія", "Реабілітація"] },
    ServiceText { id: "psiquiatria", title: "Психіатрія", description: "Спеціалізована допомога з психічного здоров'я. Діагностика та лікування психічних розладів.", features: ["Психіатрична оцінка", "Фармакологічне лікування", "Постійне спостереження"] },
    ServiceText { id: "pediatria", title: "Педіатрія", description: "Комплексна медична допомога для дітей та підлітків у затишній атмосфері.", features: ["Контроль росту", "Вакцинація", "Профілактична допомога"] },
    ServiceText { id: "oncologia", title: "Онкологічна Хірургія", description: "Спеціалісти з діагностики та хірургічного лікування онкологічних захворювань.", features: ["Рання діагностика", "Спеціалізована хірургія", "Онкологічне спостереження"] },
    ServiceText { id: "geriatria", title: "Геріатрія", description: "Спеціалізована медична допомога для літніх людей. Комплексний догляд за людьми похилого віку.", features: ["Геріатрична оцінка", "Профілактика падінь", "Управління поліфармацією"] },
    ServiceText { id: "nutricion", title: "Клінічне Харчування", description: "Клінічна дієтетика та психохарчування. Індивідуальні харчові плани.", features: ["Персоналізовані дієти", "Психохарчування", "Контроль ваги"] },
    ServiceText { id: "proctologia", title: "Проктологія", description: "Діагностика та лікування захворювань товстої кишки, прямої кишки та ануса.", features: ["Колоноскопія", "Лікування геморою", "Малоінвазивна хірургія"] },
    ServiceText { id: "estetica", title: "Естетична Медицина", description: "Неінвазивні естетичні процедури для омолодження та догляду за шкірою.", features: ["Ботокс та філери", "Процедури для обличчя", "Омолодження"] },
    ServiceText { id: "rehabilitacion", title: "Реабілітація", description: "Фізіотерапія та реабілітація для відновлення функцій та покращення якості життя.", features: ["Фізіотерапія", "Мануальна терапія", "Лікувальні вправи"] },
];

static SERVICES_EN: &[ServiceText] = &[
    ServiceText { id: "odontologia", title: "Dentistry", description: "Complete dental services including periodontics, conservative treatments and dental aesthetics.", features: ["Specialized periodontics", "Conservative treatments", "Dental aesthetics"] },
    ServiceText { id: "cardiologia", title: "Cardiology", description: "Diagnosis and treatment of cardiovascular diseases with advanced technology.", features: ["Electrocardiogram", "Echocardiography", "Cardiovascular prevention"] },
    ServiceText { id: "oftalmologia", title: "Ophthalmology", description: "Comprehensive eye health care. Diagnosis and treatment of eye diseases.", features: ["Complete eye exam", "Cataract treatment", "Glaucoma"] },
    ServiceText { id: "ortopedia", title: "Orthopedics", description: "Musculoskeletal system specialists. Treatment of injuries and bone diseases.", features: ["Traumatology", "Orthopedic surgery", "Rehabilitation"] },
    ServiceText { id: "psiquiatria", title: "Psychiatry", description: "Specialized mental health care. Diagnosis and treatment of psychiatric disorders.", features: ["Psychiatric evaluation", "Pharmacological treatment", "Continuous monitoring"] },
    ServiceText { id: "pediatria", title: "Pediatrics", description: "Comprehensive medical care for children and adolescents in a welcoming environment.", features: ["Growth control", "Vaccinations", "Preventive care"] },
    ServiceText { id: "oncologia", title: "Oncological Surgery", description: "Specialists in diagnosis and surgical treatment of oncological diseases.", features: ["Early diagnosis", "Specialized surgery", "Oncological follow-up"] },
    ServiceText { id: "geriatria", title: "Geriatrics", description: "Specialized medical care for older adults. Comprehensive senior care.", features: ["Geriatric assessment", "Fall prevention", "Polypharmacy management"] },
    ServiceText { id: "nutricion", title: "Clinical Nutrition", description: "Clinical dietetics and psychonutrition. Personalized meal plans.", features: ["Personalized diets", "Psychonutrition", "Weight control"] },
    ServiceText { id: "proctologia", title: "Proctology", description: "Diagnosis and treatment of colon, rectum and anus diseases.", features: ["Colonoscopy", "Hemorrhoid treatment", "Minimally invasive surgery"] },
    ServiceText { id: "estetica", title: "Aesthetic Medicine", description: "Non-invasive aesthetic treatments for rejuvenation and skin care.", features: ["Botox and fillers", "Facial treatments", "Rejuvenation"] },
    ServiceText { id: "rehabilitacion", title: "Rehabilitation", description: "Physiotherapy and rehabilitation for functional recovery and quality of life improvement.", features: ["Physiotherapy", "Manual therapy", "Therapeutic exercise"] },
];

static DOCTORS_ES: &[DoctorText] = &[
    DoctorText { id: 1, role: "Cirujano Oncólogo", specialty: "Cirugía Oncológica", bio: "Especialista en cirugía oncológica con amplia experiencia en diagnóstico y tratamiento quirúrgico de tumores." },
    DoctorText { id: 2, role: "Dietista Clínico", specialty: "Nutrición y Psicodietética", bio: "Doctora en ciencias de la salud especializada en dietética clínica y psicodietética." },
    DoctorText { id: 3, role: "Psiquiatra", specialty: "Psiquiatría General", bio: "Médica psiquiatra especializada en diagnóstico y tratamiento de trastornos mentales." },
    DoctorText { id: 4, role: "Oftalmóloga", specialty: "Oftalmología General", bio: "Doctora en medicina especializada en oftalmología y cirugía de cataratas." },
    DoctorText { id: 5, role: "Geriatra", specialty: "Geriatría", bio: "Médica especialista en geriatría dedicada al cuidado integral de adultos mayores." },
    DoctorText { id: 6, role: "Infectóloga", specialty: "Enfermedades Infecciosas", bio: "Especialista en diagnóstico y tratamiento de infecciones bacterianas, virales y parasitarias." },
    DoctorText { id: 7, role: "Proctóloga", specialty: "Proctología", bio: "Doctora especializada en diagnóstico y tratamiento de enfermedades del colon y recto." },
    DoctorText { id: 8, role: "Ortopeda", specialty: "Ortopedia y Traumatología", bio: "Especialista en ortopedia y traumatología con enfoque en lesiones deportivas." },
    DoctorText { id: 9, role: "Cardiólogo", specialty: "Cardiología", bio: "Doctor especializado en cardiología con tecnología de vanguardia." },
    DoctorText { id: 10, role: "Senóloga", specialty: "Enfermedades de Mama", bio: "Doctora especializada en diagnóstico y tratamiento de enfermedades de la mama." },
    DoctorText { id: 11, role: "Ortopeda", specialty: "Ortopedia Deportiva", bio: "Especialista en ortopedia con enfoque en medicina deportiva." },
    DoctorText { id: 12, role: "Ortopeda", specialty: "Cirugía Ortopédica", bio: "Especialista en cirugía ortopédica y prótesis articulares." },
    DoctorText { id: 13, role: "Fisioterapeuta", specialty: "Rehabilitación", bio: "Magíster en rehabilitación especializada en fisioterapia ortopédica." },
    DoctorText { id: 14, role: "Odontóloga", specialty: "Odontología General", bio: "Odontóloga especializada en tratamientos conservadores y estética dental." },
    DoctorText { id: 15, role: "Odontóloga", specialty: "Odontología Conservadora", bio: "Dentista con amplia experiencia en odontología conservadora y endodoncia." },
    DoctorText { id: 16, role: "Periodoncista", specialty: "Periodoncia", bio: "Odontólogo especialista en periodoncia, implantes y regeneración tisular." },
    DoctorText { id: 17, role: "Medicina Estética", specialty: "Estética y Reumatología", bio: "Médica especialista en medicina estética y tratamientos de rejuvenecimiento." },
    DoctorText { id: 18, role: "Pediatra", specialty: "Pediatría", bio: "Médica pediatra dedicada al cuidado integral de niños y adolescentes." },
];

static DOCTORS_PL: &[DoctorText] = &[
    DoctorText { id: 1, role: "Chirurg Onkolog", specialty: "Chirurgia Onkologiczna", bio: "Specjalista chirurgii onkologicznej z szerokim doświadczeniem w diagnostyce i leczeniu nowotworów." },
    DoctorText { id: 2, role: "Dietetyk Kliniczny", specialty: "Żywienie i Psychodietetyka", bio: "Doktor nauk o zdrowiu specjalizujący się w dietetyce klinicznej i psychodietetyce." },
    DoctorText { id: 3, role: "Psychiatra", specialty: "Psychiatria Ogólna", bio: "Lekarz psychiatra specjalizujący się w diagnostyce i leczeniu zaburzeń psychicznych." },
    DoctorText { id: 4, role: "Okulista", specialty: "Okulistyka Ogólna", bio: "Doktor medycyny specjalizujący się w okulistyce i chirurgii zaćmy." },
    DoctorText { id: 5, role: "Geriatra", specialty: "Geriatria", bio: "Lekarz specjalista geriatrii zajmujący się kompleksową opieką nad osobami starszymi." },
    DoctorText { id: 6, role: "Specjalista Chorób Zakaźnych", specialty: "Choroby Zakaźne", bio: "Specjalista w diagnostyce i leczeniu infekcji bakteryjnych, wirusowych i pasożytniczych." },
    DoctorText { id: 7, role: "Proktolog", specialty: "Proktologia", bio: "Doktor specjalizujący się w diagnostyce i leczeniu chorób jelita grubego i odbytnicy." },
    DoctorText { id: 8, role: "Ortopeda", specialty: "Ortopedia i Traumatologia", bio: "Specjalista ortopedii i traumatologii z naciskiem na urazy sportowe." },
    DoctorText { id: 9, role: "Kardiolog", specialty: "Kardiologia", bio: "Doktor specjalizujący się w kardiologii z najnowocześniejszą technologią." },
    DoctorText { id: 10, role: "Senolog", specialty: "Choroby Piersi", bio: "Doktor specjalizujący się w diagnostyce i leczeniu chorób piersi." },
    DoctorText { id: 11, role: "Ortopeda", specialty: "Ortopedia Sportowa", bio: "Specjalista ortopedii z naciskiem na medycynę sportową." },
    DoctorText { id: 12, role: "Ortopeda", specialty: "Chirurgia Ortopedyczna", bio: "Specjalista chirurgii ortopedycznej i protez stawowych." },
    DoctorText { id: 13, role: "Fizjoterapeuta", specialty: "Rehabilitacja", bio: "Magister rehabilitacji specjalizujący się w fizjoterapii ortopedycznej." },
    DoctorText { id: 14, role: "Stomatolog", specialty: "Stomatologia Ogólna", bio: "Stomatolog specjalizujący się w leczeniu zachowawczym i estetyce dentystycznej." },
    DoctorText { id: 15, role: "Stomatolog", specialty: "Stomatologia Zachowawcza", bio: "Dentysta z szerokim doświadczeniem w stomatologii zachowawczej i endodoncji." },
    DoctorText { id: 16, role: "Periodontolog", specialty: "Periodontologia", bio: "Stomatolog specjalista periodontologii, implantów i regeneracji tkanek." },
    DoctorText { id: 17, role: "Medycyna Estetyczna", specialty: "Estetyka i Reumatologia", bio: "Lekarz specjalista medycyny estetycznej i zabiegów odmładzających." },
    DoctorText { id: 18, role: "Pediatra", specialty: "Pediatria", bio: "Lekarz pediatra zajmujący się kompleksową opieką nad dziećmi i młodzieżą." },
];

static DOCTORS_UK: &[DoctorText] = &[
    DoctorText { id: 1, role: "Хірург-онколог", specialty: "Онкологічна хірургія", bio: "Спеціаліст з онкологічної хірургії з великим досвідом діагностики та лікування пухлин." },
    DoctorText { id: 2, role: "Клінічний дієтолог", specialty: "Харчування та психодієтетика", bio: "Доктор наук про здоров'я, що спеціалізується на клінічній дієтетиці та психодієтетиці." },
    DoctorText { id: 3, role: "Психіатр", specialty: "Загальна психіатрія", bio: "Лікар-психіатр, що спеціалізується на діагностиці та лікуванні психічних розладів." },
    DoctorText { id: 4, role: "Офтальмолог", specialty: "Загальна офтальмологія", bio: "Доктор медицини, що спеціалізується на офтальмології та хірургії катаракти." },
    DoctorText { id: 5, role: "Геріатр", specialty: "Геріатрія", bio: "Лікар-спеціаліст з геріатрії, що займається комплексним доглядом за літніми людьми." },
    DoctorText { id: 6, role: "Інфекціоніст", specialty: "Інфекційні захворювання", bio: "Спеціаліст з діагностики та лікування бактеріальних, вірусних та паразитарних інфекцій." },
    DoctorText { id: 7, role: "Проктолог", specialty: "Проктологія", bio: "Доктор, що спеціалізується на діагностиці та лікуванні захворювань товстої кишки та прямої кишки." },
    DoctorText { id: 8, role: "Ортопед", specialty: "Ортопедія та травматологія", bio: "Спеціаліст з ортопедії та травматології з акцентом на спортивні травми." },
    DoctorText { id: 9, role: "Кардіолог", specialty: "Кардіологія", bio: "Доктор, що спеціалізується на кардіології з передовими технологіями." },
    DoctorText { id: 10, role: "Мамолог", specialty: "Захворювання молочної залози", bio: "Доктор, що спеціалізується на діагностиці та лікуванні захворювань молочної залози." },
    DoctorText { id: 11, role: "Ортопед", specialty: "Спортивна ортопедія", bio: "Спеціаліст з ортопедії з акцентом на спортивну медицину." },
    DoctorText { id: 12, role: "Ортопед", specialty: "Ортопедична хірургія", bio: "Спеціаліст з ортопедичної хірургії та суглобових протезів." },
    DoctorText { id: 13, role: "Фізіотерапевт", specialty: "Реабілітація", bio: "Магістр реабілітації, що спеціалізується на ортопедичній фізіотерапії." },
    DoctorText { id: 14, role: "Стоматолог", specialty: "Загальна стоматологія", bio: "Стоматолог, що спеціалізується на консервативному лікуванні та естетичній стоматології." },
    DoctorText { id: 15, role: "Стоматолог", specialty: "Консервативна стоматологія", bio: "Дантист з великим досвідом у консервативній стоматології та ендодонтії." },
    DoctorText { id: 16, role: "Пародонтолог", specialty: "Пародонтологія", bio: "Стоматолог-спеціаліст з пародонтології, імплантів та регенерації тканин." },
    DoctorText { id: 17, role: "Естетична медицина", specialty: "Естетика та ревматологія", bio: "Лікар-спеціаліст з естетичної медицини та омолоджуючих процедур." },
    DoctorText { id: 18, role: "Педіатр", specialty: "Педіатрія", bio: "Лікар-педіатр, що займається комплексним доглядом за дітьми та підлітками." },
];

static DOCTORS_EN: &[DoctorText] = &[
    DoctorText { id: 1, role: "Oncological Surgeon", specialty: "Oncological Surgery", bio: "Specialist in oncological surgery with extensive experience in tumor diagnosis and treatment." },
    DoctorText { id: 2, role: "Clinical Dietitian", specialty: "Nutrition and Psychodietetics", bio: "Doctor of Health Sciences specializing in clinical dietetics and psychodietetics." },
    DoctorText { id: 3, role: "Psychiatrist", specialty: "General Psychiatry", bio: "Medical psychiatrist specializing in diagnosis and treatment of mental disorders." },
    DoctorText { id: 4, role: "Ophthalmologist", specialty: "General Ophthalmology", bio: "Medical doctor specializing in ophthalmology and cataract surgery." },
    DoctorText { id: 5, role: "Geriatrician", specialty: "Geriatrics", bio: "Geriatric specialist dedicated to comprehensive care for older adults." },
    DoctorText { id: 6, role: "Infectious Disease Specialist", specialty: "Infectious Diseases", bio: "Specialist in diagnosis and treatment of bacterial, viral and parasitic infections." },
    DoctorText { id: 7, role: "Proctologist", specialty: "Proctology", bio: "Doctor specializing in diagnosis and treatment of colon and rectal diseases." },
    DoctorText { id: 8, role: "Orthopedist", specialty: "Orthopedics and Traumatology", bio: "Orthopedics and traumatology specialist focusing on sports injuries." },
    DoctorText { id: 9, role: "Cardiologist", specialty: "Cardiology", bio: "Doctor specializing in cardiology with cutting-edge technology." },
    DoctorText { id: 10, role: "Breast Specialist", specialty: "Breast Diseases", bio: "Doctor specializing in diagnosis and treatment of breast diseases." },
    DoctorText { id: 11, role: "Orthopedist", specialty: "Sports Orthopedics", bio: "Orthopedic specialist focusing on sports medicine." },
    DoctorText { id: 12, role: "Orthopedist", specialty: "Orthopedic Surgery", bio: "Specialist in orthopedic surgery and joint prostheses." },
    DoctorText { id: 13, role: "Physiotherapist", specialty: "Rehabilitation", bio: "Master in rehabilitation specializing in orthopedic physiotherapy." },
    DoctorText { id: 14, role: "Dentist", specialty: "General Dentistry", bio: "Dentist specializing in conservative treatments and dental aesthetics." },
    DoctorText { id: 15, role: "Dentist", specialty: "Conservative Dentistry", bio: "Dentist with extensive experience in conservative dentistry and endodontics." },
    DoctorText { id: 16, role: "Periodontist", specialty: "Periodontics", bio: "Dental specialist in periodontics, implants and tissue regeneration." },
    DoctorText { id: 17, role: "Aesthetic Medicine", specialty: "Aesthetics and Rheumatology", bio: "Medical specialist in aesthetic medicine and rejuvenation treatments." },
    DoctorText { id: 18, role: "Pediatrician", specialty: "Pediatrics", bio: "Pediatrician dedicated to comprehensive care for children and adolescents." },
];

static TESTIMONIALS_ES: &[TestimonialText] = &[
    TestimonialText { id: 1, text: "Increíble transformación. Llevaba años avergonzada de mi sonrisa y en Wojtek me han cambiado la vida. ¡No puedo dejar de sonreír!" },
    TestimonialText { id: 2, text: "Como profesional de la imagen, mi sonrisa es mi carta de presentación. Diseñaron mi ortodoncia invisible perfectamente." },
    TestimonialText { id: 3, text: "Tenía pánico al dentista desde pequeña. En Wojtek me trataron con tanta paciencia que ahora voy sin ningún miedo." },
];

static TESTIMONIALS_PL: &[TestimonialText] = &[
    TestimonialText { id: 1, text: "Niesamowita transformacja. Przez lata wstydziłam się mojego uśmiechu, a w Wojtek zmienili mi życie. Nie mogę przestać się uśmiechać!" },
    TestimonialText { id: 2, text: "Jako profesjonalista od wizerunku, mój uśmiech jest moją wizytówką. Doskonale zaprojektowali moją niewidoczną ortodoncję." },
    TestimonialText { id: 3, text: "Od dziecka bałam się dentysty. W Wojtek traktowali mnie z taką cierpliwością, że teraz chodzę bez żadnego strachu." },
];

static TESTIMONIALS_UK: &[TestimonialText] = &[
    TestimonialText { id: 1, text: "Неймовірна трансформація. Роками соромилася своєї посмішки, а в Wojtek змінили моє життя. Не можу перестати посміхатися!" },
    TestimonialText { id: 2, text: "Як професіонал у сфері іміджу, моя посмішка - це моя візитівка. Вони ідеально розробили мою невидиму ортодонтію." },
    TestimonialText { id: 3, text: "З дитинства боялася стоматолога. У Wojtek ставилися до мене з такою терплячістю, що тепер ходжу без жодного страху." },
];

static TESTIMONIALS_EN: &[TestimonialText] = &[
    TestimonialText { id: 1, text: "Incredible transformation. I was embarrassed about my smile for years and at Wojtek they changed my life. I can't stop smiling!" },
    TestimonialText { id: 2, text: "As an image professional, my smile is my calling card. They designed my invisible orthodontics perfectly." },
    TestimonialText { id: 3, text: "I was terrified of the dentist since childhood. At Wojtek they treated me with such patience that now I go without any fear." },
];
