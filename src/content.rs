//! Marketing copy for the sales page. Fixed at build time apart from the year.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    Lock,
    Smartphone,
    Target,
    Gift,
    Users,
    Message,
    ShieldCheck,
    CheckCircle,
    Star,
    ArrowRight,
    ChevronDown,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::TrendingUp => "📈",
            Icon::Lock => "🔒",
            Icon::Smartphone => "📱",
            Icon::Target => "🎯",
            Icon::Gift => "🎁",
            Icon::Users => "👥",
            Icon::Message => "💬",
            Icon::ShieldCheck => "🛡️",
            Icon::CheckCircle => "✔",
            Icon::Star => "★",
            Icon::ArrowRight => "→",
            Icon::ChevronDown => "⌄",
        }
    }
}

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Bonus {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub desc: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const COURSE_NAME: &str = "Domine la Bolsa de Colombia y USA";
pub const BRAND: &str = "Finanzas Emocionales";
pub const INSTRUCTOR: &str = "Jaime Jaramillo";

pub const ORIGINAL_PRICE_USD: u32 = 657;
pub const OFFER_PRICE_USD: u32 = 347;
pub const BONUS_TOTAL_USD: u32 = 360;

pub const STUDENTS_TRAINED: &str = "+5,000";
pub const YEARS_EXPERIENCE: &str = "35+";

pub const RIBBON: &str = "🔥 Oferta de lanzamiento: Ahorra 50% + 4 Bonos Exclusivos solo hoy";

pub const PAIN_POINTS: &[&str] = &[
    "¿Siente que la inflación devora sus ahorros mes tras mes?",
    "¿Le aterra caer en una estafa 'mágica' de internet?",
    "¿Ve el mercado bursátil como un laberinto indescifrable?",
    "¿Desea una jubilación digna pero no confía solo en el sistema actual?",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::TrendingUp,
        title: "Estrategia Probada",
        desc: "Aprenda a elegir acciones con alto potencial antes que el mercado masivo.",
    },
    Feature {
        icon: Icon::Lock,
        title: "Seguridad Anti-Estafas",
        desc: "Identifique brokers regulados y gestione el riesgo profesionalmente.",
    },
    Feature {
        icon: Icon::Smartphone,
        title: "Acceso Vitalicio",
        desc: "Repita las 48 horas de formación cuantas veces quiera, de por vida.",
    },
    Feature {
        icon: Icon::Target,
        title: "Inteligencia Emocional",
        desc: "Domine el pánico y la euforia para no sabotear su propio éxito.",
    },
];

pub const INSTRUCTOR_QUOTE: &str = "\"Mi misión es democratizar el acceso a la riqueza. He visto los mercados cambiar por décadas; sé exactamente qué es una moda pasajera y qué es una oportunidad real.\"";

pub const CREDENTIALS: &[&str] = &[
    "Fundador de Finanzas Emocionales",
    "Experto en Psicología Financiera & Neuroeconomía",
    "Estratega de Inversión en Mercados Emergentes",
    "Mentor de miles de inversionistas en Latinoamérica",
];

pub const BONUSES: &[Bonus] = &[
    Bonus {
        icon: Icon::Gift,
        title: "Curso de Inversiones Inmobiliarias",
        value: "USD $90",
        desc: "Aprenda a invertir en ladrillos con poco capital.",
    },
    Bonus {
        icon: Icon::Users,
        title: "1 Año Club Invierte en Inmuebles",
        value: "USD $100",
        desc: "Comunidad exclusiva de networking y oportunidades.",
    },
    Bonus {
        icon: Icon::Message,
        title: "6 Meses 'Pregúntale a Jaime'",
        value: "USD $120",
        desc: "Sesiones mensuales en vivo para resolver todas sus dudas.",
    },
    Bonus {
        icon: Icon::ShieldCheck,
        title: "Bono Especial Impuestos",
        value: "USD $50+",
        desc: "30% de descuento para optimizar sus tributos legalmente.",
    },
];

pub const TRUST_BADGES: &[(Icon, &str)] = &[
    (Icon::ShieldCheck, "GARANTÍA DE SATISFACCIÓN"),
    (Icon::Lock, "PAGO ENCRIPTADO SSL"),
    (Icon::CheckCircle, "ACCESO INSTANTÁNEO"),
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "¿Cuándo inician las clases?",
        answer: "El curso inicia de inmediato tras su compra. Las sesiones en vivo 'Pregúntele a Jaime' comienzan el próximo lunes 19 de enero a las 8PM (Col). No obstante, puede empezar con las lecciones grabadas hoy mismo.",
    },
    FaqEntry {
        question: "¿Qué métodos de pago aceptan?",
        answer: "Pagos seguros vía Hotmart: Tarjeta de crédito (hasta 12 cuotas), PayPal, PSE, Efecty (Col) y métodos locales en toda Latinoamérica.",
    },
    FaqEntry {
        question: "¿Es seguro pagar por Hotmart?",
        answer: "Hotmart es la plataforma #1 de productos digitales en el mundo hispano. Su compra está protegida y sus datos 100% encriptados.",
    },
    FaqEntry {
        question: "¿Necesito mucho dinero para empezar a invertir?",
        answer: "No. Precisamente le enseñamos a optimizar su capital. Puede empezar a practicar con cuentas demo y luego invertir sumas pequeñas de forma segura.",
    },
    FaqEntry {
        question: "¿Recibo los bonos de inmediato?",
        answer: "¡Correcto! Tras la confirmación del pago, recibirá un correo con el acceso a la plataforma donde ya están habilitados los bonos y el curso principal.",
    },
];

pub const DISCLAIMER: &str = "Cualquier inversión implica riesgos financieros. Los resultados mostrados son basados en metodología profesional y dedicación. Esta página no ofrece consejos de inversión individualizados sino educación bursátil. Al participar usted asume la responsabilidad de sus decisiones.";

pub fn enrollment_badge(year: i32) -> String {
    format!("INSCRIPCIONES ABIERTAS {}", year)
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {} & {}. Todos los derechos reservados.", year, INSTRUCTOR, BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_is_below_the_listed_value() {
        assert!(OFFER_PRICE_USD < ORIGINAL_PRICE_USD);
    }

    #[test]
    fn every_faq_has_a_question_and_answer() {
        assert_eq!(FAQS.len(), 5);
        for entry in FAQS {
            assert!(entry.question.starts_with('¿'));
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn grids_have_four_cards() {
        assert_eq!(PAIN_POINTS.len(), 4);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(BONUSES.len(), 4);
    }

    #[test]
    fn badge_and_copyright_share_the_year() {
        for year in [2026, 2027] {
            let badge = enrollment_badge(year);
            let copyright = copyright_line(year);
            assert!(badge.ends_with(&year.to_string()));
            assert!(copyright.starts_with(&format!("© {} ", year)));
        }
        assert_eq!(enrollment_badge(2026), "INSCRIPCIONES ABIERTAS 2026");
        assert_eq!(
            copyright_line(2026),
            "© 2026 Jaime Jaramillo & Finanzas Emocionales. Todos los derechos reservados."
        );
    }
}
