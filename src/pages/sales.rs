use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::countdown::CountdownClock;
use crate::components::faq_item::FaqItem;
use crate::components::floating_whatsapp::FloatingWhatsApp;
use crate::components::particles::Particles;
use crate::components::reveal::{Motion, Reveal};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::{self, Icon};
use crate::seo;
use crate::Route;

#[function_component(Ribbon)]
fn ribbon() -> Html {
    html! {
        <div class="ribbon">{content::RIBBON}</div>
    }
}

#[derive(Properties, PartialEq)]
struct YearProps {
    year: i32,
}

#[function_component(Hero)]
fn hero(props: &YearProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-glow">
                <div class="hero-glow-gold"></div>
                <div class="hero-glow-blue"></div>
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <Reveal motion={Motion::FadeLeft} on_mount={true}>
                        <div class="hero-badge">
                            {Icon::Star.glyph()}{" "}{content::enrollment_badge(props.year)}
                        </div>
                    </Reveal>

                    <Reveal on_mount={true} delay_ms={100}>
                        <h1>
                            {"Domine la Bolsa de "}
                            <span class="gold-gradient">{"Colombia y USA"}</span>
                        </h1>
                    </Reveal>

                    <Reveal on_mount={true} delay_ms={200}>
                        <p class="hero-subtitle">
                            {"Deje de apostar y empiece a invertir con metodología profesional. Aprenda el sistema real que usan los expertos sin complicaciones."}
                        </p>
                    </Reveal>

                    <Reveal on_mount={true} delay_ms={300} class="hero-actions">
                        <a href={config::PAYMENT_LINK} class="hero-cta">
                            <span>{"ASEGURAR MI CUPO"}</span>
                            <span class="cta-arrow">{Icon::ArrowRight.glyph()}</span>
                        </a>
                        <div class="hero-assurance">
                            <div class="hero-secure">
                                <span class="icon-green">{Icon::ShieldCheck.glyph()}</span>
                                {" Pago 100% Seguro"}
                            </div>
                            <div class="hero-guarantee">{"7 Días de garantía incondicional"}</div>
                        </div>
                    </Reveal>
                </div>

                <Reveal motion={Motion::Grow} on_mount={true} delay_ms={400} class="hero-media">
                    <div class="video-frame">
                        <iframe
                            src={config::video_embed_url(config::VIDEO_ID)}
                            title="Presentación del Curso"
                            allowfullscreen={true}
                        />
                    </div>
                    <Reveal motion={Motion::SlideFromRight} on_mount={true} delay_ms={800} class="social-proof">
                        <div class="avatars">
                            { for (1..=3).map(|i| html! {
                                <img src={config::avatar_url(i + 20)} alt="" />
                            }) }
                        </div>
                        <div>
                            <div class="social-proof-count">{content::STUDENTS_TRAINED}</div>
                            <div class="social-proof-label">{"Alumnos Formados"}</div>
                        </div>
                    </Reveal>
                </Reveal>
            </div>
        </header>
    }
}

#[function_component(PainPoints)]
fn pain_points() -> Html {
    html! {
        <section class="section section-muted">
            <div class="container narrow">
                <SectionHeader
                    title="Invertir sin formación no es inversión..."
                    subtitle="Es, sencillamente, una apuesta arriesgada donde la casa siempre gana."
                />
                <div class="grid two">
                    { for content::PAIN_POINTS.iter().enumerate().map(|(i, text)| html! {
                        <Reveal motion={Motion::Pop} delay_ms={i as u32 * 100} class="pain-card">
                            <div class="pain-icon">{Icon::Lock.glyph()}</div>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Transformación Radical"
                    subtitle="No es solo teoría, es un sistema paso a paso diseñado para resultados reales."
                />
                <div class="grid four">
                    { for content::FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal delay_ms={i as u32 * 100} class="feature-card">
                            <div class="feature-icon">{feature.icon.glyph()}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.desc}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Instructor)]
fn instructor() -> Html {
    html! {
        <section class="section section-dark instructor">
            <div class="instructor-glow"></div>
            <div class="container instructor-inner">
                <div class="instructor-photo-col">
                    <Reveal motion={Motion::Grow} class="instructor-photo">
                        <div class="instructor-frame"></div>
                        <img src={config::INSTRUCTOR_PHOTO} alt={content::INSTRUCTOR} />
                        <div class="instructor-years">
                            <div class="instructor-years-value">{content::YEARS_EXPERIENCE}</div>
                            <div class="instructor-years-label">{"Años de experiencia"}</div>
                        </div>
                    </Reveal>
                </div>
                <div class="instructor-copy">
                    <div class="instructor-heading">
                        <span class="eyebrow">{"El Mentor"}</span>
                        <h2>{content::INSTRUCTOR}</h2>
                        <div class="gold-bar"></div>
                    </div>
                    <p class="instructor-quote">{content::INSTRUCTOR_QUOTE}</p>
                    <ul class="credentials">
                        { for content::CREDENTIALS.iter().map(|item| html! {
                            <li>
                                <span class="credential-check">{Icon::CheckCircle.glyph()}</span>
                                <span>{*item}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(Bonuses)]
fn bonuses() -> Html {
    let subtitle = format!(
        "Al inscribirse hoy, recibirá USD ${} adicionales en bonos de alto valor totalmente GRATIS.",
        content::BONUS_TOTAL_USD
    );

    html! {
        <section class="section">
            <div class="container">
                <SectionHeader title="Súper Pack de Regalos" {subtitle} />
                <div class="grid four">
                    { for content::BONUSES.iter().enumerate().map(|(i, bonus)| html! {
                        <Reveal delay_ms={i as u32 * 100} class="bonus-card">
                            <div class="bonus-tag">{"Gratis"}</div>
                            <div class="bonus-icon">{bonus.icon.glyph()}</div>
                            <h4>{bonus.title}</h4>
                            <p>{bonus.desc}</p>
                            <div class="bonus-value">
                                <span>{format!("Valor: {}", bonus.value)}</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Offer)]
fn offer() -> Html {
    html! {
        <section id="oferta" class="section section-dark offer">
            <Particles />
            <div class="container narrow offer-inner">
                <Reveal motion={Motion::Pop} class="offer-card">
                    <div class="offer-badge">{"Inscripciones Limitadas"}</div>

                    <div class="offer-body">
                        <div>
                            <p class="offer-caption">{"Valor total del programa"}</p>
                            <h3 class="offer-original">{format!("USD ${}", content::ORIGINAL_PRICE_USD)}</h3>
                        </div>

                        <div class="offer-price-block">
                            <p class="offer-today">{"Oferta hoy solamente"}</p>
                            <span class="offer-price">
                                <span class="offer-currency">{"$"}</span>
                                {content::OFFER_PRICE_USD}
                            </span>
                        </div>

                        <div class="offer-timer">
                            <p class="offer-caption">{"La oferta termina en:"}</p>
                            <CountdownClock />
                        </div>

                        <div class="offer-actions">
                            <a href={config::PAYMENT_LINK} class="offer-cta">
                                {"¡SÍ! QUIERO EL ACCESO VITALICIO "}
                                <span class="cta-arrow">{Icon::ArrowRight.glyph()}</span>
                            </a>
                            <p class="offer-note">
                                {"Disponemos de múltiples métodos de pago y opción de cuotas vía Hotmart."}
                            </p>
                        </div>

                        <div class="trust-badges">
                            { for content::TRUST_BADGES.iter().map(|(icon, label)| html! {
                                <div class="trust-badge">
                                    <span class="icon-green">{icon.glyph()}</span>
                                    {" "}{*label}
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section id="preguntas" class="section">
            <div class="container narrow">
                <SectionHeader
                    title="Preguntas Frecuentes"
                    subtitle="Despeje sus dudas y dé el paso con seguridad."
                />
                <div class="faq-list">
                    { for content::FAQS.iter().enumerate().map(|(i, entry)| html! {
                        <FaqItem
                            key={i}
                            id={format!("faq-{}", i + 1)}
                            question={entry.question}
                            answer={entry.answer}
                        />
                    }) }
                </div>

                <div class="support">
                    <div class="support-copy">
                        <h3>{"¿Dudas adicionales?"}</h3>
                        <p>{"Hable directamente con nuestro soporte VIP por WhatsApp y reciba atención personalizada."}</p>
                    </div>
                    <a href={config::whatsapp_link()} class="support-cta">
                        {Icon::Message.glyph()}{" CHATEAR CON SOPORTE"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &YearProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <div class="footer-logo">
                        {"FINANZAS"}<span>{"EMOCIONALES"}</span>
                    </div>
                    <p class="footer-disclaimer">{content::DISCLAIMER}</p>
                </div>
                <div class="footer-bottom">
                    <div class="footer-credits">
                        <p>{content::copyright_line(props.year)}</p>
                        <p class="footer-dev">{"Desarrollado por Dmente Digital"}</p>
                    </div>
                    <div class="footer-links">
                        <Link<Route> to={Route::Terms}>{"Términos"}</Link<Route>>
                        <Link<Route> to={Route::Privacy}>{"Privacidad"}</Link<Route>>
                        <Link<Route> to={Route::Cookies}>{"Cookies"}</Link<Route>>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let structured_data = seo::structured_data().to_string();
    // One clock read per mount so the badge and the footer always agree
    let year = use_state(|| Utc::now().year());

    html! {
        <div class="sales-page">
            <script type="application/ld+json">{structured_data}</script>
            <FloatingWhatsApp />
            <Ribbon />
            <Hero year={*year} />
            <PainPoints />
            <Benefits />
            <Instructor />
            <Bonuses />
            <Offer />
            <Faq />
            <Footer year={*year} />

            <style>
                {r#"
                .sales-page {
                    min-height: 100vh;
                    background: #fff;
                    color: #0f172a;
                    overflow-x: hidden;
                    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .sales-page ::selection {
                    background: #fef08a;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .container.narrow {
                    max-width: 56rem;
                }

                .section {
                    padding: 8rem 1rem;
                    position: relative;
                }

                .section-muted {
                    background: #f8fafc;
                }

                .section-dark {
                    background: #0f172a;
                    color: #fff;
                    overflow: hidden;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                }

                @media (min-width: 768px) {
                    .grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .grid.four {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }

                .icon-green {
                    color: #22c55e;
                }

                .gold-gradient {
                    background: linear-gradient(to right, #facc15, #ca8a04);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .gold-bar {
                    height: 0.5rem;
                    width: 5rem;
                    background: #eab308;
                    border-radius: 9999px;
                }

                .cta-arrow {
                    display: inline-block;
                    transition: transform 0.3s ease;
                }

                /* Reveal */
                .reveal {
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal:not(.revealed) {
                    opacity: 0;
                }

                .reveal-up:not(.revealed) {
                    transform: translateY(20px);
                }

                .reveal-left:not(.revealed) {
                    transform: translateX(-20px);
                }

                .reveal-right:not(.revealed) {
                    transform: translateX(50px);
                }

                .reveal-grow:not(.revealed) {
                    transform: scale(0.9);
                }

                .reveal-pop:not(.revealed) {
                    transform: scale(0.95);
                }

                /* Section header */
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    margin: 0 0 1rem;
                    color: #0f172a;
                    letter-spacing: -0.025em;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #475569;
                    margin: 0;
                }

                .section-header-bar {
                    height: 0.375rem;
                    width: 6rem;
                    background: #eab308;
                    margin: 1.5rem auto 0;
                    border-radius: 9999px;
                }

                @media (min-width: 768px) {
                    .section-header h2 {
                        font-size: 3rem;
                    }
                }

                /* Ribbon */
                .ribbon {
                    background: #eab308;
                    color: #000;
                    padding: 0.75rem 1rem;
                    text-align: center;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                /* Hero */
                .hero {
                    position: relative;
                    background: #0a0f1d;
                    color: #fff;
                    padding: 6rem 1rem 8rem;
                    overflow: hidden;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                }

                .hero-glow-gold,
                .hero-glow-blue {
                    position: absolute;
                    width: 50%;
                    height: 50%;
                    filter: blur(120px);
                    border-radius: 9999px;
                }

                .hero-glow-gold {
                    top: -10%;
                    right: -10%;
                    background: rgba(234, 179, 8, 0.1);
                }

                .hero-glow-blue {
                    bottom: -10%;
                    left: -10%;
                    background: rgba(59, 130, 246, 0.1);
                }

                .hero-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 4rem;
                    position: relative;
                    z-index: 10;
                }

                .hero-copy {
                    flex: 1;
                    text-align: center;
                }

                .hero-copy > * + * {
                    margin-top: 2rem;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #eab308;
                }

                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    margin: 0;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #94a3b8;
                    max-width: 42rem;
                    margin: 0;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                    padding-top: 1rem;
                }

                .hero-cta {
                    position: relative;
                    background: #eab308;
                    color: #000;
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    font-weight: 900;
                    font-size: 1.25rem;
                    box-shadow: 0 0 20px rgba(234, 179, 8, 0.3);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-decoration: none;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: #facc15;
                    transform: scale(1.05);
                }

                .hero-cta:hover .cta-arrow,
                .offer-cta:hover .cta-arrow {
                    transform: translateX(0.5rem);
                }

                .hero-assurance {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .hero-secure {
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                .hero-guarantee {
                    font-size: 10px;
                    color: #64748b;
                    margin-top: 0.25rem;
                }

                .hero-media {
                    flex: 1;
                    width: 100%;
                    position: relative;
                }

                .video-frame {
                    aspect-ratio: 16 / 9;
                    background: #1e293b;
                    border-radius: 1.5rem;
                    box-shadow: 0 0 50px rgba(0, 0, 0, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    position: relative;
                }

                .video-frame iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                .social-proof {
                    position: absolute;
                    bottom: -2rem;
                    right: -1rem;
                    background: #fff;
                    color: #0f172a;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    border: 1px solid #f1f5f9;
                    display: none;
                    align-items: center;
                    gap: 1rem;
                }

                .avatars {
                    display: flex;
                }

                .avatars img {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 2px solid #fff;
                    margin-left: -0.75rem;
                }

                .avatars img:first-child {
                    margin-left: 0;
                }

                .social-proof-count {
                    font-weight: 900;
                    font-size: 1.125rem;
                }

                .social-proof-label {
                    font-size: 10px;
                    font-weight: 700;
                    color: #64748b;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                @media (min-width: 640px) {
                    .hero-actions {
                        flex-direction: row;
                    }

                    .social-proof {
                        display: flex;
                    }
                }

                @media (min-width: 768px) {
                    .hero h1 {
                        font-size: 4.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                    }

                    .social-proof {
                        right: -2rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-inner {
                        flex-direction: row;
                    }

                    .hero-copy {
                        text-align: left;
                    }

                    .hero-actions {
                        justify-content: flex-start;
                    }
                }

                /* Pain points */
                .pain-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #e2e8f0;
                    display: flex;
                    gap: 1.5rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease, opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .pain-card:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    border-color: #fee2e2;
                }

                .pain-icon {
                    width: 3rem;
                    height: 3rem;
                    background: #fef2f2;
                    color: #ef4444;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    transition: background-color 0.3s ease;
                }

                .pain-card:hover .pain-icon {
                    background: #ef4444;
                }

                .pain-card p {
                    font-weight: 700;
                    color: #334155;
                    line-height: 1.375;
                    padding-top: 0.5rem;
                    margin: 0;
                }

                /* Benefits */
                .feature-card {
                    background: #fff;
                    padding: 2.5rem;
                    border-radius: 2.5rem;
                    border: 1px solid #f1f5f9;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    height: 100%;
                    box-sizing: border-box;
                    transition: box-shadow 0.5s ease, border-color 0.5s ease, opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .feature-card:hover {
                    box-shadow: 0 25px 50px -12px rgba(234, 179, 8, 0.25);
                    border-color: #fef08a;
                }

                .feature-icon {
                    margin-bottom: 2rem;
                    padding: 1rem;
                    background: #f8fafc;
                    border-radius: 1rem;
                    font-size: 1.5rem;
                    transition: background-color 0.5s ease;
                }

                .feature-card:hover .feature-icon {
                    background: #eab308;
                }

                .feature-card h3 {
                    font-weight: 900;
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                    line-height: 1.25;
                }

                .feature-card p {
                    color: #64748b;
                    line-height: 1.625;
                    margin: 0;
                }

                /* Instructor */
                .instructor-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 40%;
                    height: 100%;
                    background: rgba(234, 179, 8, 0.05);
                    filter: blur(150px);
                    border-radius: 9999px;
                }

                .instructor-inner {
                    max-width: 72rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 5rem;
                }

                .instructor-photo-col,
                .instructor-copy {
                    flex: 1;
                }

                .instructor-photo {
                    position: relative;
                    z-index: 10;
                }

                .instructor-frame {
                    position: absolute;
                    inset: -1.5rem;
                    border: 2px solid rgba(234, 179, 8, 0.3);
                    border-radius: 3rem;
                    transform: rotate(-3deg);
                }

                .instructor-photo img {
                    position: relative;
                    width: 100%;
                    border-radius: 2.5rem;
                    transition: transform 0.7s ease;
                }

                .instructor-photo img:hover {
                    transform: scale(1.02);
                }

                .instructor-years {
                    position: absolute;
                    bottom: -2.5rem;
                    left: -2.5rem;
                    background: #eab308;
                    color: #000;
                    padding: 2rem;
                    border-radius: 1.5rem;
                }

                .instructor-years-value {
                    font-size: 2.25rem;
                    font-weight: 900;
                }

                .instructor-years-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .instructor-heading > * + * {
                    margin-top: 1rem;
                }

                .eyebrow {
                    color: #eab308;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                }

                .instructor-heading h2 {
                    font-size: 3rem;
                    font-weight: 900;
                    margin: 0;
                }

                .instructor-quote {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    font-style: italic;
                    font-weight: 500;
                    line-height: 1.625;
                    margin: 2rem 0;
                }

                .credentials {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .credentials li {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    color: #cbd5e1;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .credential-check {
                    background: rgba(234, 179, 8, 0.1);
                    color: #eab308;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.5rem;
                }

                @media (min-width: 768px) {
                    .instructor-inner {
                        flex-direction: row;
                    }
                }

                /* Bonuses */
                .bonus-card {
                    position: relative;
                    background: #fff;
                    border: 2px dashed #e2e8f0;
                    border-radius: 2.5rem;
                    padding: 2.5rem;
                    transition: border-color 0.3s ease, background-color 0.3s ease, opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .bonus-card:hover {
                    border-color: #eab308;
                    background: rgba(254, 252, 232, 0.5);
                }

                .bonus-tag {
                    position: absolute;
                    top: -0.75rem;
                    right: 2rem;
                    background: #eab308;
                    color: #000;
                    padding: 0.25rem 1rem;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    border-radius: 0.5rem;
                }

                .bonus-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    background: #f8fafc;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    font-size: 1.5rem;
                    transition: background-color 0.5s ease;
                }

                .bonus-card:hover .bonus-icon {
                    background: #eab308;
                }

                .bonus-card h4 {
                    font-weight: 900;
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                    color: #1e293b;
                }

                .bonus-card p {
                    color: #64748b;
                    font-size: 0.875rem;
                    margin: 0 0 1.5rem;
                    line-height: 1.625;
                }

                .bonus-value {
                    padding-top: 1.5rem;
                    border-top: 1px solid #f1f5f9;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #94a3b8;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: line-through;
                }

                /* Offer */
                .offer-inner {
                    position: relative;
                    z-index: 10;
                }

                .offer-card {
                    background: #fff;
                    color: #0f172a;
                    border-radius: 3rem;
                    padding: 2.5rem;
                    box-shadow: 0 0 100px rgba(234, 179, 8, 0.2);
                    text-align: center;
                    position: relative;
                }

                .offer-badge {
                    background: #eab308;
                    color: #000;
                    font-weight: 900;
                    padding: 0.75rem 3rem;
                    border-radius: 9999px;
                    display: inline-block;
                    margin-bottom: 3rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                }

                .offer-body > * + * {
                    margin-top: 3rem;
                }

                .offer-caption {
                    color: #94a3b8;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    font-size: 0.75rem;
                    margin: 0 0 1rem;
                }

                .offer-original {
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: #cbd5e1;
                    text-decoration: line-through;
                    opacity: 0.5;
                    margin: 0;
                }

                .offer-today {
                    color: #ca8a04;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    margin: 0 0 0.5rem;
                }

                .offer-price {
                    font-size: 6rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                }

                .offer-currency {
                    font-size: 2.25rem;
                    vertical-align: top;
                }

                .offer-timer {
                    background: #f8fafc;
                    padding: 2.5rem;
                    border-radius: 2.5rem;
                    border: 1px solid #f1f5f9;
                }

                .offer-timer .offer-caption {
                    letter-spacing: 0.1em;
                    margin-bottom: 2rem;
                }

                .offer-cta {
                    width: 100%;
                    box-sizing: border-box;
                    background: #eab308;
                    color: #000;
                    padding: 2rem 1rem;
                    border-radius: 1.5rem;
                    font-weight: 900;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .offer-cta:hover {
                    background: #facc15;
                    transform: scale(1.05);
                }

                .offer-note {
                    color: #64748b;
                    font-weight: 700;
                    font-size: 0.875rem;
                    margin: 1.5rem 0 0;
                }

                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #f1f5f9;
                }

                .trust-badge {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #94a3b8;
                }

                @media (min-width: 768px) {
                    .offer-card {
                        padding: 5rem;
                    }

                    .offer-price {
                        font-size: 8rem;
                    }
                }

                /* FAQ */
                .faq-list > * + * {
                    margin-top: 0.5rem;
                }

                .support {
                    margin-top: 5rem;
                    padding: 3rem;
                    background: #f8fafc;
                    border-radius: 2.5rem;
                    border: 1px solid #e2e8f0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2.5rem;
                }

                .support-copy {
                    flex: 1;
                    text-align: center;
                }

                .support-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 900;
                    margin: 0 0 1rem;
                }

                .support-copy p {
                    color: #64748b;
                    font-weight: 500;
                    margin: 0;
                }

                .support-cta {
                    background: #fff;
                    border: 2px solid #0f172a;
                    color: #0f172a;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    font-weight: 900;
                    text-decoration: none;
                    white-space: nowrap;
                    transition: all 0.2s ease;
                }

                .support-cta:hover {
                    background: #0f172a;
                    color: #fff;
                }

                @media (min-width: 768px) {
                    .support {
                        flex-direction: row;
                    }

                    .support-copy {
                        text-align: left;
                    }
                }

                /* Footer */
                .footer {
                    padding: 5rem 1rem;
                    background: #0f172a;
                    color: #94a3b8;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .footer-inner {
                    text-align: center;
                }

                .footer-brand {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-logo {
                    color: #fff;
                    font-weight: 900;
                    font-size: 1.875rem;
                    letter-spacing: -0.05em;
                }

                .footer-logo span {
                    color: #eab308;
                }

                .footer-disclaimer {
                    max-width: 48rem;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    color: #64748b;
                    margin: 0;
                }

                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .footer-credits p {
                    margin: 0 0 0.5rem;
                }

                .footer-dev {
                    color: rgba(234, 179, 8, 0.5);
                }

                .footer-links {
                    display: flex;
                    gap: 2rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-links a:hover {
                    color: #eab308;
                }

                @media (min-width: 768px) {
                    .ribbon {
                        font-size: 0.875rem;
                    }

                    .footer-bottom {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </div>
    }
}
