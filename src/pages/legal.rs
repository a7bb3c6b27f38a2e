use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content;
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalLayoutProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalLayout)]
fn legal_layout(props: &LegalLayoutProps) -> Html {
    // Legal pages are reached from the footer, so start them at the top
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content">
            <Link<Route> to={Route::Home} classes="legal-back">
                {"← Volver al curso"}
            </Link<Route>>
            <h1>{&props.title}</h1>
            <p class="company-name">{format!("{} · {}", content::BRAND, content::INSTRUCTOR)}</p>

            { for props.children.iter() }

            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Términos"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacidad"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Cookies}>{"Cookies"}</Link<Route>>
            </div>

            <style>
                {r#"
                .legal-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 6rem;
                    color: #0f172a;
                    line-height: 1.7;
                    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .legal-content h1 {
                    font-size: 2.5rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    margin: 2rem 0 0.5rem;
                }

                .legal-content h2 {
                    font-size: 1.25rem;
                    font-weight: 800;
                    margin: 2.5rem 0 0.75rem;
                }

                .legal-content p,
                .legal-content li {
                    color: #475569;
                }

                .company-name {
                    color: #ca8a04 !important;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                }

                .legal-back,
                .legal-links a {
                    color: #ca8a04;
                    text-decoration: none;
                    font-weight: 700;
                }

                .legal-links {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e2e8f0;
                    color: #94a3b8;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalLayout title="Términos y Condiciones">
            <section>
                <h2>{"1. Naturaleza del contenido"}</h2>
                <p>{content::DISCLAIMER}</p>
            </section>

            <section>
                <h2>{"2. Acceso al curso"}</h2>
                <p>{"El acceso al curso y a los bonos se habilita tras la confirmación del pago. El acceso a las lecciones grabadas es vitalicio."}</p>
            </section>

            <section>
                <h2>{"3. Pagos y garantía"}</h2>
                <ul>
                    <li>{"Los pagos se procesan a través de Hotmart; esta página no recibe ni almacena datos de pago."}</li>
                    <li>{"Dispone de 7 días de garantía incondicional desde la compra, gestionada por Hotmart."}</li>
                    <li>{"El precio de lanzamiento y el contador de la oferta son promocionales."}</li>
                </ul>
                <p>
                    {"Para completar una compra visite "}
                    <a href={config::PAYMENT_LINK}>{"la página de pago"}</a>
                    {"."}
                </p>
            </section>

            <section>
                <h2>{"4. Responsabilidad"}</h2>
                <p>{"Las decisiones de inversión que tome son de su exclusiva responsabilidad. Los resultados pasados no garantizan resultados futuros."}</p>
            </section>
        </LegalLayout>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalLayout title="Política de Privacidad">
            <section>
                <h2>{"1. Datos que recopilamos"}</h2>
                <p>{"Esta página no tiene formularios ni cuentas de usuario y no guarda datos personales."}</p>
            </section>

            <section>
                <h2>{"2. Terceros"}</h2>
                <ul>
                    <li>{"Hotmart procesa los datos de compra según su propia política de privacidad."}</li>
                    <li>{"WhatsApp recibe los mensajes que usted decida enviarnos por soporte."}</li>
                    <li>{"YouTube aloja el video de presentación incrustado en la página."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Contacto"}</h2>
                <p>
                    {"Para consultas sobre privacidad escríbanos por "}
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    {"."}
                </p>
            </section>
        </LegalLayout>
    }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    html! {
        <LegalLayout title="Política de Cookies">
            <section>
                <h2>{"1. Cookies propias"}</h2>
                <p>{"Esta página no establece cookies propias. El contador de la oferta y las preguntas frecuentes solo guardan su estado mientras la página está abierta."}</p>
            </section>

            <section>
                <h2>{"2. Cookies de terceros"}</h2>
                <p>{"El reproductor de YouTube incrustado y la página de pago de Hotmart pueden establecer sus propias cookies. Puede bloquearlas desde la configuración de su navegador."}</p>
            </section>
        </LegalLayout>
    }
}
