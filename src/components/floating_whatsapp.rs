use yew::prelude::*;

use crate::config;
use crate::content::Icon;

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    html! {
        <a
            href={config::whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            class="floating-whatsapp"
            aria-label="Contactar por WhatsApp"
        >
            <span class="floating-whatsapp-icon">{Icon::Message.glyph()}</span>
            <style>
                {r#"
                .floating-whatsapp {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    background: #22c55e;
                    color: #fff;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    animation: floating-whatsapp-in 0.4s ease-out both;
                    transition: background-color 0.2s ease, transform 0.2s ease;
                }

                .floating-whatsapp:hover {
                    background: #16a34a;
                    transform: scale(1.1);
                }

                .floating-whatsapp-icon {
                    font-size: 2rem;
                    line-height: 1;
                    animation: floating-whatsapp-pulse 2s ease-in-out infinite;
                }

                @keyframes floating-whatsapp-in {
                    from { transform: scale(0); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }

                @keyframes floating-whatsapp-pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.2); }
                }
                "#}
            </style>
        </a>
    }
}
