use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Icon;
use crate::disclosure::{Disclosure, DisclosureAction};

const FAQ_ITEM_CSS: &str = r#"
    .faq-item {
        border-bottom: 1px solid #e2e8f0;
        padding: 1rem 0;
    }

    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        text-align: left;
        font-weight: 700;
        font-size: 1.125rem;
        color: #1e293b;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0;
        transition: color 0.2s ease;
    }

    .faq-question:hover {
        color: #ca8a04;
    }

    .faq-chevron {
        transition: transform 0.3s ease;
    }

    .faq-item.open .faq-chevron {
        transform: rotate(180deg);
        color: #eab308;
    }

    .faq-answer {
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: max-height 0.4s ease, opacity 0.4s ease;
    }

    .faq-item.open .faq-answer {
        max-height: 600px;
        opacity: 1;
    }

    .faq-answer p {
        padding: 1rem 0;
        margin: 0;
        color: #475569;
        line-height: 1.625;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub id: AttrValue,
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let panel = use_reducer(Disclosure::default);

    let toggle = {
        let panel = panel.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            log::debug!("Toggling FAQ panel {}", id);
            panel.dispatch(DisclosureAction::Activate);
        })
    };

    let is_open = panel.is_open;
    let answer_id = format!("{}-answer", props.id);

    // The answer stays in the DOM so the close transition can play; `open`
    // and the aria attributes are what decide visibility.
    html! {
        <div id={props.id.clone()} class={classes!("faq-item", is_open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span>{&props.question}</span>
                <span class="faq-chevron">{Icon::ChevronDown.glyph()}</span>
            </button>
            <div id={answer_id} class="faq-answer" aria-hidden={(!is_open).to_string()}>
                <p>{&props.answer}</p>
            </div>
            <style>{FAQ_ITEM_CSS}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_collapsed_until_the_item_opens() {
        let closed = FAQ_ITEM_CSS
            .split(".faq-answer {")
            .nth(1)
            .and_then(|rule| rule.split('}').next())
            .unwrap_or_default();
        assert!(closed.contains("max-height: 0;"));
        assert!(closed.contains("opacity: 0;"));
        assert!(FAQ_ITEM_CSS.contains(".faq-item.open .faq-answer {"));
        assert!(FAQ_ITEM_CSS.contains(".faq-item.open .faq-chevron {"));
    }
}
