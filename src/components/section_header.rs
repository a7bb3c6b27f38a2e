use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.class.clone())}>
            <Reveal>
                <h2>{&props.title}</h2>
            </Reveal>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal delay_ms={100}>
                            <p>{subtitle}</p>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
            <div class="section-header-bar"></div>
        </div>
    }
}
