use yew::prelude::*;

use super::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Fade the title in when it scrolls into view.
    #[prop_or_default]
    pub animate: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let content = html! {
        <div class="section-title">
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <span class="section-subtitle">{subtitle}</span> }
                } else {
                    html! {}
                }
            }
            <h2>
                { for props.children.iter() }
                {
                    if let Some(highlight) = &props.highlight {
                        html! { <span class="text-gradient">{" "}{highlight}</span> }
                    } else {
                        html! {}
                    }
                }
            </h2>
            {
                if let Some(description) = &props.description {
                    html! { <p class="section-description">{description}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    };

    if props.animate {
        html! { <Reveal>{content}</Reveal> }
    } else {
        content
    }
}
