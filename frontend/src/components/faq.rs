use yew::prelude::*;
use yew_hooks::prelude::*;

use super::icons::{icon, Icon};

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

/// One question; each item keeps its own open state.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let is_open = use_bool_toggle(false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", "glass-panel", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="faq-question-text">{&props.question}</span>
                <div class="faq-toggle glass-panel">
                    { icon(Icon::ChevronDown, "faq-chevron") }
                </div>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-inner">
                    <p>{&props.answer}</p>
                </div>
            </div>
        </div>
    }
}
