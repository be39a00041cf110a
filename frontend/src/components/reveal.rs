use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Whether enough of an element is on screen to count as seen.
///
/// `amount` is the visible fraction required; `0.0` means any visible pixel. Elements taller
/// than the viewport are measured against the viewport height.
pub fn in_view(top: f64, height: f64, viewport_height: f64, amount: f64) -> bool {
    let visible = ((top + height).min(viewport_height) - top.max(0.0)).max(0.0);
    if amount <= 0.0 {
        return visible > 0.0;
    }
    let measured = height.min(viewport_height);
    measured > 0.0 && visible / measured >= amount
}

/// CSS `transition-delay` for the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize, step: f64) -> String {
    format!("transition-delay: {}s;", index as f64 * step)
}

/// Flips to true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_reveal(node: NodeRef, amount: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let done = Rc::new(Cell::new(false));
                let window = web_sys::window();

                let check = {
                    let window = window.clone();
                    move || {
                        if done.get() {
                            return;
                        }
                        let (Some(window), Some(el)) = (window.as_ref(), node.cast::<Element>()) else {
                            return;
                        };
                        let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                        let rect = el.get_bounding_client_rect();
                        if in_view(rect.top(), rect.height(), viewport, amount) {
                            done.set(true);
                            revealed.set(true);
                        }
                    }
                };

                // Already on screen at mount
                check();

                let listener = window.and_then(|window| {
                    let on_scroll = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .ok()?;
                    Some((window, on_scroll))
                });

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Scale,
}

impl RevealFrom {
    pub fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-below",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
            RevealFrom::Scale => "reveal-scale",
        }
    }

    /// Alternating sides for two-column grids.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealFrom::Left
        } else {
            RevealFrom::Right
        }
    }
}

pub fn reveal_classes(revealed: bool, from: RevealFrom) -> Classes {
    classes!("reveal", from.class(), revealed.then_some("revealed"))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub amount: f64,
    #[prop_or_default]
    pub delay: f64,
}

/// Wrapper that animates its children in once they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.amount);

    html! {
        <div
            ref={node}
            class={classes!(reveal_classes(revealed, props.from), props.class.clone())}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_not_in_view() {
        assert!(!in_view(900.0, 200.0, 800.0, 0.0));
        assert!(!in_view(-300.0, 200.0, 800.0, 0.0));
    }

    #[test]
    fn any_pixel_counts_without_amount() {
        assert!(in_view(799.0, 200.0, 800.0, 0.0));
        assert!(in_view(-199.0, 200.0, 800.0, 0.0));
    }

    #[test]
    fn amount_requires_a_visible_fraction() {
        // 40 of 200 px visible is exactly 20%.
        assert!(in_view(760.0, 200.0, 800.0, 0.2));
        assert!(!in_view(770.0, 200.0, 800.0, 0.2));
    }

    #[test]
    fn tall_elements_measure_against_viewport() {
        assert!(in_view(0.0, 5000.0, 800.0, 0.5));
        assert!(!in_view(0.0, 0.0, 800.0, 0.5));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0, 0.15), "transition-delay: 0s;");
        assert_eq!(stagger_delay(2, 0.3), "transition-delay: 0.6s;");
    }

    #[test]
    fn alternating_sides() {
        assert!(RevealFrom::alternating(0) == RevealFrom::Left);
        assert!(RevealFrom::alternating(3) == RevealFrom::Right);
    }
}
