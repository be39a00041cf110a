use std::cell::RefCell;
use std::rc::Rc;

use stylist::Style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::RippleConfig;
use crate::ripple::{
    now_seconds, CellCoord, ContainerRect, FrameLoop, GridDims, PointerTracker, RevealMask, RippleField,
};

#[derive(Properties, PartialEq)]
pub struct BackgroundCellsProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: RippleConfig,
}

/// Full-width section with the ripple grid behind its (pointer-inert) children.
#[function_component(BackgroundCells)]
pub fn background_cells(props: &BackgroundCellsProps) -> Html {
    html! {
        <div class={classes!("background-cells", props.class.clone())}>
            <BackgroundCellCore config={props.config.clone()} />
            {
                if !props.children.is_empty() {
                    html! {
                        <div class="background-cells-content">
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .background-cells {
                    position: relative;
                    min-height: 80vh;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    overflow: hidden;
                    background: #020202;
                }

                .background-cells-core {
                    position: absolute;
                    inset: 0;
                    height: 100%;
                }

                .background-cells-clip {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }

                .background-cells-fade {
                    position: absolute;
                    bottom: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 40;
                    pointer-events: none;
                    background: linear-gradient(to bottom, transparent, rgba(2, 2, 2, 0.2), rgba(2, 2, 2, 0.8));
                }

                .background-cells-mask {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    background: transparent;
                }

                .ripple-pattern {
                    display: flex;
                    flex-direction: row;
                    position: relative;
                    z-index: 30;
                }

                .ripple-strip {
                    display: flex;
                    flex-direction: column;
                    position: relative;
                    z-index: 20;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .ripple-fill {
                    width: 100%;
                    height: 100%;
                    opacity: 0;
                }

                .background-cells-content {
                    position: relative;
                    z-index: 50;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                    user-select: none;
                }
                "#}
            </style>
        </div>
    }
}

/// Stylist class sizing a cell for both breakpoints.
fn cell_class(config: &RippleConfig) -> Classes {
    let css = format!(
        r#"
        width: {small}px;
        height: {small}px;
        background: transparent;
        border-left: 1px solid;
        cursor: pointer;
        @media (min-width: {breakpoint}px) {{
            width: {medium}px;
            height: {medium}px;
        }}
        "#,
        small = config.cell_size_px,
        medium = config.cell_size_md_px,
        breakpoint = config.md_breakpoint_px,
    );
    match Style::new(css) {
        Ok(style) => classes!("ripple-cell", style.get_class_name().to_string()),
        Err(e) => {
            log::warn!("Could not build ripple cell style: {}", e);
            classes!("ripple-cell")
        }
    }
}

fn cell_from_event(e: &MouseEvent) -> Option<CellCoord> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let cell = target.closest("[data-row]").ok().flatten()?;
    CellCoord::from_attrs(cell.get_attribute("data-row"), cell.get_attribute("data-col"))
}

fn collect_fills(layer: &NodeRef) -> Vec<HtmlElement> {
    let Some(root) = layer.cast::<Element>() else {
        return Vec::new();
    };
    let Ok(list) = root.query_selector_all(".ripple-fill") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn wake(frames: &Rc<RefCell<Option<FrameLoop>>>) {
    if let Some(frames) = frames.borrow().as_ref() {
        frames.wake();
    }
}

#[derive(Properties, PartialEq)]
struct CoreProps {
    config: RippleConfig,
}

#[function_component(BackgroundCellCore)]
fn background_cell_core(props: &CoreProps) -> Html {
    let config = &props.config;
    let dims = GridDims::new(config.rows, config.cols);
    let mask = RevealMask::new(config.mask_diameter);

    let container_ref = use_node_ref();
    let mask_ref = use_node_ref();
    let highlight_ref = use_node_ref();
    let base_ref = use_node_ref();

    let field = {
        let config = config.clone();
        use_mut_ref(move || RippleField::from_config(&config))
    };
    let tracker = use_mut_ref(PointerTracker::default);
    let frames = use_mut_ref(|| None::<FrameLoop>);
    let cell_classes = use_memo(|config| cell_class(config), config.clone());

    // Frame clock painting both layers from the shared field
    {
        let field = field.clone();
        let frames = frames.clone();
        let highlight_ref = highlight_ref.clone();
        let base_ref = base_ref.clone();
        use_effect_with_deps(
            move |_| {
                let layers = [collect_fills(&highlight_ref), collect_fills(&base_ref)];
                log::debug!(
                    "Ripple grid mounted: {} highlight cells, {} base cells",
                    layers[0].len(),
                    layers[1].len()
                );

                let painter_field = field.clone();
                let frame_loop = FrameLoop::new(move |now| {
                    let mut field = painter_field.borrow_mut();
                    let active = field.tick(now);
                    for &index in field.dirty() {
                        let opacity = field.opacity_at(index).to_string();
                        for cell in layers.iter().filter_map(|layer| layer.get(index)) {
                            let _ = cell.style().set_property("opacity", &opacity);
                        }
                    }
                    active
                });
                if frame_loop.is_none() {
                    log::warn!("No window available, ripple animation disabled");
                }
                *frames.borrow_mut() = frame_loop;

                move || {
                    field.borrow_mut().halt();
                    if let Some(frame_loop) = frames.borrow_mut().take() {
                        frame_loop.stop();
                    }
                    log::debug!("Ripple grid unmounted");
                }
            },
            (),
        );
    }

    // Pointer tracking moves the reveal mask without re-rendering
    {
        let container_ref = container_ref.clone();
        let mask_ref = mask_ref.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let listener = container_ref.cast::<Element>().and_then(|container| {
                    let rect_source = container_ref.clone();
                    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let rect = rect_source
                            .cast::<Element>()
                            .map(|el| ContainerRect::from(&el.get_bounding_client_rect()));
                        let moved = tracker
                            .borrow_mut()
                            .track(e.client_x() as f64, e.client_y() as f64, rect);
                        if let (Some(position), Some(mask_el)) = (moved, mask_ref.cast::<Element>()) {
                            let _ = mask_el.set_attribute("style", &mask.style(position));
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);

                    match container.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref()) {
                        Ok(()) => Some((container, on_move)),
                        Err(_) => {
                            log::warn!("Could not attach pointer listener to ripple grid");
                            None
                        }
                    }
                });

                move || {
                    if let Some((container, on_move)) = listener {
                        let _ = container
                            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let onclick = {
        let field = field.clone();
        let frames = frames.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(cell) = cell_from_event(&e) else {
                return;
            };
            let mut field = field.borrow_mut();
            if field.click(cell, now_seconds()) {
                log::debug!("Ripple from {:?}", field.origin());
                drop(field);
                wake(&frames);
            }
        })
    };

    let onmouseover = {
        let field = field.clone();
        let frames = frames.clone();
        Callback::from(move |e: MouseEvent| {
            // Strip borders carry no coordinates and release the hovered cell
            if field.borrow_mut().hover_at(cell_from_event(&e), now_seconds()) {
                wake(&frames);
            }
        })
    };

    let onmouseleave = {
        let field = field.clone();
        let frames = frames.clone();
        Callback::from(move |_: MouseEvent| {
            if field.borrow_mut().hover_leave(now_seconds()) {
                wake(&frames);
            }
        })
    };

    let initial_mask = mask.style(tracker.borrow().position());

    html! {
        <div ref={container_ref} class="background-cells-core">
            <div class="background-cells-clip">
                <div class="background-cells-fade"></div>
                <div ref={mask_ref} class="background-cells-mask" style={initial_mask}>
                    <Pattern
                        dims={dims}
                        grid_ref={highlight_ref}
                        cell_class={(*cell_classes).clone()}
                        ripple_color={config.highlight_ripple_color.clone()}
                        border_color={config.highlight_border_color.clone()}
                    />
                </div>
                <Pattern
                    dims={dims}
                    grid_ref={base_ref}
                    cell_class={(*cell_classes).clone()}
                    ripple_color={config.base_ripple_color.clone()}
                    border_color={config.base_border_color.clone()}
                    opacity={config.base_layer_opacity}
                    onclick={Some(onclick)}
                    onmouseover={Some(onmouseover)}
                    onmouseleave={Some(onmouseleave)}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PatternProps {
    dims: GridDims,
    grid_ref: NodeRef,
    cell_class: Classes,
    ripple_color: AttrValue,
    border_color: AttrValue,
    #[prop_or(1.0)]
    opacity: f64,
    #[prop_or_default]
    onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    onmouseover: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    onmouseleave: Option<Callback<MouseEvent>>,
}

/// One copy of the lattice. Each row index is a vertical strip of `cols` cells.
#[function_component(Pattern)]
fn pattern(props: &PatternProps) -> Html {
    let dims = props.dims;
    let border_style = format!("border-color: {};", props.border_color);
    let fill_style = format!("background-color: {};", props.ripple_color);

    html! {
        <div
            ref={props.grid_ref.clone()}
            class="ripple-pattern"
            style={format!("opacity: {};", props.opacity)}
            onclick={props.onclick.clone()}
            onmouseover={props.onmouseover.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            { for (0..dims.rows).map(|row| html! {
                <div key={row.to_string()} class="ripple-strip">
                    { for (0..dims.cols).map(|col| html! {
                        <div
                            key={col.to_string()}
                            class={props.cell_class.clone()}
                            style={border_style.clone()}
                            data-row={row.to_string()}
                            data-col={col.to_string()}
                        >
                            <div class="ripple-fill" style={fill_style.clone()}></div>
                        </div>
                    })}
                </div>
            })}
        </div>
    }
}
