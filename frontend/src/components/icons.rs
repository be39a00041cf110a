use yew::prelude::*;

/// Stroke icons in a 24x24 box.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Icon {
    ArrowDown,
    ArrowRight,
    BookOpen,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    Cpu,
    Globe,
    Layers,
    Rocket,
    ShieldAlert,
    ShieldCheck,
    Sparkles,
    Zap,
}

enum Shape {
    Path(&'static str),
    Circle(f64),
    Rect(f64, f64, f64),
}

const SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10";

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::ArrowDown => &[Shape::Path("M12 5v14"), Shape::Path("m19 12-7 7-7-7")],
            Icon::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
            Icon::BookOpen => &[
                Shape::Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Shape::Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            Icon::CheckCircle => &[Shape::Circle(10.0), Shape::Path("m9 12 2 2 4-4")],
            Icon::ChevronDown => &[Shape::Path("m6 9 6 6 6-6")],
            Icon::ChevronRight => &[Shape::Path("m9 18 6-6-6-6")],
            Icon::Cpu => &[
                Shape::Rect(4.0, 16.0, 2.0),
                Shape::Rect(9.0, 6.0, 1.0),
                Shape::Path("M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3"),
            ],
            Icon::Globe => &[
                Shape::Circle(10.0),
                Shape::Path("M2 12h20"),
                Shape::Path("M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
            ],
            Icon::Layers => &[
                Shape::Path("m12 2 10 5-10 5L2 7z"),
                Shape::Path("m2 17 10 5 10-5"),
                Shape::Path("m2 12 10 5 10-5"),
            ],
            Icon::Rocket => &[
                Shape::Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"),
                Shape::Path("m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"),
            ],
            Icon::ShieldAlert => &[Shape::Path(SHIELD), Shape::Path("M12 8v4"), Shape::Path("M12 16h.01")],
            Icon::ShieldCheck => &[Shape::Path(SHIELD), Shape::Path("m9 12 2 2 4-4")],
            Icon::Sparkles => &[
                Shape::Path("M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z"),
                Shape::Path("M5 3v4M3 5h4M19 17v4M17 19h4"),
            ],
            Icon::Zap => &[Shape::Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
        }
    }
}

pub fn icon(kind: Icon, class: &'static str) -> Html {
    html! {
        <svg
            class={classes!("icon", class)}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { for kind.shapes().iter().map(|shape| match shape {
                Shape::Path(d) => html! { <path d={*d} /> },
                Shape::Circle(r) => html! { <circle cx="12" cy="12" r={r.to_string()} /> },
                Shape::Rect(at, size, rx) => html! {
                    <rect
                        x={at.to_string()}
                        y={at.to_string()}
                        width={size.to_string()}
                        height={size.to_string()}
                        rx={rx.to_string()}
                    />
                },
            })}
        </svg>
    }
}
