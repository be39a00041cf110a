use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::background_cells::BackgroundCells;
use crate::components::cta_button::CtaButton;
use crate::components::faq::FaqAccordion;
use crate::components::icons::{icon, Icon};
use crate::components::reveal::{reveal_classes, stagger_delay, use_reveal, Reveal, RevealFrom};
use crate::components::section_title::SectionTitle;
use crate::config::{LandingConfig, RippleConfig};
use crate::pages::content::*;

#[derive(Properties, PartialEq)]
struct HeroProps {
    ripple: RippleConfig,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let entered = use_state(|| false);

    // One frame after mount so the entrance transition actually runs
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(30, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <BackgroundCells config={props.ripple.clone()}>
                <div class={classes!("hero-content", (*entered).then_some("entered"))}>
                    <div class="hero-badge">
                        { icon(Icon::Sparkles, "icon-xs") }
                        <span>{BADGE}</span>
                    </div>
                    <h1>
                        {HEADLINE}<br />
                        <span class="text-gradient">{HEADLINE_HIGHLIGHT}</span>
                    </h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                    <div class="hero-actions">
                        <CtaButton class="hero-cta">
                            {"Iniciar Operação"}
                            { icon(Icon::ArrowRight, "icon-sm") }
                        </CtaButton>
                    </div>
                </div>
            </BackgroundCells>
        </section>
    }
}

fn ribbon_text() -> Html {
    html! {
        <div class="ribbon-text">
            { for (0..RIBBON_REPEAT).map(|i| html! {
                <span key={i.to_string()} class="ribbon-item">
                    <span class="ribbon-dot"></span>
                    {"NOME DO "}<span class="ribbon-accent">{"PRODUTO"}</span>{" 2025"}
                </span>
            })}
        </div>
    }
}

#[function_component(Ribbon)]
fn ribbon() -> Html {
    html! {
        <div class="ribbons">
            <div class="ribbon-band tilt-left">{ ribbon_text() }</div>
            <div class="ribbon-band tilt-right">{ ribbon_text() }</div>
        </div>
    }
}

#[function_component(Assessment)]
fn assessment() -> Html {
    let checklist = use_state(|| [false; QUESTIONS.len()]);
    let grid_ref = use_node_ref();
    let grid_revealed = use_reveal(grid_ref.clone(), 0.2);

    html! {
        <section class="assessment">
            <div class="container narrow">
                <SectionTitle
                    animate={true}
                    subtitle="Diagnóstico de Obstáculos"
                    highlight="SIM!"
                    description="Responda com honestidade para identificar falhas no seu sistema atual."
                >
                    {"Marque todas as perguntas cuja resposta seja"}
                </SectionTitle>

                <div ref={grid_ref} class="checklist-grid">
                    { for QUESTIONS.iter().enumerate().map(|(idx, question)| {
                        let checked = checklist[idx];
                        let onclick = {
                            let checklist = checklist.clone();
                            Callback::from(move |_: MouseEvent| {
                                checklist.set(toggle_check(*checklist, idx));
                            })
                        };
                        html! {
                            <div
                                key={idx.to_string()}
                                class={classes!(
                                    "checklist-item",
                                    "glass-panel",
                                    reveal_classes(grid_revealed, RevealFrom::alternating(idx)),
                                    checked.then_some("checked")
                                )}
                                style={stagger_delay(idx, 0.15)}
                                onclick={onclick}
                            >
                                <div class="checklist-box">
                                    {
                                        if checked {
                                            icon(Icon::CheckCircle, "icon-md")
                                        } else {
                                            html! { <div class="checklist-dot"></div> }
                                        }
                                    }
                                </div>
                                <p>{*question}</p>
                            </div>
                        }
                    })}
                </div>

                <Reveal class="conclusion glass-panel" delay={0.2}>
                    <div class="conclusion-watermark">{ icon(Icon::Cpu, "icon-huge") }</div>
                    <p class="conclusion-label">{"Conclusão do Sistema:"}</p>
                    <h3>{"Com o método "}<span class="accent">{"você vai"}</span></h3>
                    <div class="benefit-grid">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <div class="benefit glass-panel">
                                <div class="benefit-icon">{ icon(Icon::CheckCircle, "icon-xs") }</div>
                                <p>{*benefit}</p>
                            </div>
                        })}
                    </div>
                    <CtaButton class="centered">
                        {"Fazer Upgrade do Sistema"}
                        { icon(Icon::ArrowRight, "icon-sm") }
                    </CtaButton>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let steps_ref = use_node_ref();
    let shown = use_reveal(steps_ref.clone(), 0.2);
    let last = STEPS.len() - 1;

    html! {
        <section class="how-it-works">
            <div class="container wide">
                <SectionTitle subtitle="Arquitetura de Protocolos" highlight="na prática">
                    {"Veja como funciona"}
                </SectionTitle>
                <div ref={steps_ref} class="steps">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <>
                            <div
                                class={classes!("step-card", "glass-panel", reveal_classes(shown, RevealFrom::Below))}
                                style={stagger_delay(i * 2, 0.3)}
                            >
                                <div class="step-head">
                                    <div class="step-icon">{ icon(step.icon, "icon-lg") }</div>
                                    <span class="step-label">{step.label}</span>
                                </div>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                                <div class="step-bar"><div class="step-bar-fill"></div></div>
                            </div>
                            {
                                if i < last {
                                    html! {
                                        <>
                                            <div
                                                class={classes!("step-connector", "desktop", reveal_classes(shown, RevealFrom::Scale))}
                                                style={stagger_delay(i * 2 + 1, 0.3)}
                                            >
                                                <div class="connector-dot glass-panel">{ icon(Icon::ChevronRight, "icon-xs") }</div>
                                            </div>
                                            <div
                                                class={classes!("step-connector", "mobile", reveal_classes(shown, RevealFrom::Scale))}
                                                style={stagger_delay(i * 2 + 1, 0.3)}
                                            >
                                                <div class="connector-dot glass-panel">{ icon(Icon::ArrowDown, "icon-sm pulse") }</div>
                                            </div>
                                        </>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Modules)]
fn modules() -> Html {
    html! {
        <section class="modules">
            <div class="container widest">
                <SectionTitle subtitle="Componentes Core" highlight="receber">
                    {"Tudo o que você vai"}
                </SectionTitle>
                <div class="module-grid">
                    { for MODULES.iter().map(|module| html! {
                        <div class="module-card glass-panel">
                            <div class="module-image">
                                <img src={module.image} alt={module.title} loading="lazy" />
                                <div class="module-label glass-panel">{module.label}</div>
                            </div>
                            <div class="module-body">
                                <h4>{module.title}</h4>
                                <p>{module.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Offer)]
fn offer() -> Html {
    html! {
        <section class="offer">
            <div class="container narrow offer-frame">
                <div class="corner top-left"></div>
                <div class="corner bottom-right"></div>
                <div class="offer-panel glass-panel">
                    <div class="offer-inner">
                        <div class="offer-tag glass-panel">{"Oferta Especial de Lançamento"}</div>
                        <h3>{"Garanta o Seu "}<span class="text-gradient">{"Lugar na Vanguarda"}</span></h3>
                        <div class="bundle">
                            { for BUNDLE.iter().map(|item| html! {
                                <div class="bundle-item">
                                    <div class="bundle-check glass-panel">{ icon(Icon::CheckCircle, "icon-xs") }</div>
                                    <span>{*item}</span>
                                </div>
                            })}
                        </div>
                        <div class="price">
                            <div class="price-glow"></div>
                            <p class="price-previous">{PRICE.previous}</p>
                            <p class="price-caption">{"Investimento Atual"}</p>
                            <div class="price-current">
                                <span class="text-gradient">{PRICE.current}</span>
                                <span class="price-installments">{PRICE.installments}</span>
                            </div>
                        </div>
                        <CtaButton class="offer-cta">
                            {"Ativar Acesso Agora"}
                            { icon(Icon::Rocket, "icon-md") }
                        </CtaButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Guarantee)]
fn guarantee() -> Html {
    html! {
        <section class="guarantee">
            <div class="container">
                <div class="guarantee-panel glass-panel">
                    <div class="guarantee-glow top"></div>
                    <div class="guarantee-glow bottom"></div>
                    <div class="guarantee-body">
                        <div class="emblem">
                            <div class="emblem-ring glass-panel">
                                <div class="emblem-ping"></div>
                                <div class="emblem-dashes"></div>
                                <div class="emblem-core">{ icon(Icon::ShieldCheck, "icon-emblem") }</div>
                            </div>
                            <div class="emblem-badge">
                                <span class="emblem-days">{format!("{} DIAS", GUARANTEE_DAYS)}</span>
                                <span class="emblem-caption">{"Garantidos"}</span>
                            </div>
                        </div>
                        <div class="guarantee-text">
                            <div class="guarantee-tag">
                                { icon(Icon::ShieldAlert, "icon-xs") }
                                <span>{"Protocolo de Risco Zero"}</span>
                            </div>
                            <h2>{"Sua Satisfação é "}<br /><span class="accent italic">{"Obrigatória"}</span></h2>
                            <p>{GUARANTEE_TEXT}</p>
                            <div class="trust">
                                { for TRUST_BULLETS.iter().map(|bullet| html! {
                                    <div class="trust-item">
                                        <div class="trust-dot"></div>
                                        <span>{*bullet}</span>
                                    </div>
                                })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="faq">
            <div class="container">
                <div class="faq-header">
                    { icon(Icon::Layers, "icon-md secondary") }
                    <h2>{"Query FAQ / Perguntas Frequentes"}</h2>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <FaqAccordion question={*question} answer={*answer} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container widest footer-row">
                <div class="footer-brand">
                    <div class="footer-mark">{"V"}</div>
                    <p>{"System V.2025"}</p>
                </div>
                <p class="footer-copy">{copyright(year)}</p>
                <div class="footer-dots">
                    <div class="footer-dot primary"></div>
                    <div class="footer-dot secondary"></div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<Rc<LandingConfig>>().unwrap_or_default();

    // Scroll to top only on initial mount
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
        <div class="landing-page">
            <Hero ripple={config.ripple.clone()} />
            <Ribbon />
            <Assessment />
            <HowItWorks />
            <Modules />
            <Offer />
            <Guarantee />
            <FaqSection />
            <Footer />
            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #020202;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                }

                .landing-page ::selection {
                    background: #00FF88;
                    color: #000000;
                }

                .container {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .container.narrow { max-width: 56rem; }
                .container.wide { max-width: 72rem; }
                .container.widest { max-width: 80rem; }

                .glass-panel {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(12px);
                }

                .text-gradient {
                    background: linear-gradient(90deg, #00FF88, #00D1FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .accent { color: #00FF88; }
                .italic { font-style: italic; }

                .icon { display: inline-block; flex-shrink: 0; }
                .icon-xs { width: 1rem; height: 1rem; }
                .icon-sm { width: 1.25rem; height: 1.25rem; }
                .icon-md { width: 1.5rem; height: 1.5rem; }
                .icon-lg { width: 1.75rem; height: 1.75rem; }
                .icon-huge { width: 12rem; height: 12rem; }
                .icon-emblem { width: 4rem; height: 4rem; }
                .icon.secondary { color: #00D1FF; }
                .icon.pulse { animation: pulse 2s ease-in-out infinite; }

                /* Reveal on scroll */
                .reveal {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal-below { transform: translateY(20px); }
                .reveal-left { transform: translateX(-30px); }
                .reveal-right { transform: translateX(30px); }
                .reveal-scale { transform: scale(0); }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }

                /* CTA */
                .cta-button {
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #00FF88, #00D1FF);
                    color: #020202;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    pointer-events: auto;
                    box-shadow: 0 0 20px rgba(0, 255, 136, 0.3);
                }
                .cta-button-sheen {
                    position: absolute;
                    inset: 0;
                    background: #ffffff;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .cta-button:hover .cta-button-sheen { opacity: 0.2; }
                .cta-button.centered { margin: 0 auto; }
                .hero-cta { min-width: 280px; }
                .offer-cta { width: 100%; padding: 2rem; font-size: 1.25rem; letter-spacing: 0.2em; }

                /* Section titles */
                .section-title {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .section-subtitle {
                    display: block;
                    margin-bottom: 1rem;
                    color: #00FF88;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .section-title h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 900;
                    line-height: 1.15;
                }
                .section-description {
                    max-width: 48rem;
                    margin: 1.5rem auto 0;
                    color: #9ca3af;
                    font-size: 1.2rem;
                    font-style: italic;
                    line-height: 1.6;
                }

                /* Hero */
                .hero { position: relative; width: 100%; }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s, transform 0.8s;
                }
                .hero-content.entered { opacity: 1; transform: none; }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(0, 255, 136, 0.3);
                    border-radius: 9999px;
                    background: rgba(0, 255, 136, 0.1);
                    color: #00FF88;
                    font-family: monospace;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .hero h1 {
                    margin-bottom: 2rem;
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    line-height: 1.1;
                    letter-spacing: -0.05em;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin-bottom: 3rem;
                    color: #9ca3af;
                    font-size: clamp(1.1rem, 2vw, 1.5rem);
                    line-height: 1.6;
                }
                .hero-actions { pointer-events: auto; }

                /* Ribbons */
                .ribbons {
                    position: relative;
                    z-index: 20;
                    height: 8rem;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #020202;
                }
                .ribbon-band {
                    position: absolute;
                    width: 180%;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #000000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .ribbon-band.tilt-left { transform: rotate(-3deg); z-index: 10; }
                .ribbon-band.tilt-right { transform: rotate(3deg); z-index: 20; }
                .ribbon-text { display: flex; align-items: center; gap: 2rem; white-space: nowrap; }
                .ribbon-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.85rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                }
                .ribbon-dot { width: 6px; height: 6px; border-radius: 9999px; background: #00FF88; }
                .ribbon-accent { color: #00FF88; }

                /* Assessment */
                .assessment, .how-it-works, .modules, .offer, .faq { padding: 8rem 1.5rem; }
                .checklist-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .checklist-item {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 2rem;
                    cursor: pointer;
                }
                .checklist-item p { color: #9ca3af; font-size: 1.1rem; transition: color 0.3s; }
                .checklist-item.checked { border-color: rgba(0, 255, 136, 0.5); background: rgba(0, 255, 136, 0.05); }
                .checklist-item.checked p { color: #ffffff; font-weight: 700; }
                .checklist-box {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 2px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    transition: all 0.5s;
                }
                .checklist-item.checked .checklist-box {
                    background: #00FF88;
                    border-color: #00FF88;
                    color: #000000;
                    box-shadow: 0 0 20px rgba(0, 255, 136, 0.5);
                }
                .checklist-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); }
                .conclusion {
                    position: relative;
                    overflow: hidden;
                    padding: 3rem;
                    border-radius: 3rem;
                    text-align: center;
                }
                .conclusion-watermark { position: absolute; top: 0; right: 0; padding: 2rem; opacity: 0.1; color: #00FF88; }
                .conclusion-label { margin-bottom: 1.5rem; color: #9ca3af; font-family: monospace; letter-spacing: 0.1em; text-transform: uppercase; }
                .conclusion h3 { margin-bottom: 2.5rem; font-size: clamp(1.9rem, 4vw, 3rem); font-weight: 900; font-style: italic; text-transform: uppercase; }
                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    text-align: left;
                }
                .benefit { display: flex; align-items: flex-start; gap: 1rem; padding: 1rem; border-radius: 1rem; }
                .benefit-icon { margin-top: 0.25rem; padding: 0.25rem; border-radius: 0.5rem; background: rgba(0, 255, 136, 0.2); color: #00FF88; }
                .benefit p { color: #d1d5db; font-weight: 500; }

                /* How it works */
                .how-it-works { background: rgba(255, 255, 255, 0.01); }
                .steps { display: flex; align-items: stretch; justify-content: center; }
                .step-card {
                    flex: 1;
                    position: relative;
                    z-index: 10;
                    padding: 3rem;
                    border-radius: 2.5rem;
                    border-color: rgba(0, 255, 136, 0.1);
                    background: linear-gradient(to bottom, rgba(0, 255, 136, 0.05), transparent);
                }
                .step-card:hover { border-color: rgba(0, 255, 136, 0.4); }
                .step-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2.5rem; }
                .step-icon {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #00FF88;
                    color: #020202;
                    box-shadow: 0 0 15px rgba(0, 255, 136, 0.3);
                }
                .step-label { color: rgba(0, 255, 136, 0.6); font-family: monospace; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.5em; text-transform: uppercase; }
                .step-card h4 { margin-bottom: 1.25rem; font-size: 1.9rem; font-weight: 900; }
                .step-card p { margin-bottom: 2.5rem; color: #9ca3af; line-height: 1.6; }
                .step-bar { height: 6px; border-radius: 9999px; overflow: hidden; background: rgba(0, 255, 136, 0.1); }
                .step-bar-fill {
                    height: 100%;
                    background: linear-gradient(90deg, rgba(0, 255, 136, 0.4), rgba(255, 255, 255, 0.3), rgba(0, 255, 136, 0.4));
                    background-size: 200% 100%;
                    animation: shimmer 2.5s infinite;
                }
                .step-connector { z-index: 30; display: flex; align-items: center; justify-content: center; }
                .step-connector.desktop { margin: 0 -1rem; }
                .step-connector.mobile { display: none; margin: -1.5rem 0; padding: 1rem 0; }
                .connector-dot {
                    width: 2.25rem;
                    height: 2.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border-color: rgba(0, 255, 136, 0.4);
                    background: #020202;
                    color: #00FF88;
                }

                /* Modules */
                .module-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
                .module-card { padding: 0.75rem; border-radius: 1.5rem; overflow: hidden; transition: border-color 0.7s; }
                .module-card:hover { border-color: rgba(0, 255, 136, 0.5); }
                .module-image { position: relative; aspect-ratio: 16 / 9; margin-bottom: 1.5rem; border-radius: 1rem; overflow: hidden; }
                .module-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 1s; }
                .module-card:hover .module-image img { transform: scale(1.1); }
                .module-label {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #00FF88;
                    font-family: monospace;
                    font-size: 8px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .module-body { padding: 0 1.5rem 2rem; }
                .module-body h4 { margin-bottom: 0.75rem; font-size: 1.25rem; font-weight: 900; text-transform: uppercase; }
                .module-body p { color: #9ca3af; font-size: 0.9rem; line-height: 1.6; }

                /* Offer */
                .offer-frame { position: relative; }
                .corner { position: absolute; width: 5rem; height: 5rem; }
                .corner.top-left { top: -2.5rem; left: -2.5rem; border-top: 2px solid rgba(0, 255, 136, 0.3); border-left: 2px solid rgba(0, 255, 136, 0.3); border-top-left-radius: 1.5rem; }
                .corner.bottom-right { bottom: -2.5rem; right: -2.5rem; border-bottom: 2px solid rgba(0, 209, 255, 0.3); border-right: 2px solid rgba(0, 209, 255, 0.3); border-bottom-right-radius: 1.5rem; }
                .offer-panel { padding: 4px; border-radius: 4rem; box-shadow: 0 0 80px rgba(0, 255, 136, 0.05); }
                .offer-inner { padding: 5rem 3rem; border-radius: 3.9rem; background: rgba(5, 5, 5, 0.8); text-align: center; }
                .offer-tag {
                    display: inline-block;
                    margin-bottom: 3rem;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    color: #00FF88;
                    font-family: monospace;
                    font-size: 10px;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                }
                .offer h3 { margin-bottom: 4rem; font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 900; }
                .bundle {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 1.5rem 3rem;
                    max-width: 42rem;
                    margin: 0 auto 5rem;
                    text-align: left;
                }
                .bundle-item { display: flex; align-items: center; gap: 1rem; color: #9ca3af; font-size: 0.9rem; }
                .bundle-check { padding: 0.25rem; border-radius: 0.4rem; color: #00FF88; }
                .price { position: relative; margin-bottom: 4rem; }
                .price-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 12rem;
                    height: 12rem;
                    transform: translate(-50%, -50%);
                    background: rgba(0, 255, 136, 0.1);
                    filter: blur(64px);
                    z-index: -1;
                }
                .price-previous { margin-bottom: 1rem; color: #6b7280; font-size: 1.1rem; font-weight: 700; text-decoration: line-through; }
                .price-caption { margin-bottom: 1rem; color: #9ca3af; font-family: monospace; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
                .price-current { display: flex; flex-direction: column; align-items: center; }
                .price-current .text-gradient { font-size: clamp(4.5rem, 10vw, 8rem); font-weight: 900; line-height: 1; }
                .price-installments { margin-top: 1.5rem; color: rgba(255, 255, 255, 0.4); font-family: monospace; font-size: 0.75rem; letter-spacing: 0.5em; text-transform: uppercase; }

                /* Guarantee */
                .guarantee { padding: 6rem 1.5rem; }
                .guarantee-panel {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 3rem;
                    border-radius: 4rem;
                    border-color: rgba(0, 255, 136, 0.2);
                    background: linear-gradient(135deg, rgba(0, 255, 136, 0.05), transparent);
                }
                .guarantee-glow { position: absolute; width: 16rem; height: 16rem; border-radius: 9999px; filter: blur(100px); }
                .guarantee-glow.top { top: -5rem; right: -5rem; background: rgba(0, 255, 136, 0.05); }
                .guarantee-glow.bottom { bottom: -5rem; left: -5rem; background: rgba(0, 209, 255, 0.05); }
                .guarantee-body { position: relative; z-index: 10; display: flex; align-items: center; gap: 4rem; }
                .emblem { position: relative; }
                .emblem-ring {
                    position: relative;
                    width: 16rem;
                    height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border-color: rgba(0, 255, 136, 0.3);
                }
                .emblem-ping { position: absolute; inset: 0; border-radius: 9999px; background: rgba(0, 255, 136, 0.1); opacity: 0.2; animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite; }
                .emblem-dashes { position: absolute; inset: 1rem; border-radius: 9999px; border: 2px dashed rgba(0, 255, 136, 0.2); animation: spin 20s linear infinite; }
                .emblem-core {
                    width: 10rem;
                    height: 10rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: linear-gradient(45deg, #00FF88, #00D1FF);
                    color: #020202;
                    box-shadow: 0 0 50px rgba(0, 255, 136, 0.3);
                }
                .emblem-badge {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    padding: 0.75rem 1.5rem;
                    border: 2px solid #00FF88;
                    border-radius: 1rem;
                    background: #020202;
                    transform: rotate(12deg);
                }
                .emblem-days { display: block; color: #00FF88; font-size: 1.5rem; font-weight: 900; line-height: 1; }
                .emblem-caption { color: rgba(255, 255, 255, 0.6); font-family: monospace; font-size: 10px; letter-spacing: 0.1em; text-transform: uppercase; }
                .guarantee-text { flex: 1; }
                .guarantee-tag {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                    padding: 0.375rem 1rem;
                    border: 1px solid rgba(0, 255, 136, 0.3);
                    border-radius: 9999px;
                    background: rgba(0, 255, 136, 0.05);
                    color: #00FF88;
                    font-family: monospace;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .guarantee-text h2 { margin-bottom: 2rem; font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 900; text-transform: uppercase; line-height: 1.15; }
                .guarantee-text p { max-width: 36rem; margin-bottom: 2.5rem; color: #9ca3af; font-size: 1.2rem; line-height: 1.6; }
                .trust { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                .trust-item { display: flex; align-items: center; gap: 0.75rem; color: #d1d5db; font-family: monospace; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
                .trust-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #00FF88; }

                /* FAQ */
                .faq-header { display: flex; align-items: center; justify-content: center; gap: 0.5rem; margin-bottom: 2.5rem; }
                .faq-header h2 { font-size: 1.9rem; font-weight: 900; text-transform: uppercase; }
                .faq-list { max-width: 48rem; margin: 0 auto; }
                .faq-item { margin-bottom: 1rem; overflow: hidden; border-radius: 1rem; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border: none;
                    background: none;
                    color: #e5e7eb;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question-text { font-size: 1.1rem; font-weight: 700; transition: color 0.3s; }
                .faq-item.open .faq-question-text { color: #00FF88; }
                .faq-toggle { padding: 0.5rem; border-radius: 9999px; color: #6b7280; transition: transform 0.3s; }
                .faq-item.open .faq-toggle { transform: rotate(180deg); background: rgba(0, 255, 136, 0.1); color: #00FF88; }
                .faq-chevron { width: 1.25rem; height: 1.25rem; }
                .faq-answer { max-height: 0; opacity: 0; transition: all 0.5s ease-in-out; }
                .faq-item.open .faq-answer { max-height: 24rem; opacity: 1; }
                .faq-answer-inner { padding: 0 1.5rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                .faq-answer-inner p { padding-top: 1rem; color: #9ca3af; line-height: 1.6; }

                /* Footer */
                .footer { padding: 5rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.05); background: #000000; }
                .footer-row { display: flex; align-items: center; justify-content: space-between; gap: 2.5rem; }
                .footer-brand { display: flex; align-items: center; gap: 1rem; }
                .footer-brand p { color: #6b7280; font-family: monospace; font-size: 0.75rem; letter-spacing: 0.5em; text-transform: uppercase; }
                .footer-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: linear-gradient(45deg, #00FF88, #00D1FF);
                    color: #020202;
                    font-weight: 900;
                }
                .footer-copy { color: #4b5563; font-family: monospace; font-size: 0.75rem; letter-spacing: 0.1em; text-align: center; text-transform: uppercase; }
                .footer-dots { display: flex; gap: 2rem; }
                .footer-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; animation: pulse 2s ease-in-out infinite; }
                .footer-dot.primary { background: #00FF88; }
                .footer-dot.secondary { background: #00D1FF; animation-delay: 75ms; }

                @keyframes shimmer { from { background-position: 200% 0; } to { background-position: -200% 0; } }
                @keyframes pulse { 50% { opacity: 0.5; } }
                @keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
                @keyframes spin { to { transform: rotate(360deg); } }

                @media (max-width: 1024px) {
                    .steps { flex-direction: column; }
                    .step-connector.desktop { display: none; }
                    .step-connector.mobile { display: flex; }
                }

                @media (max-width: 768px) {
                    .guarantee-body, .footer-row { flex-direction: column; text-align: center; }
                    .emblem-ring { width: 12rem; height: 12rem; }
                    .emblem-core { width: 8rem; height: 8rem; }
                    .offer-inner { padding: 3rem 1.5rem; }
                    .trust { justify-content: center; }
                }
                "#}
            </style>
        </div>
    }
}
