use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::OpenItem;
use crate::components::heading::SectionHeading;
use crate::content::{FaqEntry, FAQ};
use crate::icons::Icon;
use crate::reveal::{stagger, ScrollReveal};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <h3>{props.entry.question}</h3>
                <span class="faq-toggle">
                    { if props.open { Icon::Minus.html("toggle-icon") } else { Icon::Plus.html("toggle-icon") } }
                </span>
            </button>
            <div class="faq-answer">
                <div class="faq-divider"></div>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let open = use_state(OpenItem::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="section-inner faq-inner">
                <SectionHeading
                    highlight="FREQUENTLY"
                    title="ASKED QUESTIONS"
                    highlight_first={true}
                    subtitle={html! { {format!("Everything you need to know about {} VPN's features and benefits.", theme.name)} }}
                />
                <div class="faq-list">
                    { for FAQ.iter().enumerate().map(|(i, entry)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                open.set(open.toggled(i));
                            })
                        };
                        html! {
                            <ScrollReveal key={entry.question} delay={stagger(400, 100, i)}>
                                <FaqItem entry={*entry} open={open.is_open(i)} on_toggle={on_toggle} />
                            </ScrollReveal>
                        }
                    }) }
                </div>

                <ScrollReveal delay={800}>
                    <div class="faq-cta">
                        <h3>{"Still have questions?"}</h3>
                        <p>{format!("Join our community Telegram for real-time support and discussions with other {} VPN users.", theme.name)}</p>
                        <div class="faq-cta-actions">
                            <button class="btn-primary">{"Join Telegram Community"}</button>
                            <button class="btn-outline">{"Contact Support"}</button>
                        </div>
                    </div>
                </ScrollReveal>
            </div>
            <style>
                {r#"
                .faq-section {
                    position: relative;
                    padding: 8rem 2rem;
                    background: linear-gradient(to right, rgba(239, 68, 68, 0.05), rgba(249, 115, 22, 0.05));
                }
                .section-inner.faq-inner {
                    max-width: 56rem;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .faq-item {
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    transition: border-color 0.5s;
                }
                .faq-item:hover {
                    border-color: #f87171;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 2rem;
                    text-align: left;
                    color: #fff;
                    background: transparent;
                    border: none;
                    cursor: pointer;
                }
                .faq-question h3 {
                    margin: 0;
                    padding-right: 1rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    transition: color 0.3s;
                }
                .faq-question:hover h3 {
                    color: #f87171;
                }
                .faq-toggle {
                    flex-shrink: 0;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to right, #ef4444, #f97316);
                    transition: transform 0.3s;
                }
                .faq-item.open .faq-toggle {
                    transform: rotate(180deg);
                }
                .toggle-icon {
                    width: 24px;
                    height: 24px;
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 2rem;
                    transition: all 0.5s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 24rem;
                    opacity: 1;
                    padding-bottom: 2rem;
                }
                .faq-divider {
                    height: 1px;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #fca5a5, #fdba74);
                }
                .faq-answer p {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                .faq-cta {
                    text-align: center;
                    margin-top: 4rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(239, 68, 68, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                }
                .faq-cta p {
                    color: #d1d5db;
                    margin-bottom: 2rem;
                }
                .faq-cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </section>
    }
}
