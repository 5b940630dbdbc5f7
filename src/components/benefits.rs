use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::BENEFITS;
use crate::reveal::{stagger, Direction, ScrollReveal};
use crate::theme::Theme;

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <section id="benefits" class="benefits-section">
            <div class="section-inner">
                <SectionHeading
                    highlight="BENEFITS"
                    title={theme.name}
                    subtitle={html! { {"Explore the benefits that keep you secure online"} }}
                />
                <div class="card-grid">
                    { for BENEFITS.iter().enumerate().map(|(i, feature)| html! {
                        <ScrollReveal key={feature.title} direction={Direction::alternating(i)} delay={stagger(400, 200, i)}>
                            <div class="benefit-card">
                                <div class="benefit-icon">{ feature.icon.html("icon-white") }</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .benefits-section {
                    position: relative;
                    padding: 8rem 2rem;
                    background: #111827;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .benefit-card {
                    height: 18rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 2px solid #ef4444;
                    background: linear-gradient(to bottom right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                    transition: all 0.5s;
                }
                .benefit-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px #ef4444;
                }
                .benefit-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 0.75rem;
                    margin-bottom: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to right, #ef4444, #f97316);
                }
                .icon-white {
                    width: 32px;
                    height: 32px;
                    color: #fff;
                }
                .benefit-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .benefit-card p {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .card-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                    .benefit-card {
                        height: auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}
