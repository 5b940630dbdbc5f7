use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::PLANS;
use crate::icons::Icon;
use crate::reveal::{stagger, ScrollReveal};

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <div class="section-inner narrow">
                <SectionHeading
                    highlight="PRICING PLANS"
                    title="Choose Your Plan"
                    highlight_first={true}
                    subtitle={html! { {"Flexible pricing options tailored to suit your needs."} }}
                />
                <div class="plan-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <ScrollReveal key={plan.name} delay={stagger(400, 100, i)}>
                            <div class="plan-card">
                                <div class="plan-body">
                                    <h3>{plan.name}</h3>
                                    <span class="plan-price">{plan.price}</span>
                                    <div class="plan-divider"></div>
                                    <h4>{"Features:"}</h4>
                                    <ul>
                                        { for plan.features.iter().map(|feature| html! {
                                            <li key={*feature}>{ Icon::Plus.html("plan-bullet") }{*feature}</li>
                                        }) }
                                    </ul>
                                </div>
                                <button class="plan-subscribe">{"Subscribe Now"}</button>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .pricing-section {
                    position: relative;
                    padding: 8rem 2rem;
                    background: linear-gradient(to right, rgba(255, 0, 58, 0.1), rgba(0, 0, 0, 0.1));
                }
                .section-inner.narrow {
                    max-width: 72rem;
                }
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .plan-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 2px solid var(--primary);
                    background: linear-gradient(to bottom right, rgba(255, 0, 58, 0.2), rgba(0, 0, 0, 0.2));
                    transition: all 0.5s;
                }
                .plan-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px var(--primary);
                }
                .plan-body {
                    flex-grow: 1;
                    padding: 2rem;
                    text-align: center;
                }
                .plan-body h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .plan-price {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--primary);
                }
                .plan-divider {
                    height: 1px;
                    margin: 1rem 0 1.5rem;
                    background: linear-gradient(to right, #fca5a5, #000);
                }
                .plan-body h4, .plan-body ul {
                    text-align: left;
                }
                .plan-body ul {
                    list-style: none;
                    padding: 0;
                    color: #d1d5db;
                }
                .plan-body li {
                    display: flex;
                    align-items: center;
                    margin-bottom: 0.25rem;
                }
                .plan-bullet {
                    width: 16px;
                    height: 16px;
                    margin-right: 0.5rem;
                    color: var(--primary);
                }
                .plan-subscribe {
                    width: 100%;
                    padding: 0.75rem 1.5rem;
                    color: #fff;
                    border: none;
                    cursor: pointer;
                    background: var(--primary);
                    transition: opacity 0.3s;
                }
                .plan-subscribe:hover {
                    opacity: 0.8;
                }
                @media (max-width: 1024px) {
                    .plan-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .plan-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
