use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::{Milestone, MilestoneStatus, ROADMAP};
use crate::icons::Icon;
use crate::reveal::{stagger, Direction, ScrollReveal};

fn status_marker(status: MilestoneStatus) -> Html {
    match status {
        MilestoneStatus::Completed => Icon::CheckCircle.html("status-completed"),
        MilestoneStatus::Current | MilestoneStatus::Upcoming => {
            html! { <span class={status.class()}></span> }
        }
    }
}

fn milestone_card(item: &Milestone) -> Html {
    html! {
        <div class="milestone-card">
            <div class="milestone-head">
                <span class="milestone-quarter">{item.quarter}</span>
                <span class="milestone-tag">{item.tag}</span>
            </div>
            <div class="milestone-title">
                { status_marker(item.status) }
                <h3>{item.title}</h3>
            </div>
            <p>{item.description}</p>
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    html! {
        <section id="roadmap" class="roadmap-section">
            <div class="section-inner">
                <SectionHeading
                    highlight="VPN ROADMAP"
                    title="TO A SECURE FUTURE"
                    highlight_first={true}
                    subtitle={html! { {"Follow our journey as we build the most secure and privacy-focused VPN experience."} }}
                />
                <div class="timeline">
                    <div class="timeline-rail"></div>
                    { for ROADMAP.iter().enumerate().map(|(i, item)| {
                        let side = if i % 2 == 0 { "side-left" } else { "side-right" };
                        html! {
                            <ScrollReveal key={item.quarter} direction={Direction::alternating(i)} delay={stagger(400, 200, i)}>
                                <div class={classes!("milestone", side)}>
                                    { milestone_card(item) }
                                    <div class="timeline-dot"><span class="pulse"></span></div>
                                </div>
                            </ScrollReveal>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .roadmap-section {
                    position: relative;
                    padding: 8rem 2rem;
                    background: linear-gradient(to right, rgba(182, 6, 110, 0.05), rgba(0, 0, 0, 0.05));
                }
                .roadmap-section .heading-highlight {
                    color: var(--accent);
                }
                .timeline {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .timeline-rail {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 4px;
                    height: 100%;
                    border-radius: 9999px;
                    opacity: 0.7;
                    background: linear-gradient(to bottom, var(--accent), #000);
                }
                .milestone {
                    position: relative;
                    display: flex;
                    align-items: center;
                }
                .milestone.side-left {
                    justify-content: flex-start;
                }
                .milestone.side-right {
                    justify-content: flex-end;
                }
                .milestone-card {
                    width: 41.666%;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--accent);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    transition: all 0.5s;
                }
                .milestone-card:hover {
                    transform: scale(1.05);
                    background: linear-gradient(to bottom right, rgba(182, 6, 110, 0.2), rgba(0, 0, 0, 0.2));
                }
                .milestone-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .milestone-quarter {
                    color: #fca5a5;
                    font-weight: 700;
                    font-family: monospace;
                    font-size: 1.125rem;
                }
                .milestone-tag {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #111, var(--accent));
                }
                .milestone-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .milestone-title h3 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .milestone-card p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                .status-completed {
                    width: 24px;
                    height: 24px;
                    color: #4ade80;
                }
                .status-current {
                    width: 16px;
                    height: 16px;
                    border-radius: 50%;
                    background: #facc15;
                    animation: pulse 2s ease-in-out infinite;
                }
                .status-upcoming {
                    width: 16px;
                    height: 16px;
                    border-radius: 50%;
                    border: 2px solid #9ca3af;
                }
                .timeline-dot {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    border: 1px solid #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to right, var(--accent), #000);
                }
                .timeline-dot span {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #fff;
                }
                @media (max-width: 640px) {
                    .timeline-rail, .timeline-dot {
                        left: 1rem;
                    }
                    .milestone.side-left, .milestone.side-right {
                        justify-content: flex-start;
                        padding-left: 3rem;
                    }
                    .milestone-card {
                        width: 100%;
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
