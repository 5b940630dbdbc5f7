use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config;
use crate::content::{ABOUT_FEATURES, NETWORK_STATUS};
use crate::icons::Icon;
use crate::reveal::{stagger, Direction, ScrollReveal};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-inner">
                <SectionHeading
                    highlight="THE FUTURE"
                    title="OF ONLINE PRIVACY"
                    highlight_first={true}
                    subtitle={html! {
                        <>
                            {"We're not just providing a VPN, we're revolutionizing your online privacy through "}
                            <strong>{"decentralized technology"}</strong>
                            {" and "}
                            <strong>{"robust security protocols"}</strong>
                            {"."}
                        </>
                    }}
                />

                <div class="about-grid">
                    <Connectivity class={classes!("narrow-only-block")} />

                    <ScrollReveal direction={Direction::Left} delay={400}>
                        <div class="about-copy">
                            <h3>
                                {"Global Network for"}
                                <span class="about-accent">{"Secure Browsing"}</span>
                            </h3>
                            <p>{"Our VPN service connects you to a global network of servers, ensuring smooth access to content, no matter where you are in the world."}</p>
                            <p>{"With our fast and reliable connections, explore the internet freely while protecting your identity and data."}</p>

                            <div class="about-tiles">
                                { for ABOUT_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                    <ScrollReveal key={feature.title} direction={Direction::Left} delay={stagger(400, 100, i)}>
                                        <div class="about-tile">
                                            { feature.icon.html("tile-icon") }
                                            <h4>{feature.title}</h4>
                                            <p>{feature.description}</p>
                                        </div>
                                    </ScrollReveal>
                                }) }
                            </div>
                        </div>
                    </ScrollReveal>

                    <Connectivity class={classes!("wide-only-block")} />
                </div>
            </div>
            <style>
                {r#"
                .about-section {
                    position: relative;
                    padding: 8rem 2rem;
                    background: linear-gradient(to right, rgba(255, 0, 58, 0.1), rgba(0, 0, 0, 0.1));
                }
                .section-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-copy h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .about-accent {
                    display: block;
                    color: var(--primary);
                }
                .about-copy > p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.75;
                }
                .about-tiles {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .about-tile {
                    height: 100%;
                    text-align: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: linear-gradient(to bottom right, rgba(255, 0, 58, 0.2), rgba(0, 0, 0, 0.35));
                    transition: transform 0.3s;
                }
                .about-tile:hover {
                    transform: scale(1.05);
                }
                .tile-icon {
                    width: 32px;
                    height: 32px;
                    color: var(--primary);
                }
                .about-tile h4 {
                    font-size: 0.875rem;
                    margin: 0.5rem 0;
                }
                .about-tile p {
                    color: #9ca3af;
                    font-size: 0.75rem;
                }
                .connectivity {
                    position: relative;
                    overflow: hidden;
                    text-align: center;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 0, 58, 0.3);
                    background: linear-gradient(to bottom right, rgba(255, 0, 58, 0.2), rgba(0, 0, 0, 0.2));
                    box-shadow: 0 25px 50px rgba(255, 0, 58, 0.2);
                }
                .connectivity-logo {
                    position: relative;
                    width: 96px;
                    height: 96px;
                    margin: 0 auto 1.5rem;
                }
                .connectivity-logo img {
                    width: 100%;
                    height: 100%;
                    border-radius: 1rem;
                }
                .online-badge {
                    position: absolute;
                    top: -8px;
                    right: -8px;
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    background: #4ade80;
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .online-badge .icon {
                    width: 16px;
                    height: 16px;
                }
                .connectivity h4 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .connectivity > p {
                    color: #d1d5db;
                    margin-bottom: 1.5rem;
                }
                .network-status {
                    text-align: left;
                    font-family: monospace;
                    font-size: 0.875rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 0, 58, 0.3);
                }
                .network-status .prompt { color: #4ade80; margin-bottom: 0.5rem; }
                .stat-red { color: #f87171; }
                .stat-plain { color: #e5e7eb; }
                .stat-pink { color: #f472b6; }
                .narrow-only-block { display: none; }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .narrow-only-block { display: block; }
                    .wide-only-block { display: none; }
                }
                @media (max-width: 640px) {
                    .about-tiles {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ConnectivityProps {
    #[prop_or_default]
    class: Classes,
}

#[function_component(Connectivity)]
fn connectivity(props: &ConnectivityProps) -> Html {
    html! {
        <ScrollReveal direction={Direction::Right} delay={800} class={props.class.clone()}>
            <div class="connectivity">
                <div class="connectivity-logo">
                    <img src={config::asset("vpn.png")} alt="vpn" />
                    <div class="online-badge">{ Icon::Activity.html("pulse") }</div>
                </div>
                <h4>{"Global Connectivity"}</h4>
                <p>{"Connecting you to thousands of servers worldwide for the most reliable and secure browsing experience."}</p>
                <div class="network-status">
                    <div class="prompt">{"$ Network Status"}</div>
                    { for NETWORK_STATUS.iter().map(|stat| html! {
                        <div class={stat.class}>{format!("{}: {}", stat.label, stat.value)}</div>
                    }) }
                </div>
            </div>
        </ScrollReveal>
    }
}
