use rand::Rng;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::PROVIDERS;
use crate::icons::Icon;
use crate::reveal::{stagger, Direction, ScrollReveal};

const PARTICLES: usize = 50;
const NETWORK_LINES: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub delay: f64,
}

/// Randomly placed decorations, generated once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub particles: Vec<Particle>,
    pub lines: Vec<Line>,
}

impl Backdrop {
    pub fn scatter<R: Rng>(rng: &mut R) -> Self {
        let particles = (0..PARTICLES)
            .map(|_| Particle {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..2.0),
                duration: rng.gen_range(2.0..5.0),
                opacity: rng.gen_range(0.5..1.0),
            })
            .collect();
        let lines = (0..NETWORK_LINES)
            .map(|_| Line {
                from: (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
                to: (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
                delay: rng.gen_range(0.0..2.0),
            })
            .collect();
        Self { particles, lines }
    }
}

/// Half the glow's size, so it centers on the pointer.
pub fn follower_offset(viewport_width: f64) -> i32 {
    if viewport_width < 640.0 {
        96
    } else {
        192
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let backdrop = use_state(|| Backdrop::scatter(&mut rand::thread_rng()));
    let pointer = use_state(|| (0, 0));
    let (width, _) = use_window_size();

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set((e.client_x(), e.client_y()));
        });
    }

    let offset = follower_offset(width);
    let follower_style = format!(
        "left: {}px; top: {}px;",
        pointer.0 - offset,
        pointer.1 - offset
    );

    html! {
        <>
            <div class="hero-backdrop">
                <div class="hero-gradient"></div>
                { for backdrop.particles.iter().map(|p| html! {
                    <div
                        class="particle"
                        style={format!(
                            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2};",
                            p.left, p.top, p.delay, p.duration, p.opacity
                        )}
                    />
                }) }
                <svg class="network-lines">
                    <defs>
                        <linearGradient id="lineGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#FF003A" stop-opacity="0" />
                            <stop offset="50%" stop-color="#FF003A" stop-opacity="1" />
                            <stop offset="100%" stop-color="#FF7F00" stop-opacity="0" />
                        </linearGradient>
                    </defs>
                    { for backdrop.lines.iter().map(|l| html! {
                        <line
                            x1={format!("{:.2}%", l.from.0)}
                            y1={format!("{:.2}%", l.from.1)}
                            x2={format!("{:.2}%", l.to.0)}
                            y2={format!("{:.2}%", l.to.1)}
                            stroke="url(#lineGradient)"
                            stroke-width="1.5"
                            class="pulse"
                            style={format!("animation-delay: {:.2}s;", l.delay)}
                        />
                    }) }
                </svg>
                <div class="mouse-follower" style={follower_style}></div>
            </div>

            <section id="home" class="hero-section">
                <div class="hero-content">
                    <ScrollReveal direction={Direction::Scale} delay={200}>
                        <div class="status-pill">
                            { Icon::Activity.html("status-icon pulse") }
                            <span>{"VPN CONNECTION UNPROTECTED"}</span>
                            <span class="status-dot pulse"></span>
                        </div>
                    </ScrollReveal>

                    <ScrollReveal delay={400}>
                        <h1 class="hero-title">
                            <span class="title-light">{"UNLOCK"}</span>
                            <br />
                            <span class="title-hot pulse">{"YOUR ONLINE PRIVACY"}</span>
                        </h1>
                    </ScrollReveal>

                    <ScrollReveal delay={600}>
                        <p class="hero-subtitle">
                            <span class="hl-red">{"Safeguard"}</span>
                            {" your digital footprint with"}
                            <span class="hl-orange">{" top-notch VPN"}</span>
                            {" solutions for unparalleled security!"}
                        </p>
                    </ScrollReveal>

                    <ScrollReveal delay={800}>
                        <p class="hero-blurb">
                            {"Enjoy fast, secure, and reliable connections that provide you the freedom to explore the web with confidence."}
                        </p>
                    </ScrollReveal>

                    <ScrollReveal delay={1000}>
                        <div class="hero-actions">
                            <button class="btn-primary">
                                { Icon::Play.html("btn-icon") }
                                {"Start Now"}
                                { Icon::ArrowRight.html("btn-icon nudge") }
                            </button>
                            <button class="btn-outline">
                                { Icon::Newspaper.html("btn-icon") }
                                <span class="wide-only">{"Documentation"}</span>
                                <span class="narrow-only">{"Docs"}</span>
                            </button>
                        </div>
                    </ScrollReveal>

                    <h2 class="powered-by">{"Powered By"}</h2>
                    <div class="provider-grid">
                        { for PROVIDERS.iter().enumerate().map(|(i, provider)| html! {
                            <ScrollReveal key={provider.label} direction={Direction::Scale} delay={stagger(500, 100, i)}>
                                <div class="provider-card">
                                    <img src={config::asset(provider.image)} alt={provider.label} width="50" height="40" />
                                    <div class="provider-label">{provider.label}</div>
                                </div>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .hero-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, #991b1b, #000);
                    opacity: 0.8;
                }
                .particle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgb(248, 113, 113);
                    animation-name: pulse;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                .network-lines {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.2;
                }
                .pulse {
                    animation: pulse 2s ease-in-out infinite;
                }
                .mouse-follower {
                    position: absolute;
                    width: 384px;
                    height: 384px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(239, 68, 68, 0.2), rgba(185, 28, 28, 0.1), transparent);
                    filter: blur(64px);
                    transition: all 1s ease-out;
                }
                .hero-section {
                    position: relative;
                    z-index: 1;
                    padding: 8rem 2rem 10rem;
                }
                .hero-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .status-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    margin-bottom: 2rem;
                    color: rgb(248, 113, 113);
                    font-family: monospace;
                    font-size: 0.875rem;
                }
                .status-icon {
                    width: 16px;
                    height: 16px;
                }
                .status-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgb(248, 113, 113);
                }
                .hero-title {
                    font-size: clamp(2.25rem, 9vw, 8rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }
                .title-light {
                    background: linear-gradient(to right, #fff, #fecaca, #fff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    filter: drop-shadow(0 0 30px rgba(255, 0, 58, 0.5));
                }
                .title-hot {
                    background: linear-gradient(to right, #f87171, #fb923c, #facc15);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    filter: drop-shadow(0 0 50px rgba(255, 127, 0, 0.8));
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    max-width: 56rem;
                    margin: 0 auto 1rem;
                }
                .hl-red {
                    color: rgb(248, 113, 113);
                    font-weight: 700;
                }
                .hl-orange {
                    color: rgb(251, 146, 60);
                    font-weight: 700;
                }
                .hero-blurb {
                    font-size: 1.125rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 5rem;
                }
                .btn-primary, .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.5s;
                }
                .btn-primary {
                    color: #fff;
                    border: none;
                    background: linear-gradient(to right, #ef4444, #f97316);
                    box-shadow: 0 25px 50px rgba(249, 115, 22, 0.3);
                }
                .btn-primary:hover {
                    transform: scale(1.1);
                }
                .btn-primary:hover .nudge {
                    transform: translateX(4px);
                }
                .btn-outline {
                    color: rgb(248, 113, 113);
                    background: transparent;
                    border: 2px solid rgb(248, 113, 113);
                }
                .btn-outline:hover {
                    background: rgba(239, 68, 68, 0.1);
                }
                .btn-icon {
                    width: 24px;
                    height: 24px;
                    transition: transform 0.3s;
                }
                .narrow-only {
                    display: none;
                }
                .powered-by {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin: 2.5rem 0 2rem;
                    color: #fff;
                    filter: drop-shadow(0 0 30px rgba(255, 0, 58, 0.5));
                }
                .provider-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                }
                .provider-card {
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(239, 68, 68, 0.2);
                    background: linear-gradient(to bottom right, rgba(239, 68, 68, 0.1), rgba(249, 115, 22, 0.1), rgba(234, 179, 8, 0.1));
                    transition: all 0.5s;
                }
                .provider-card:hover {
                    transform: scale(1.1);
                    border-color: rgba(248, 113, 113, 0.5);
                }
                .provider-label {
                    margin-top: 1rem;
                    font-weight: 500;
                }
                @media (max-width: 640px) {
                    .provider-grid {
                        grid-template-columns: 1fr;
                    }
                    .mouse-follower {
                        width: 192px;
                        height: 192px;
                    }
                    .wide-only {
                        display: none;
                    }
                    .narrow-only {
                        display: inline;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn backdrop_stays_in_bounds() {
        let backdrop = Backdrop::scatter(&mut StdRng::seed_from_u64(7));
        assert_eq!(backdrop.particles.len(), PARTICLES);
        assert_eq!(backdrop.lines.len(), NETWORK_LINES);

        for p in &backdrop.particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((2.0..5.0).contains(&p.duration));
            assert!((0.5..1.0).contains(&p.opacity));
        }
        for l in &backdrop.lines {
            assert!((0.0..2.0).contains(&l.delay));
        }
    }

    #[test]
    fn same_seed_same_backdrop() {
        let a = Backdrop::scatter(&mut StdRng::seed_from_u64(42));
        let b = Backdrop::scatter(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn follower_shrinks_on_small_screens() {
        assert_eq!(follower_offset(375.0), 96);
        assert_eq!(follower_offset(1280.0), 192);
    }
}
