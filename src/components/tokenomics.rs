use yew::prelude::*;

use crate::content::TOKENOMICS;

#[function_component(Tokenomics)]
pub fn tokenomics() -> Html {
    html! {
        <section id="tokenomics" class="tokenomics-section">
            <div class="section-inner">
                <h2 class="tokenomics-title">{"Tokenomics"}</h2>
                <div class="token-grid">
                    { for TOKENOMICS.iter().map(|fact| html! {
                        <div class="token-card" key={fact.title}>
                            <div class="benefit-icon">{ fact.icon.html("icon-white") }</div>
                            <h3>{fact.title}</h3>
                            <p>{fact.value}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .tokenomics-section {
                    position: relative;
                    padding: 8rem 2rem;
                    margin-bottom: 12rem;
                    background: #111827;
                }
                .tokenomics-title {
                    text-align: center;
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 900;
                    margin-bottom: 3rem;
                    background: linear-gradient(to right, #ef4444, #f97316);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .token-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .token-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 2px solid #ef4444;
                    background: linear-gradient(to bottom right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                    transition: transform 0.5s;
                }
                .token-card:hover {
                    transform: scale(1.05);
                }
                .token-card p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                @media (max-width: 1024px) {
                    .token-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
