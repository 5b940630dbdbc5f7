use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::icons::Icon;
use crate::theme::Theme;

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let links = [
        (Icon::Paper, "Whitepaper"),
        (Icon::Telegram, "Telegram"),
        (Icon::Twitter, "Twitter"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src={config::asset("vpn.png")} alt={format!("{} VPN", theme.name)} width="48" height="48" />
                <h3>{theme.name}</h3>
            </div>
            <p class="footer-tagline">{theme.tagline}</p>
            <div class="footer-links">
                { for links.iter().map(|(icon, title)| html! {
                    <a href="#" title={*title} key={*title}>{ icon.html("footer-icon") }</a>
                }) }
            </div>
            <p class="footer-copyright">{copyright(Utc::now().year(), theme.name)}</p>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 3rem 2rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(40px);
                    border-top: 1px solid rgba(182, 6, 110, 0.3);
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .footer-brand h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .footer-tagline {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    max-width: 28rem;
                    margin-bottom: 1rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: var(--accent);
                    transition: color 0.3s;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                .footer-icon {
                    width: 24px;
                    height: 24px;
                }
                .footer-copyright {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2025, "Anonium"), "© 2025 Anonium. All rights reserved.");
    }
}
