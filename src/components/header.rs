use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, Sections};
use crate::icons::Icon;
use crate::theme::Theme;

const SCROLLED_AFTER: f64 = 50.0;

pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub sections: Sections,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let items = props.sections.nav_items();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (scroll_y > SCROLLED_AFTER).then(|| "scrolled"))}>
            <div class="header-content">
                <a class="brand" href="#home">
                    <div class="brand-logo">
                        <img src={config::asset("vpn.png")} alt={format!("{} logo", theme.name)} width="48" height="48" />
                        <span class="brand-pulse"></span>
                    </div>
                    <div>
                        <h1 class="brand-name">{theme.name}</h1>
                        <div class="brand-badge">{theme.badge}</div>
                    </div>
                </a>

                <nav class="desktop-nav">
                    { for items.iter().map(|item| html! {
                        <a key={*item} href={anchor(item)} class="nav-link">
                            {*item}
                            <span class="nav-underline"></span>
                        </a>
                    }) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { Icon::Close.html("burger-icon") } else { Icon::Menu.html("burger-icon") } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for items.iter().map(|item| html! {
                                <a key={*item} href={anchor(item)} class="mobile-link" onclick={close_menu.clone()}>
                                    {*item}
                                </a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(40px);
                    border-bottom: 1px solid rgba(248, 113, 113, 0.4);
                    box-shadow: 0 25px 50px rgba(239, 68, 68, 0.1);
                    transition: all 0.5s;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.4);
                    border-bottom-color: rgb(248, 113, 113);
                    box-shadow: 0 25px 50px rgba(239, 68, 68, 0.2);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                }
                .brand-logo {
                    position: relative;
                    width: 56px;
                    height: 56px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .brand-logo img {
                    object-fit: contain;
                    z-index: 1;
                }
                .brand-pulse {
                    position: absolute;
                    top: -4px;
                    right: -4px;
                    width: 16px;
                    height: 16px;
                    border-radius: 50%;
                    background: linear-gradient(to right, #facc15, #ef4444);
                    animation: pulse 2s ease-in-out infinite;
                }
                .brand-name {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: var(--primary);
                }
                .brand-badge {
                    font-family: monospace;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    color: rgb(248, 113, 113);
                }
                .desktop-nav {
                    display: flex;
                    gap: 2.5rem;
                    margin-left: auto;
                }
                .nav-link {
                    position: relative;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: var(--primary);
                }
                .nav-underline {
                    position: absolute;
                    bottom: -8px;
                    left: 0;
                    width: 0;
                    height: 4px;
                    border-radius: 9999px;
                    background: var(--primary);
                    transition: width 0.5s;
                }
                .nav-link:hover .nav-underline {
                    width: 100%;
                }
                .burger-menu {
                    display: none;
                    color: #fff;
                    background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--primary);
                    cursor: pointer;
                }
                .burger-icon {
                    width: 24px;
                    height: 24px;
                }
                .mobile-menu {
                    background: rgba(0, 0, 0, 0.95);
                    border-bottom: 1px solid var(--primary);
                    padding: 2rem 1.5rem;
                    text-align: center;
                }
                .mobile-link {
                    display: block;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.25rem;
                    padding: 1rem 0;
                    border-bottom: 1px solid rgba(31, 41, 55, 0.5);
                    text-decoration: none;
                }
                .mobile-link:hover {
                    color: rgb(248, 113, 113);
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @media (max-width: 1024px) {
                    .desktop-nav {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercase_ids() {
        assert_eq!(anchor("Home"), "#home");
        assert_eq!(anchor("FAQ"), "#faq");
    }
}
