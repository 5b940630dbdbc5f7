use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;

/// Colors and brand copy shared by every section.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub tagline: &'static str,
    pub badge: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
    pub background: &'static str,
}

impl Theme {
    pub fn anonium() -> Self {
        Self {
            name: "Anonium",
            tagline: "Your privacy is our priority. Enhance your security and access content without restrictions.",
            badge: "v1.0 SECURE",
            primary: "#FF003A",
            accent: "#b6066e",
            glow: "#FF7F00",
            background: "#000000",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::anonium()
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeStyleProps {
    pub theme: Theme,
}

/// Publishes the palette as CSS custom properties on `:root`.
#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeStyleProps) -> Html {
    let theme = &props.theme;
    html! {
        <Global css={css!(
            r#"
            :root {
                --primary: ${primary};
                --accent: ${accent};
                --glow: ${glow};
                --page-bg: ${background};
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: var(--page-bg);
                color: #ffffff;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                overflow-x: hidden;
            }
            "#,
            primary = theme.primary,
            accent = theme.accent,
            glow = theme.glow,
            background = theme.background,
        )} />
    }
}
