use log::Level;

/// How long the splash screen stays up before the page renders.
pub const SPLASH_DELAY_MS: u32 = 1500;

const ASSET_BASE: &str = "/assets";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name.trim_start_matches('/'))
}

/// Optional landing page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sections {
    pub pricing: bool,
    pub faq: bool,
    pub cta: bool,
    pub tokenomics: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            pricing: false,
            faq: false,
            cta: false,
            tokenomics: false,
        }
    }
}

impl Sections {
    /// Anchor labels for the header, in page order.
    pub fn nav_items(&self) -> Vec<&'static str> {
        let mut items = vec!["Home", "About", "Benefits"];
        if self.pricing {
            items.push("Pricing");
        }
        items.push("Roadmap");
        if self.faq {
            items.push("FAQ");
        }
        items
    }
}

pub fn sections() -> Sections {
    Sections::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths() {
        assert_eq!(asset("vpn.png"), "/assets/vpn.png");
        assert_eq!(asset("/gcloud.png"), "/assets/gcloud.png");
    }

    #[test]
    fn default_page_has_only_core_sections() {
        let sections = Sections::default();
        assert!(!sections.pricing);
        assert!(!sections.faq);
        assert!(!sections.cta);
        assert!(!sections.tokenomics);
    }

    #[test]
    fn nav_follows_enabled_sections() {
        assert_eq!(
            Sections::default().nav_items(),
            vec!["Home", "About", "Benefits", "Roadmap"]
        );

        let full = Sections {
            pricing: true,
            faq: true,
            cta: true,
            tokenomics: true,
        };
        assert_eq!(
            full.nav_items(),
            vec!["Home", "About", "Benefits", "Pricing", "Roadmap", "FAQ"]
        );
    }
}
