use yew::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    ArrowRight,
    CheckCircle,
    Close,
    Coins,
    Database,
    Globe,
    Lock,
    Menu,
    Minus,
    Network,
    Newspaper,
    Paper,
    Percent,
    Play,
    Plus,
    Shield,
    Star,
    Telegram,
    Twitter,
    Users,
    Wallet,
    Zap,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Coins => &[
                "M8 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12",
                "M18.09 10.37A6 6 0 1 1 10.34 18",
                "M7 6h1v4",
                "m16.71 13.88.7.71-2.82 2.82",
            ],
            Icon::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Minus => &["M5 12h14"],
            Icon::Network => &[
                "M16 16h6v6h-6z",
                "M2 16h6v6H2z",
                "M9 2h6v6H9z",
                "M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3",
                "M12 12V8",
            ],
            Icon::Newspaper => &[
                "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2",
                "M18 14h-8",
                "M15 18h-5",
                "M10 6h8v4h-8V6Z",
            ],
            Icon::Paper => &[
                "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
            Icon::Percent => &[
                "M19 5 5 19",
                "M6.5 4a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5",
                "M17.5 15a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5",
            ],
            Icon::Play => &["m6 3 14 9-14 9V3z"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Icon::Telegram => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Wallet => &[
                "M21 12V7H5a2 2 0 0 1 0-4h14v4",
                "M3 5v14a2 2 0 0 0 2 2h16v-5",
                "M18 12a2 2 0 0 0 0 4h4v-4Z",
            ],
            Icon::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
        }
    }

    pub fn html(self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", class)}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.paths().iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        }
    }
}
