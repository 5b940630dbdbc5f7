use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::visibility::{use_visibility, TrackerOptions, DEFAULT_THRESHOLD};

pub const DURATION: &str = "0.8s";
pub const EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const IDENTITY: &str = "translate(0, 0) scale(1)";

/// Where content slides in from while hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
}

impl Direction {
    /// Transform applied while the element is hidden.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Direction::Up => "translateY(60px)",
            Direction::Down => "translateY(-60px)",
            Direction::Left => "translateX(-60px)",
            Direction::Right => "translateX(60px)",
            Direction::Scale => "scale(0.8)",
        }
    }

    /// Left for even positions, right for odd ones.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

// Unknown names fall back to `Up`.
impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "scale" => Direction::Scale,
            _ => Direction::Up,
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Scale => "scale",
        };
        f.write_str(name)
    }
}

/// Delay for item `index` of a staggered list.
pub fn stagger(base: u32, step: u32, index: usize) -> u32 {
    base.saturating_add(step.saturating_mul(index as u32))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub delay: u32,
    pub direction: Direction,
    pub retrigger: bool,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            direction: Direction::Up,
            retrigger: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealConfig {
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions::new(self.threshold, self.retrigger)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub transform: &'static str,
    pub opacity: u8,
    pub transition: String,
}

impl RevealStyle {
    pub fn compute(visible: bool, config: &RevealConfig) -> Self {
        let transform = if visible {
            IDENTITY
        } else {
            config.direction.hidden_transform()
        };
        Self {
            transform,
            opacity: u8::from(visible),
            transition: format!("all {} {} {}ms", DURATION, EASING, config.delay),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: {}; opacity: {}; transition: {};",
            self.transform, self.opacity, self.transition
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub retrigger: bool,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

impl ScrollRevealProps {
    fn config(&self) -> RevealConfig {
        RevealConfig {
            delay: self.delay,
            direction: self.direction,
            retrigger: self.retrigger,
            threshold: self.threshold,
        }
    }
}

/// Fades and slides its children in when they scroll into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let config = props.config();
    let visible = use_visibility(node.clone(), config.tracker_options());
    let style = RevealStyle::compute(visible, &config);

    html! {
        <div ref={node} class={props.class.clone()} style={style.to_css()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Scale,
    ];

    fn config(direction: Direction, delay: u32) -> RevealConfig {
        RevealConfig {
            direction,
            delay,
            ..RevealConfig::default()
        }
    }

    #[test]
    fn hidden_offsets_per_direction() {
        let expected = [
            "translateY(60px)",
            "translateY(-60px)",
            "translateX(-60px)",
            "translateX(60px)",
            "scale(0.8)",
        ];
        for (direction, offset) in ALL.iter().zip(expected) {
            let style = RevealStyle::compute(false, &config(*direction, 0));
            assert_eq!(style.transform, offset, "{}", direction);
            assert_eq!(style.opacity, 0);
        }
    }

    #[test]
    fn visible_is_identity_for_every_direction() {
        for direction in ALL {
            let style = RevealStyle::compute(true, &config(direction, 0));
            assert_eq!(style.transform, IDENTITY);
            assert_eq!(style.opacity, 1);
        }
    }

    #[test]
    fn scale_with_delay() {
        let cfg = config(Direction::Scale, 400);
        let before = RevealStyle::compute(false, &cfg);
        let after = RevealStyle::compute(true, &cfg);

        assert_eq!(before.transform, "scale(0.8)");
        assert_eq!(after.transform, "translate(0, 0) scale(1)");
        assert!(after.transition.contains("400ms"));
        assert_eq!(
            after.transition,
            "all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 400ms"
        );
    }

    #[test]
    fn css_string() {
        let style = RevealStyle::compute(false, &config(Direction::Left, 0));
        assert_eq!(
            style.to_css(),
            "transform: translateX(-60px); opacity: 0; \
             transition: all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0ms;"
        );
    }

    #[test]
    fn default_config() {
        let cfg = RevealConfig::default();
        assert_eq!(cfg.delay, 0);
        assert_eq!(cfg.direction, Direction::Up);
        assert!(cfg.retrigger);
        assert_eq!(cfg.threshold, 0.1);
    }

    #[test]
    fn parse_direction_names() {
        assert_eq!("scale".parse::<Direction>(), Ok(Direction::Scale));
        assert_eq!(" Left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("diagonal".parse::<Direction>(), Ok(Direction::Up));
    }

    #[test]
    fn config_from_json_uses_defaults() {
        let cfg: RevealConfig =
            serde_json::from_str(r#"{"direction":"right","delay":600}"#).unwrap();
        assert_eq!(cfg.direction, Direction::Right);
        assert_eq!(cfg.delay, 600);
        assert!(cfg.retrigger);
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn stagger_and_alternate() {
        let delays: Vec<u32> = (0..4).map(|i| stagger(400, 200, i)).collect();
        assert_eq!(delays, vec![400, 600, 800, 1000]);
        assert_eq!(stagger(u32::MAX, 100, 3), u32::MAX);

        assert_eq!(Direction::alternating(0), Direction::Left);
        assert_eq!(Direction::alternating(1), Direction::Right);
        assert_eq!(Direction::alternating(4), Direction::Left);
    }

    #[test]
    fn tracker_options_clamp_threshold() {
        let cfg = RevealConfig {
            threshold: 2.5,
            retrigger: false,
            ..RevealConfig::default()
        };
        let options = cfg.tracker_options();
        assert_eq!(options.threshold, 1.0);
        assert!(!options.retrigger);
    }
}
