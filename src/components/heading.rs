use yew::prelude::*;

use crate::reveal::ScrollReveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub highlight: AttrValue,
    pub title: AttrValue,
    pub subtitle: Html,
    #[prop_or_default]
    pub highlight_first: bool,
}

/// Two-line section title with a blurb underneath.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let highlight = html! { <span class="heading-highlight">{props.highlight.clone()}</span> };
    let title = html! { <span class="heading-plain">{props.title.clone()}</span> };
    let (first, second) = if props.highlight_first {
        (highlight, title)
    } else {
        (title, highlight)
    };

    html! {
        <ScrollReveal delay={200}>
            <div class="section-heading">
                <h2>{first}<br />{second}</h2>
                <p>{props.subtitle.clone()}</p>
            </div>
            <style>
                {r#"
                .section-heading {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 900;
                    margin-bottom: 2rem;
                }
                .heading-highlight {
                    color: var(--primary);
                }
                .heading-plain {
                    color: #fff;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-heading p strong {
                    color: var(--primary);
                }
                "#}
            </style>
        </ScrollReveal>
    }
}
