use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page slipped through the tunnel."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                    color: var(--primary);
                }
                .not-found p {
                    color: #9ca3af;
                }
                .not-found-link {
                    margin-top: 1.5rem;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--primary);
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
