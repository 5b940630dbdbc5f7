use yew::prelude::*;

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader-screen">
            <div class="loader" role="status" aria-label="Loading"></div>
            <style>
                {r#"
                .loader-screen {
                    width: 100%;
                    height: 100vh;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    overflow: hidden;
                    background: var(--page-bg);
                }
                .loader {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    border: 4px solid rgba(255, 0, 58, 0.2);
                    border-top-color: var(--primary);
                    animation: loader-spin 0.9s linear infinite;
                    box-shadow: 0 0 40px rgba(255, 0, 58, 0.4);
                }
                @keyframes loader-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
