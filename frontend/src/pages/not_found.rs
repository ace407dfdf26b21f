use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to Investza"}
            </Link<Route>>
            <style>{r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }

                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                }

                .not-found-home {
                    color: #000;
                    background: #fff;
                    border-radius: 999px;
                    padding: 0.8rem 1.6rem;
                    text-decoration: none;
                    font-weight: 600;
                }
            "#}</style>
        </div>
    }
}
