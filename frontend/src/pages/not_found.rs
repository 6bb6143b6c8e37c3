use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #0f172a;
                    color: #fff;
                }
                .not-found h1 {
                    font-size: 4rem;
                }
                .back-home {
                    color: #60a5fa;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
