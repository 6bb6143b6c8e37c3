use yew::prelude::*;
use yew_router::components::Link;

use crate::contact::section::ContactSection;
use crate::contact::submit::SubmitterHandle;
use crate::portfolio::grid::PortfolioGrid;
use crate::Route;

#[derive(Properties, PartialEq)]
struct StoryboardProps {
    name: AttrValue,
    children: Children,
}

/// Frame around a section rendered on its own under `/dev/*`.
#[function_component(Storyboard)]
fn storyboard(props: &StoryboardProps) -> Html {
    html! {
        <div class="storyboard">
            <div class="storyboard-bar">
                <span>{format!("dev · {}", props.name)}</span>
                <Link<Route> to={Route::Home}>{"home"}</Link<Route>>
                <Link<Route> to={Route::DevPortfolio}>{"portfolio"}</Link<Route>>
                <Link<Route> to={Route::DevContact}>{"contact"}</Link<Route>>
            </div>
            <div class="storyboard-body">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .storyboard {
                    min-height: 100vh;
                    background: #f8fafc;
                }
                .storyboard-bar {
                    display: flex;
                    gap: 1rem;
                    padding: 0.5rem 1rem;
                    background: #1e293b;
                    color: #facc15;
                    font-family: monospace;
                    font-size: 0.8rem;
                }
                .storyboard-bar a {
                    color: #e2e8f0;
                }
                .storyboard-body {
                    padding: 3rem 0;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(DevPortfolio)]
pub fn dev_portfolio() -> Html {
    html! {
        <Storyboard name="portfolio">
            <PortfolioGrid />
        </Storyboard>
    }
}

#[derive(Properties, PartialEq)]
pub struct DevContactProps {
    pub submitter: SubmitterHandle,
}

#[function_component(DevContact)]
pub fn dev_contact(props: &DevContactProps) -> Html {
    html! {
        <Storyboard name="contact">
            <ContactSection submitter={props.submitter.clone()} />
        </Storyboard>
    }
}
