use web_sys::Element;
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::portfolio::models::{CategoryFilter, PortfolioState, Project};

const CARD_BADGES: usize = 2;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    on_open: Callback<&'static str>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project.id))
    };
    let (badges, hidden) = project.badge_preview(CARD_BADGES);
    html! {
        <div class="project-card" {onclick}>
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-hover">
                    <h3>{project.title}</h3>
                    <p>{project.category.label()}</p>
                </div>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="badge-row">
                    { for badges.iter().map(|tech| html! { <span class="badge secondary">{*tech}</span> }) }
                    if hidden > 0 {
                        <span class="badge outline">{format!("+{}", hidden)}</span>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid() -> Html {
    let state = use_state(PortfolioState::default);

    let select_category = {
        let state = state.clone();
        Callback::from(move |filter: CategoryFilter| {
            let mut next = (*state).clone();
            next.select_category(filter);
            state.set(next);
        })
    };
    // Tabs carry their filter name; one handler parses it back
    let on_tab = Callback::from(move |e: MouseEvent| {
        let tab: Element = e.target_unchecked_into();
        let name = tab.get_attribute("data-category").unwrap_or_default();
        match name.parse::<CategoryFilter>() {
            Ok(filter) => select_category.emit(filter),
            Err(e) => log::warn!("Ignoring tab click: {}", e),
        }
    });
    let open_project = {
        let state = state.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*state).clone();
            if next.open(id) {
                state.set(next);
            }
        })
    };
    let close_project = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.close();
            state.set(next);
        })
    };

    let visible = state.visible();
    let selected = state.selected();

    html! {
        <div class="portfolio">
            <div class="section-heading">
                <h2>{"Our Portfolio"}</h2>
                <p>{"Explore our recent projects showcasing our expertise in web development, mobile applications, and digital experiences."}</p>
            </div>
            <div class="portfolio-tabs" role="tablist">
                { for CategoryFilter::TABS.into_iter().map(|tab| html! {
                    <button
                        role="tab"
                        class={classes!("portfolio-tab", (state.active() == tab).then_some("active"))}
                        key={tab.as_str()}
                        data-category={tab.as_str()}
                        onclick={on_tab.clone()}
                    >
                        {tab.label()}
                    </button>
                }) }
            </div>
            <div class="project-grid">
                { for visible.into_iter().map(|project| html! {
                    <ProjectCard key={project.id} {project} on_open={open_project.clone()} />
                }) }
            </div>
            <Dialog
                open={selected.is_some()}
                title={selected.map(|project| project.title).unwrap_or_default()}
                on_close={close_project}
                wide=true
            >
                if let Some(project) = selected {
                    <span class="badge primary">{project.category.label()}</span>
                    <div class="project-detail-image">
                        <img src={project.image} alt={project.title} />
                    </div>
                    <div class="project-detail">
                        <h4>{"Project Overview"}</h4>
                        <p>{project.description}</p>
                        <h4>{"Technologies Used"}</h4>
                        <div class="badge-row">
                            { for project.technologies.iter().map(|tech| html! { <span class="badge secondary">{*tech}</span> }) }
                        </div>
                        <h4>{"Results"}</h4>
                        <p>{project.results}</p>
                    </div>
                }
            </Dialog>
            <style>
                {r#"
                .portfolio {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .portfolio-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 0.25rem;
                    margin: 0 auto 3rem;
                    padding: 0.25rem;
                    background: #f1f5f9;
                    border-radius: 8px;
                    width: fit-content;
                }
                .portfolio-tab {
                    background: none;
                    border: none;
                    padding: 0.5rem 1.25rem;
                    border-radius: 6px;
                    cursor: pointer;
                    color: #64748b;
                    font-weight: 500;
                }
                .portfolio-tab.active {
                    background: #fff;
                    color: #0f172a;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .project-card {
                    background: #fff;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                    animation: card-in 0.3s ease both;
                }
                .project-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 20px 35px rgba(0, 0, 0, 0.12);
                }
                @keyframes card-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .project-image {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .project-image:hover img {
                    transform: scale(1.1);
                }
                .project-hover {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    color: #fff;
                }
                .project-hover:hover {
                    opacity: 1;
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-description {
                    color: #64748b;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .badge-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .badge {
                    font-size: 0.75rem;
                    font-weight: 600;
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                }
                .badge.secondary {
                    background: #f1f5f9;
                    color: #0f172a;
                }
                .badge.outline {
                    border: 1px solid #cbd5e1;
                    color: #0f172a;
                }
                .badge.primary {
                    background: #0f172a;
                    color: #fff;
                }
                .project-detail-image {
                    border-radius: 8px;
                    overflow: hidden;
                    margin: 1rem 0 1.5rem;
                }
                .project-detail-image img {
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                }
                .project-detail h4 {
                    font-size: 1.1rem;
                    margin: 1rem 0 0.5rem;
                }
                .project-detail p {
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}
