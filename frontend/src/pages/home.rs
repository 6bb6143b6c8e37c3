use web_sys::js_sys;
use yew::prelude::*;

use crate::contact::section::ContactSection;
use crate::contact::submit::SubmitterHandle;
use crate::pages::hero::Hero;
use crate::pages::services::Services;
use crate::portfolio::grid::PortfolioGrid;
use crate::utils::scroll::{ScrollController, ScrollTarget};

const SCROLL_TOP_DURATION_SECS: f64 = 1.2;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("hero", "Home"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Services", ["Web Development", "UI/UX Design", "E-commerce Solutions", "Mobile Applications"]),
    ("Company", ["About Us", "Our Team", "Careers", "Blog"]),
    ("Connect", ["Contact Us", "Twitter", "LinkedIn", "Instagram"]),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub scroll: ScrollController,
    pub submitter: SubmitterHandle,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    scroll: ScrollController,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <img class="header-logo" src="/djjlogodark.png" alt="DJJ Software Solutions Logo" width="120" />
                <nav class={classes!("site-nav", (*menu_open).then_some("open"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let onclick = {
                            let scroll = props.scroll.clone();
                            let menu_open = menu_open.clone();
                            let id = *id;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                scroll.scroll_to(ScrollTarget::anchor(id));
                            })
                        };
                        html! {
                            <a key={*id} href={format!("#{}", id)} {onclick}>{*label}</a>
                        }
                    }) }
                </nav>
                <button class="menu-toggle" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"WebDevStudio"}</h3>
                    <p>{"Creating exceptional digital experiences that drive business growth."}</p>
                </div>
                { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                    <div key={*heading}>
                        <h4>{*heading}</h4>
                        <ul>
                            { for links.iter().map(|link| html! { <li><a href="#">{*link}</a></li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} WebDevStudio. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let scroll_top = {
        let scroll = props.scroll.clone();
        Callback::from(move |_: MouseEvent| {
            scroll.scroll_to_with_duration(ScrollTarget::Top, SCROLL_TOP_DURATION_SECS)
        })
    };

    html! {
        <div class="home-page">
            <Header scroll={props.scroll.clone()} />
            <main>
                <section id="hero" class="page-section hero-section">
                    <Hero scroll={props.scroll.clone()} />
                </section>
                <section id="services" class="page-section fade-in-up">
                    <Services />
                </section>
                <section id="portfolio" class="page-section fade-in-up muted-bg">
                    <PortfolioGrid />
                </section>
                <section id="contact" class="page-section fade-in-up">
                    <ContactSection submitter={props.submitter.clone()} />
                </section>
            </main>
            <Footer />
            <button class="scroll-top" aria-label="Scroll to top" onclick={scroll_top}>
                <i class="fas fa-chevron-up"></i>
            </button>
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    color: #0f172a;
                }
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(226, 232, 240, 0.4);
                    padding: 1rem 0;
                }
                .header-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .site-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .site-nav a {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .site-nav a:hover {
                    color: #2563eb;
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .site-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #fff;
                        padding: 1rem;
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .site-nav.open {
                        display: flex;
                    }
                    .menu-toggle {
                        display: block;
                    }
                }
                .page-section {
                    padding: 5rem 0;
                }
                .hero-section {
                    padding: 6rem 0 0;
                }
                .muted-bg {
                    background: rgba(241, 245, 249, 0.5);
                }
                .fade-in-up {
                    animation: reveal 0.6s ease both;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    color: #64748b;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .site-footer {
                    background: rgba(241, 245, 249, 0.8);
                    border-top: 1px solid #e2e8f0;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                }
                .footer-grid p,
                .footer-grid a {
                    font-size: 0.875rem;
                    color: #64748b;
                    text-decoration: none;
                }
                .footer-grid a:hover {
                    color: #2563eb;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.5rem;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(226, 232, 240, 0.4);
                    text-align: center;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #0f172a;
                    color: #fff;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .scroll-top:hover {
                    background: #1e293b;
                }
                "#}
            </style>
        </div>
    }
}
