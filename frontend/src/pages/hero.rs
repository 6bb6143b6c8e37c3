use yew::prelude::*;

use crate::utils::scroll::{ScrollController, ScrollTarget};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll: ScrollController,
    #[prop_or(AttrValue::Static("Crafting Digital Experiences That Transform Businesses"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("We build modern, responsive websites and web applications that help businesses grow, engage customers, and increase revenue."))]
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::Static("Get Started"))]
    pub cta_text: AttrValue,
    /// Overrides the default "scroll to contact" action.
    #[prop_or_default]
    pub on_cta: Option<Callback<()>>,
}

const DECORATIVE_IMAGE: &str = "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=200&q=80";

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_cta = {
        let scroll = props.scroll.clone();
        let custom = props.on_cta.clone();
        Callback::from(move |_: MouseEvent| match &custom {
            Some(callback) => callback.emit(()),
            None => scroll.scroll_to(ScrollTarget::anchor("contact")),
        })
    };
    let explore = {
        let scroll = props.scroll.clone();
        Callback::from(move |_: MouseEvent| {
            let viewport = web_sys::window()
                .and_then(|window| window.inner_height().ok())
                .and_then(|height| height.as_f64())
                .unwrap_or(800.0);
            scroll.scroll_to(ScrollTarget::Offset(viewport));
        })
    };
    let view_work = {
        let scroll = props.scroll.clone();
        Callback::from(move |_: MouseEvent| scroll.scroll_to(ScrollTarget::anchor("portfolio")))
    };

    html! {
        <div class="hero">
            <div class="hero-glow">
                <div class="glow blue"></div>
                <div class="glow purple"></div>
                <div class="glow cyan"></div>
            </div>
            <div class="hero-content">
                <span class="hero-tag reveal">{"Software Solutions Agency"}</span>
                <h1 class="hero-title reveal delay-1">{props.title.clone()}</h1>
                <p class="hero-subtitle reveal delay-2">{props.subtitle.clone()}</p>
                <div class="hero-cta-group reveal delay-3">
                    <button class="hero-cta" onclick={on_cta}>
                        {props.cta_text.clone()}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                    <button class="hero-secondary" onclick={view_work}>{"View Our Work"}</button>
                </div>
                <div class="hero-decor reveal delay-4">
                    { for (0..3).map(|i| html! {
                        <img key={i} src={DECORATIVE_IMAGE} alt="Decorative" loading="lazy" />
                    }) }
                </div>
            </div>
            <div class="scroll-indicator" onclick={explore}>
                <span>{"Scroll to explore"}</span>
                <div class="mouse"><div class="wheel"></div></div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 800px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #0f172a, #1e293b);
                    color: #fff;
                    text-align: center;
                }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }
                .glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(100px);
                }
                .glow.blue { top: 25%; left: 25%; width: 16rem; height: 16rem; background: #3b82f6; }
                .glow.purple { bottom: 33%; right: 33%; width: 24rem; height: 24rem; background: #a855f7; filter: blur(120px); }
                .glow.cyan { top: 66%; left: 50%; width: 20rem; height: 20rem; background: #06b6d4; }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    padding: 0 1.5rem;
                }
                .hero-tag {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(59, 130, 246, 0.1);
                    color: #60a5fa;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #cbd5e1;
                    margin-bottom: 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-cta,
                .hero-secondary {
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .hero-cta {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                }
                .hero-cta i {
                    margin-left: 0.5rem;
                }
                .hero-cta:hover {
                    background: #1d4ed8;
                }
                .hero-secondary {
                    background: transparent;
                    color: #cbd5e1;
                    border: 1px solid #475569;
                }
                .hero-secondary:hover {
                    background: #1e293b;
                    color: #fff;
                }
                .hero-decor {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin-top: 4rem;
                }
                .hero-decor img {
                    height: 4rem;
                    opacity: 0.5;
                    filter: grayscale(1);
                    transition: all 0.3s ease;
                }
                .hero-decor img:hover {
                    opacity: 0.8;
                    filter: none;
                }
                .reveal {
                    animation: reveal 0.6s ease both;
                }
                .delay-1 { animation-delay: 0.2s; }
                .delay-2 { animation-delay: 0.4s; }
                .delay-3 { animation-delay: 0.6s; }
                .delay-4 { animation-delay: 0.8s; }
                @keyframes reveal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    cursor: pointer;
                    animation: reveal 0.6s ease 1.2s both;
                }
                .mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #94a3b8;
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                    padding: 0.25rem;
                    margin-top: 0.5rem;
                }
                .wheel {
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 50%;
                    background: #94a3b8;
                    animation: wheel 1.5s infinite;
                }
                @keyframes wheel {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(12px); }
                }
                "#}
            </style>
        </div>
    }
}
