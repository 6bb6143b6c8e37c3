use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub kind: BannerKind,
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let (class, icon) = match props.kind {
        BannerKind::Success => ("status-banner success", "fas fa-circle-check"),
        BannerKind::Error => ("status-banner error", "fas fa-circle-exclamation"),
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    html! {
        <div class={class} role="status">
            <i class={icon}></i>
            <span class="status-text">{props.message.clone()}</span>
            <button type="button" class="status-dismiss" aria-label="Dismiss" onclick={dismiss}>{"×"}</button>
            <style>
                {r#"
                .status-banner {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                    border: 1px solid;
                    font-size: 0.95rem;
                }
                .status-banner.success {
                    color: #16a34a;
                    background: #f0fdf4;
                    border-color: #bbf7d0;
                }
                .status-banner.error {
                    color: #dc2626;
                    background: #fef2f2;
                    border-color: #fecaca;
                }
                .status-text {
                    flex: 1;
                }
                .status-dismiss {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
