use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    // Close on Escape while open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = match (*open, web_sys::window()) {
                    (true, Some(window)) => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        if let Err(e) = window.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not attach dialog keydown listener: {:?}", e);
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div
                class={classes!("dialog-content", props.wide.then_some("wide"))}
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="dialog-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h3 class="dialog-title">{props.title.clone()}</h3>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .dialog-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.75);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                    backdrop-filter: blur(4px);
                    padding: 1rem;
                }
                .dialog-content {
                    position: relative;
                    background: #fff;
                    color: #0f172a;
                    border-radius: 12px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 28rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                }
                .dialog-content.wide {
                    max-width: 48rem;
                }
                .dialog-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 2rem 0.5rem 0;
                }
                .dialog-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    line-height: 1;
                    cursor: pointer;
                    color: #64748b;
                }
                .dialog-close:hover {
                    color: #0f172a;
                }
                "#}
            </style>
        </div>
    }
}
