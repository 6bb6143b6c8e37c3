use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::status_banner::{BannerKind, StatusBanner};
use crate::contact::form::{ContactAction, ContactForm, Field, ProjectType, SubmissionStatus};
use crate::contact::submit::{self, SubmitterHandle};

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart",
        content: "Working with this team was a game-changer for our business. They delivered a stunning website that perfectly captures our brand and has significantly increased our conversion rates.",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director, GrowthLabs",
        content: "The attention to detail and technical expertise demonstrated by this team is exceptional. Our new web application has received overwhelmingly positive feedback from users.",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=michael",
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Founder, CreativeHub",
        content: "I was impressed by how quickly they understood our vision and translated it into a beautiful, functional website. The entire process was smooth and professional.",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=emma",
    },
];

pub static CLIENT_LOGOS: [(&str, &str); 4] = [
    ("TechStart", "https://api.dicebear.com/7.x/identicon/svg?seed=techstart"),
    ("GrowthLabs", "https://api.dicebear.com/7.x/identicon/svg?seed=growthlabs"),
    ("CreativeHub", "https://api.dicebear.com/7.x/identicon/svg?seed=creativehub"),
    ("InnovateCorp", "https://api.dicebear.com/7.x/identicon/svg?seed=innovatecorp"),
];

const SUCCESS_MESSAGE: &str = "Your message has been sent successfully! We'll get back to you soon.";
const ERROR_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Moves a carousel position by `delta`, wrapping at both ends.
pub fn carousel_step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let index = use_state(|| 0usize);
    let step = |delta: isize| {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(carousel_step(*index, TESTIMONIALS.len(), delta)))
    };
    let current = &TESTIMONIALS[*index % TESTIMONIALS.len()];
    let initial = current.name.chars().next().unwrap_or('?').to_string();

    html! {
        <div class="testimonials">
            <h3>{"What Our Clients Say"}</h3>
            <div class="testimonial-card">
                <div class="testimonial-author">
                    <div class="avatar" title={initial}>
                        <img src={current.avatar} alt={current.name} />
                    </div>
                    <div>
                        <h4>{current.name}</h4>
                        <p class="muted">{current.role}</p>
                    </div>
                </div>
                <p class="testimonial-quote">{format!("\"{}\"", current.content)}</p>
            </div>
            <div class="carousel-controls">
                <button type="button" aria-label="Previous testimonial" onclick={step(-1)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button type="button" aria-label="Next testimonial" onclick={step(1)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="trusted-by">
                <h4 class="muted">{"Trusted By"}</h4>
                <div class="logo-row">
                    { for CLIENT_LOGOS.iter().map(|(name, logo)| html! {
                        <div class="logo-tile" key={*name}>
                            <img src={*logo} alt={*name} />
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub submitter: SubmitterHandle,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_reducer(ContactForm::default);

    // Each accepted submission bumps the attempt counter exactly once,
    // so this effect delivers every submission exactly once.
    {
        let attempt = form.attempt();
        let form = form.clone();
        let submitter = props.submitter.clone();
        use_effect_with_deps(
            move |_| {
                if let Some((attempt, fields)) = form.in_flight() {
                    wasm_bindgen_futures::spawn_local(async move {
                        let completed = submit::deliver(submitter, attempt, fields).await;
                        form.dispatch(completed);
                    });
                }
                || ()
            },
            attempt,
        );
    }

    // Keep the <select> in step with state, including the reset after a send
    let project_type_ref = use_node_ref();
    {
        let project_type_ref = project_type_ref.clone();
        use_effect_with_deps(
            move |project_type: &String| {
                if let Some(select) = project_type_ref.cast::<HtmlSelectElement>() {
                    if select.value() != *project_type {
                        select.set_value(project_type);
                    }
                }
                || ()
            },
            form.fields().project_type.clone(),
        );
    }

    let edit = |field: Field| {
        let form = form.clone();
        move |value: String| form.dispatch(ContactAction::Edit(field, value))
    };
    let oninput_name = {
        let edit = edit(Field::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let oninput_email = {
        let edit = edit(Field::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let onchange_project_type = {
        let edit = edit(Field::ProjectType);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit(select.value());
        })
    };
    let oninput_message = {
        let edit = edit(Field::Message);
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            edit(textarea.value());
        })
    };
    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };
    let dismiss = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(ContactAction::DismissBanner))
    };

    let submitting = form.status() == SubmissionStatus::Submitting;
    let fields = form.fields();
    let field_error = |field: Field| match form.visible_error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    };
    let invalid = |field: Field| form.visible_error(field).is_some().then_some("invalid");

    html! {
        <div class="contact">
            <div class="section-heading">
                <h2>{"Let's Work Together"}</h2>
                <p>{"Ready to transform your digital presence? Get in touch with our team of experts and let's create something amazing together."}</p>
            </div>
            <div class="contact-grid">
                <Testimonials />
                <div class="contact-card">
                    <h3>{"Get In Touch"}</h3>
                    {
                        match form.status() {
                            SubmissionStatus::Success => html! {
                                <StatusBanner kind={BannerKind::Success} message={SUCCESS_MESSAGE} on_dismiss={dismiss.clone()} />
                            },
                            SubmissionStatus::Error => html! {
                                <StatusBanner kind={BannerKind::Error} message={ERROR_MESSAGE} on_dismiss={dismiss.clone()} />
                            },
                            _ => html! {},
                        }
                    }
                    <form class="contact-form" {onsubmit} novalidate=true>
                        <label for="contact-name">{"Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Your name"
                            class={classes!(invalid(Field::Name))}
                            value={fields.name.clone()}
                            oninput={oninput_name}
                        />
                        { field_error(Field::Name) }

                        <label for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="your.email@example.com"
                            class={classes!(invalid(Field::Email))}
                            value={fields.email.clone()}
                            oninput={oninput_email}
                        />
                        { field_error(Field::Email) }

                        <label for="contact-project-type">{"Project Type"}</label>
                        <select
                            id="contact-project-type"
                            ref={project_type_ref}
                            value={fields.project_type.clone()}
                            class={classes!(invalid(Field::ProjectType))}
                            onchange={onchange_project_type}
                        >
                            <option value="" selected={fields.project_type.is_empty()} disabled=true>
                                {"Select project type"}
                            </option>
                            { for ProjectType::ALL.into_iter().map(|kind| html! {
                                <option
                                    key={kind.value()}
                                    value={kind.value()}
                                    selected={fields.project_type == kind.value()}
                                >
                                    {kind.label()}
                                </option>
                            }) }
                        </select>
                        { field_error(Field::ProjectType) }

                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            placeholder="Tell us about your project..."
                            class={classes!(invalid(Field::Message))}
                            value={fields.message.clone()}
                            oninput={oninput_message}
                        />
                        { field_error(Field::Message) }

                        <button type="submit" class="submit-button" disabled={submitting}>
                            { if submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                    align-items: start;
                }
                .testimonials h3,
                .contact-card h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .testimonial-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.06);
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .avatar img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #e2e8f0;
                }
                .testimonial-quote {
                    font-style: italic;
                    color: #64748b;
                }
                .muted {
                    color: #64748b;
                    font-size: 0.9rem;
                }
                .carousel-controls {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .carousel-controls button {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    border: 1px solid #cbd5e1;
                    background: #fff;
                    cursor: pointer;
                }
                .trusted-by {
                    margin-top: 3rem;
                }
                .logo-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .logo-tile {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 6px;
                    background: rgba(241, 245, 249, 0.6);
                }
                .logo-tile img {
                    max-height: 3rem;
                    max-width: 100%;
                }
                .contact-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .contact-form label {
                    font-weight: 500;
                    margin-top: 1rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.65rem 0.75rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 6px;
                    font: inherit;
                }
                .contact-form textarea {
                    min-height: 8rem;
                    resize: vertical;
                }
                .contact-form .invalid {
                    border-color: #dc2626;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin: 0;
                }
                .submit-button {
                    margin-top: 1.5rem;
                    padding: 0.8rem;
                    border: none;
                    border-radius: 8px;
                    background: #0f172a;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_in_both_directions() {
        assert_eq!(carousel_step(0, 3, 1), 1);
        assert_eq!(carousel_step(2, 3, 1), 0);
        assert_eq!(carousel_step(0, 3, -1), 2);
        assert_eq!(carousel_step(1, 3, -4), 0);
    }

    #[test]
    fn empty_carousel_stays_at_start() {
        assert_eq!(carousel_step(0, 0, 1), 0);
        assert_eq!(carousel_step(5, 0, -1), 0);
    }
}
