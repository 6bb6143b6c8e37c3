use yew::prelude::*;

use crate::components::dialog::Dialog;

#[derive(PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        icon: "fas fa-code",
        title: "Web Development",
        description: "Custom websites built with modern frameworks and technologies to deliver exceptional user experiences.",
        details: "Our web development services include full-stack development using React, Vue, Angular, Node.js, and other modern technologies. We focus on creating responsive, accessible, and performant websites that drive results.",
    },
    Service {
        icon: "fas fa-palette",
        title: "UI/UX Design",
        description: "User-centered design that combines aesthetics with functionality to create intuitive digital experiences.",
        details: "Our design process starts with understanding your users and business goals. We create wireframes, prototypes, and high-fidelity designs that are both beautiful and functional, ensuring a seamless user experience.",
    },
    Service {
        icon: "fas fa-globe",
        title: "E-Commerce Solutions",
        description: "Scalable online stores with secure payment gateways, inventory management, and customer analytics.",
        details: "From small boutique shops to large enterprise stores, we build e-commerce solutions that drive sales. Our platforms include features like secure payment processing, inventory management, customer accounts, and detailed analytics.",
    },
    Service {
        icon: "fas fa-rocket",
        title: "Digital Marketing",
        description: "Strategic marketing campaigns to increase your online visibility, drive traffic, and convert leads.",
        details: "Our digital marketing services include SEO optimization, content strategy, social media marketing, email campaigns, and PPC advertising. We help you reach your target audience and achieve measurable results.",
    },
];

pub fn learn_more_line(title: &str) -> String {
    format!(
        "Contact us to learn more about our {} services and how we can help your business grow.",
        title.to_lowercase()
    )
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let is_open = use_state(|| false);
    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };
    html! {
        <div class="service-reveal" style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.1)}>
            <div class="service-card" onclick={open}>
                <div class="service-icon"><i class={service.icon}></i></div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <button type="button" class="learn-more">{"Learn More"}</button>
            </div>
            <Dialog open={*is_open} title={service.title} on_close={close}>
                <p class="dialog-lead">{service.details}</p>
                <p class="dialog-note">{learn_more_line(service.title)}</p>
            </Dialog>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services">
            <div class="section-heading">
                <h2>{"Our Services"}</h2>
                <p>{"We offer comprehensive web solutions tailored to your business needs, from design to development and beyond."}</p>
            </div>
            <div class="service-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <ServiceCard key={service.title} {service} {index} />
                }) }
            </div>
            <style>
                {r#"
                .services {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .service-reveal {
                    animation: reveal 0.5s ease both;
                }
                .service-card {
                    height: 100%;
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }
                .service-icon i {
                    font-size: 2rem;
                    color: #2563eb;
                    padding: 0.9rem;
                    border-radius: 50%;
                    background: rgba(37, 99, 235, 0.1);
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    margin: 1rem 0 0.5rem;
                }
                .service-card p {
                    color: #64748b;
                }
                .learn-more {
                    margin-top: 0.75rem;
                    background: none;
                    border: none;
                    color: #2563eb;
                    cursor: pointer;
                    font-weight: 500;
                }
                .dialog-lead {
                    color: #64748b;
                }
                .dialog-note {
                    font-size: 0.9rem;
                    color: #64748b;
                    margin-top: 1rem;
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
    fn learn_more_line_lowercases_title() {
        assert_eq!(
            learn_more_line("UI/UX Design"),
            "Contact us to learn more about our ui/ux design services and how we can help your business grow."
        );
    }

    #[test]
    fn four_distinct_services() {
        let mut titles: Vec<&str> = SERVICES.iter().map(|service| service.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }
}
