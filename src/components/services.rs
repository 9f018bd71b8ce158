use yew::prelude::*;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "✨",
        title: "Wedding Planner",
        description: "Turning your dream wedding into reality with meticulous planning and execution",
    },
    Service {
        icon: "💼",
        title: "Corporate Events",
        description: "Professional corporate gatherings that leave lasting impressions",
    },
    Service {
        icon: "🍽️",
        title: "Event Catering",
        description: "Exquisite culinary experiences with premium quality and hygiene",
    },
    Service {
        icon: "🎂",
        title: "Birthday Events",
        description: "Memorable celebrations designed to make every moment special",
    },
    Service {
        icon: "👥",
        title: "Public Meetings",
        description: "Seamless organization for conferences and public gatherings",
    },
    Service {
        icon: "🚀",
        title: "Product Launch + Promotions",
        description: "Impactful events that showcase your brand brilliantly",
    },
    Service {
        icon: "🎨",
        title: "Interior Designing",
        description: "Stunning venue transformations that captivate and inspire",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 5rem 1rem;
                        background: #fff;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .service-card {
                        padding: 1.5rem;
                        border: 1px solid rgba(0, 0, 0, 0.08);
                        border-radius: 12px;
                        transition: box-shadow 0.3s, border-color 0.3s;
                    }
                    .service-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        border-color: rgba(212, 175, 55, 0.5);
                    }
                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                    }
                    .service-card h3 { font-size: 1.25rem; font-weight: 600; }
                    .service-card p { color: #6b6b6b; line-height: 1.6; }
                    .services-footnote {
                        text-align: center;
                        margin-top: 3rem;
                        font-style: italic;
                        color: #6b6b6b;
                    }
                    @media (max-width: 1280px) {
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-header reveal">
                <h2>{"Ideas We Can Help With"}</h2>
                <p>{"Comprehensive event planning and catering services across Kerala"}</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div key={service.title} class="service-card reveal">
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </div>
                }) }
            </div>
            <p class="services-footnote">{"We serve all across Kerala"}</p>
        </section>
    }
}
