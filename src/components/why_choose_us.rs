use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "✨",
        title: "Professional Planning",
        description: "Meticulous attention to detail ensuring every aspect of your event is perfect",
    },
    Feature {
        icon: "👥",
        title: "Experienced Team",
        description: "Seasoned professionals dedicated to bringing your vision to life",
    },
    Feature {
        icon: "🏅",
        title: "Premium Quality & Hygiene",
        description: "Uncompromising standards in food quality, presentation, and safety",
    },
    Feature {
        icon: "📍",
        title: "Pan-Kerala Service",
        description: "Comprehensive coverage across all districts of Kerala",
    },
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id="why-choose-us" class="why-section">
            <style>
                {r#"
                    .why-section {
                        padding: 5rem 1rem;
                        background: #fff;
                    }
                    .why-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .why-card {
                        display: flex;
                        gap: 1.5rem;
                        padding: 2rem;
                        border-radius: 16px;
                        border: 1px solid rgba(0, 0, 0, 0.08);
                        transition: box-shadow 0.3s, border-color 0.3s;
                    }
                    .why-card:hover {
                        border-color: rgba(212, 175, 55, 0.3);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    }
                    .why-card.from-left { transform: translateX(-60px); }
                    .why-card.from-right { transform: translateX(60px); }
                    .why-card.visible { transform: translateX(0); }
                    .why-icon {
                        flex-shrink: 0;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                    }
                    .why-card h3 { font-size: 1.5rem; font-weight: 600; }
                    .why-card p { color: #6b6b6b; line-height: 1.6; }
                    @media (max-width: 768px) {
                        .why-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-header reveal">
                <h2>{"Why Choose Us"}</h2>
                <p>{"Experience the difference with AaliyaEvents"}</p>
            </div>
            <div class="why-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| {
                    // Alternate slide-in direction across the two columns.
                    let side = if index % 2 == 0 { "from-left" } else { "from-right" };
                    html! {
                        <div key={feature.title} class={classes!("why-card", "reveal", side)}>
                            <div class="why-icon">{feature.icon}</div>
                            <div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
