use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let whatsapp_href = config::whatsapp_href();

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    @property --angle {
                        syntax: '<angle>';
                        initial-value: 0deg;
                        inherits: false;
                    }
                    @keyframes shimmer-spin {
                        to { --angle: 360deg; }
                    }
                    @keyframes heroRise {
                        from { transform: translateY(60px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 8rem 1rem 5rem;
                        background: linear-gradient(to bottom, #ffffff, rgba(240, 232, 220, 0.2));
                    }
                    .hero-glow {
                        pointer-events: none;
                        position: absolute;
                        width: 20rem;
                        height: 20rem;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .hero-glow.top { top: -10rem; right: -10rem; background: rgba(212, 175, 55, 0.2); }
                    .hero-glow.bottom { bottom: -10rem; left: -10rem; background: rgba(20, 20, 20, 0.1); }
                    .hero-grid {
                        max-width: 1200px;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-label {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid rgba(0, 0, 0, 0.1);
                        border-radius: 999px;
                        padding: 0.25rem 1rem;
                        font-size: 0.85rem;
                        color: #6b6b6b;
                    }
                    .hero-label .dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #d4af37;
                    }
                    .hero-name {
                        display: block;
                        font-size: 4.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #141414, #d4af37, #141414);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: heroRise 1.1s ease-out;
                    }
                    .hero-role {
                        display: inline-block;
                        margin-top: 0.75rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.35em;
                        text-transform: uppercase;
                        color: #6b6b6b;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        font-weight: 300;
                        color: #6b6b6b;
                        max-width: 36rem;
                        animation: heroRise 0.8s ease-out;
                    }
                    .chat-button {
                        position: relative;
                        display: inline-flex;
                        padding: 1.5px;
                        border-radius: 999px;
                        overflow: hidden;
                        background: #d1d1d1;
                        text-decoration: none;
                    }
                    .chat-button .shimmer {
                        position: absolute;
                        inset: 0;
                        background: conic-gradient(from var(--angle), transparent 25%, rgb(212, 195, 6), transparent 50%);
                        animation: shimmer-spin 2.5s linear infinite;
                    }
                    .chat-button .label {
                        position: relative;
                        z-index: 10;
                        padding: 0.75rem 2rem;
                        font-weight: 600;
                        color: #141414;
                        background: #fff;
                        border-radius: 999px;
                    }
                    .hero-image {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .hero-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-image-caption {
                        position: absolute;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        display: flex;
                        justify-content: space-between;
                        color: rgba(255, 255, 255, 0.85);
                        font-size: 0.85rem;
                    }
                    @media (max-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr; text-align: center; }
                        .hero-name { font-size: 3rem; }
                        .hero-subtitle { margin: 0 auto; }
                    }
                "#}
            </style>
            <div class="hero-glow top"></div>
            <div class="hero-glow bottom"></div>
            <div class="hero-grid">
                <div class="hero-text">
                    <span class="hero-label">
                        <span class="dot"></span>
                        {"Premium events across Kerala"}
                    </span>
                    <h1>
                        <span class="hero-name">{config::BUSINESS_NAME}</span>
                        <span class="hero-role">{"Event Planner"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Crafting unforgettable weddings, corporate events, and intimate celebrations with effortless elegance."}
                    </p>
                    <a href={whatsapp_href} target="_blank" rel="noreferrer" class="chat-button">
                        <div class="shimmer"></div>
                        <span class="label">{"CHAT NOW"}</span>
                    </a>
                </div>
                <div class="hero-image">
                    <img src="/assets/hero-image.jpg" alt="Elegant event setup by AaliyaEvents" />
                    <div class="hero-image-caption">
                        <span>{"🟢 Live events in progress"}</span>
                        <span>{"Weddings • Corporate • Social"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
