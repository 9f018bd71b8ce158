use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::{scroll_to_section, HOME_SECTION};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", HOME_SECTION),
    ("Services", "services"),
    ("Gallery", "gallery"),
    ("Why Choose Us", "why-choose-us"),
    ("Contact", "contact"),
];

fn call_now() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&config::tel_href()) {
            log::warn!("Failed to open dialer: {:?}", e);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAVBAR_SCROLL_THRESHOLD;

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            scroll_to_section(section_id);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_call = Callback::from(|_: MouseEvent| call_now());

    let logo_click = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(HOME_SECTION))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                        border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 80px;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .nav-logo .accent { color: #d4af37; }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 0.9rem;
                        font-weight: 500;
                        cursor: pointer;
                        color: rgba(20, 20, 20, 0.8);
                    }
                    .nav-link:hover { color: #141414; }
                    .nav-call-button {
                        background: #141414;
                        color: #fff;
                        border: none;
                        border-radius: 999px;
                        padding: 0.5rem 1.5rem;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .nav-call-button:hover { transform: scale(1.05); }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #141414;
                    }
                    @media (max-width: 1024px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: stretch;
                            position: fixed;
                            top: 80px;
                            right: 0;
                            width: 300px;
                            padding: 2rem;
                            gap: 1rem;
                            background: #fff;
                            box-shadow: -8px 0 24px rgba(0, 0, 0, 0.1);
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            text-align: left;
                            font-size: 1.1rem;
                            padding: 0.5rem 0;
                            border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo" onclick={logo_click}>
                    {config::BUSINESS_NAME}
                    <span class="accent">{config::BUSINESS_NAME_ACCENT}</span>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|&(label, section_id)| {
                        let go_to = go_to.clone();
                        html! {
                            <button
                                key={section_id}
                                class="nav-link"
                                onclick={Callback::from(move |_: MouseEvent| go_to.emit(section_id))}
                            >
                                {label}
                            </button>
                        }
                    }) }
                    <button class="nav-call-button" onclick={on_call}>
                        {"📞 Call Now"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
