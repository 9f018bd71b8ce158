use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::services::Services;
use crate::components::why_choose_us::WhyChooseUs;
use crate::scroll::use_reveal_on_scroll;

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_on_scroll();

    html! {
        <div class="home-page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #141414;
                        background: #fff;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .section-header p {
                        font-size: 1.25rem;
                        color: #6b6b6b;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 768px) {
                        .section-header h2 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <Navbar />
            <Hero />
            <Services />
            <Gallery />
            <WhyChooseUs />
            <Contact />
            <Footer />
        </div>
    }
}
