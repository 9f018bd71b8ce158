use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 2rem 1rem;
                        text-align: center;
                        font-size: 0.9rem;
                        color: #6b6b6b;
                        border-top: 1px solid rgba(0, 0, 0, 0.06);
                    }
                "#}
            </style>
            {format!("© {} {}{}. All rights reserved.", year, config::BUSINESS_NAME, config::BUSINESS_NAME_ACCENT)}
        </footer>
    }
}
