//! Same-page scrolling and the reveal-on-scroll entrance effect.

use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::window_listener::WindowListener;

pub const HOME_SECTION: &str = "home";

/// Document y-coordinate that puts a section just below the fixed navbar.
pub fn section_scroll_target(element_top: f64, page_y_offset: f64, navbar_offset: f64) -> f64 {
    element_top + page_y_offset - navbar_offset
}

pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if section_id == HOME_SECTION {
        window.scroll_to_with_x_and_y(0.0, 0.0);
        return;
    }
    let element = window
        .document()
        .and_then(|d| d.get_element_by_id(section_id));
    match element {
        Some(element) => {
            let page_y = window.page_y_offset().unwrap_or(0.0);
            let top = section_scroll_target(
                element.get_bounding_client_rect().top(),
                page_y,
                config::NAVBAR_OFFSET,
            );
            window.scroll_to_with_x_and_y(0.0, top);
        }
        None => log::warn!("No section with id '{}'", section_id),
    }
}

/// Whether an element whose top edge sits at `element_top` (viewport coords)
/// should be shown. Elements hide again once they drop back below the fold.
pub fn should_reveal(element_top: f64, viewport_height: f64, margin: f64) -> bool {
    element_top < viewport_height - margin
}

/// Toggles `visible` on every `.reveal` element according to its position.
pub fn update_reveals() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(nodes) = document.query_selector_all(".reveal") else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let top = element.get_bounding_client_rect().top();
        let class_list = element.class_list();
        let result = if should_reveal(top, viewport_height, config::REVEAL_MARGIN) {
            class_list.add_1("visible")
        } else if top >= viewport_height {
            class_list.remove_1("visible")
        } else {
            Ok(())
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle reveal class: {:?}", e);
        }
    }
}

/// Keeps `.reveal` elements in sync with the viewport while the caller is mounted.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            update_reveals();
            let on_scroll = WindowListener::attach_or_log("scroll", |_| update_reveals());
            let on_resize = WindowListener::attach_or_log("resize", |_| update_reveals());
            move || {
                drop(on_scroll);
                drop(on_resize);
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_subtracts_navbar() {
        assert_eq!(section_scroll_target(300.0, 1200.0, 80.0), 1420.0);
    }

    #[test]
    fn scroll_target_for_section_above_viewport() {
        assert_eq!(section_scroll_target(-500.0, 900.0, 80.0), 320.0);
    }

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(599.0, 800.0, 100.0));
        assert!(!should_reveal(700.0, 800.0, 100.0));
        assert!(should_reveal(-50.0, 800.0, 100.0));
    }
}
