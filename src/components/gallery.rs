use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::lightbox::{Lightbox, LightboxAction, PointerTarget, GALLERY_IMAGES};
use crate::window_listener::WindowListener;

fn pointer_handler(
    dispatcher: &UseReducerDispatcher<Lightbox>,
    target: PointerTarget,
) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |e: MouseEvent| {
        if target.stops_propagation() {
            e.stop_propagation();
        }
        if let Some(action) = target.action() {
            dispatcher.dispatch(action);
        }
    })
}

/// Reducer seed for the section. The image list is fixed at compile time, so
/// the length captured here stays valid for the component's whole life.
fn initial_lightbox() -> Lightbox {
    Lightbox::new(GALLERY_IMAGES.len())
}

/// Forwards every window `keydown` to `dispatch` until the returned handle is dropped.
fn listen_for_keys<F>(dispatch: F) -> Option<WindowListener>
where
    F: Fn(LightboxAction) + 'static,
{
    WindowListener::attach_or_log("keydown", move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(LightboxAction::Key(event.key()));
        }
    })
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let images = GALLERY_IMAGES;
    let lightbox = use_reducer_eq(initial_lightbox);

    // Registered once per mount; the reducer ignores keys while closed.
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = listen_for_keys(move |action| dispatcher.dispatch(action));
                move || drop(listener)
            },
            (),
        );
    }

    let dispatcher = lightbox.dispatcher();
    let current = lightbox
        .state()
        .current_index()
        .and_then(|index| images.get(index));

    html! {
        <section id="gallery" class="gallery-section">
            <style>
                {r#"
                    .gallery-section {
                        padding: 5rem 1rem;
                        background: rgba(240, 232, 220, 0.2);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .gallery-item {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        border-radius: 12px;
                        overflow: hidden;
                        cursor: pointer;
                    }
                    .gallery-item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .gallery-item:hover img {
                        transform: scale(1.1);
                    }
                    .gallery-item-hover {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        opacity: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 1.1rem;
                        transition: opacity 0.3s;
                    }
                    .gallery-item:hover .gallery-item-hover {
                        opacity: 1;
                    }
                    .lightbox-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.95);
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .lightbox-image {
                        max-width: 72rem;
                        max-height: 90vh;
                    }
                    .lightbox-image img {
                        width: 100%;
                        height: 100%;
                        max-height: 90vh;
                        object-fit: contain;
                        border-radius: 8px;
                    }
                    .lightbox-control {
                        position: absolute;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        transition: color 0.2s;
                        z-index: 10;
                    }
                    .lightbox-control:hover {
                        color: #d4af37;
                    }
                    .lightbox-close { top: 1rem; right: 1rem; font-size: 2rem; }
                    .lightbox-prev { left: 1rem; font-size: 2.5rem; }
                    .lightbox-next { right: 1rem; font-size: 2.5rem; }
                    @media (max-width: 1024px) {
                        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-header reveal">
                <h2>{"Our Gallery"}</h2>
                <p>{"A glimpse into the unforgettable moments we've created"}</p>
            </div>
            <div class="gallery-grid">
                { for images.iter().enumerate().map(|(index, image)| html! {
                    <div
                        key={index}
                        class="gallery-item reveal"
                        onclick={pointer_handler(&dispatcher, PointerTarget::Thumbnail(index))}
                    >
                        <img src={image.source} alt={image.alt_text} loading="lazy" />
                        <div class="gallery-item-hover">
                            <span>{"View Image"}</span>
                        </div>
                    </div>
                }) }
            </div>
            {
                if let Some(image) = current {
                    html! {
                        <div
                            class="lightbox-overlay"
                            onclick={pointer_handler(&dispatcher, PointerTarget::Backdrop)}
                        >
                            <button
                                class="lightbox-control lightbox-close"
                                aria-label="Close"
                                onclick={pointer_handler(&dispatcher, PointerTarget::CloseControl)}
                            >
                                {"×"}
                            </button>
                            <button
                                class="lightbox-control lightbox-prev"
                                aria-label="Previous image"
                                onclick={pointer_handler(&dispatcher, PointerTarget::PreviousControl)}
                            >
                                {"‹"}
                            </button>
                            <button
                                class="lightbox-control lightbox-next"
                                aria-label="Next image"
                                onclick={pointer_handler(&dispatcher, PointerTarget::NextControl)}
                            >
                                {"›"}
                            </button>
                            <div
                                class="lightbox-image"
                                onclick={pointer_handler(&dispatcher, PointerTarget::Image)}
                            >
                                <img src={image.source} alt={image.alt_text} />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::LightboxError;

    #[test]
    fn every_openable_index_shows_an_image() {
        let len = GALLERY_IMAGES.len();
        for index in 0..len {
            let mut lightbox = initial_lightbox();
            lightbox.open_at(index).unwrap();
            let shown = lightbox
                .state()
                .current_index()
                .and_then(|i| GALLERY_IMAGES.get(i));
            assert_eq!(shown, Some(&GALLERY_IMAGES[index]));
        }

        let mut lightbox = initial_lightbox();
        assert_eq!(
            lightbox.open_at(len),
            Err(LightboxError::OutOfRange { index: len, len })
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_root() -> Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        root
    }

    // Lets the yew scheduler flush pending renders.
    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn shown_alt(root: &Element) -> Option<String> {
        root.query_selector(".lightbox-overlay .lightbox-image img")
            .unwrap()
            .and_then(|img| img.get_attribute("alt"))
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn clicks_route_through_overlay() {
        let root = mount_root();
        let handle = yew::Renderer::<Gallery>::with_root(root.clone()).render();
        settle().await;
        assert_eq!(shown_alt(&root), None);

        click(&root, ".gallery-item:nth-child(3)");
        settle().await;
        assert_eq!(shown_alt(&root).as_deref(), Some("Birthday celebration"));

        click(&root, ".lightbox-image");
        settle().await;
        assert_eq!(shown_alt(&root).as_deref(), Some("Birthday celebration"));

        click(&root, ".lightbox-next");
        settle().await;
        assert_eq!(shown_alt(&root).as_deref(), Some("Wedding ceremony setup"));

        click(&root, ".lightbox-prev");
        settle().await;
        assert_eq!(shown_alt(&root).as_deref(), Some("Birthday celebration"));

        click(&root, ".lightbox-overlay");
        settle().await;
        assert_eq!(shown_alt(&root), None);

        click(&root, ".gallery-item:nth-child(2)");
        settle().await;
        click(&root, ".lightbox-close");
        settle().await;
        assert_eq!(shown_alt(&root), None);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn arrow_keys_wrap_while_open() {
        let root = mount_root();
        let handle = yew::Renderer::<Gallery>::with_root(root.clone()).render();
        settle().await;

        press("ArrowRight");
        settle().await;
        assert_eq!(shown_alt(&root), None);

        click(&root, ".gallery-item:nth-child(1)");
        settle().await;
        press("ArrowLeft");
        settle().await;
        assert_eq!(shown_alt(&root).as_deref(), Some("Birthday celebration"));

        press("Escape");
        settle().await;
        assert_eq!(shown_alt(&root), None);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn key_listener_detaches_on_drop() {
        let calls = Rc::new(Cell::new(0u32));
        let listener = {
            let calls = calls.clone();
            listen_for_keys(move |_| calls.set(calls.get() + 1))
        };
        assert!(listener.is_some());

        press("ArrowRight");
        assert_eq!(calls.get(), 1);

        drop(listener);
        press("ArrowRight");
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn keys_after_unmount_touch_nothing() {
        let root = mount_root();
        let handle = yew::Renderer::<Gallery>::with_root(root.clone()).render();
        settle().await;
        click(&root, ".gallery-item:nth-child(1)");
        settle().await;
        assert!(shown_alt(&root).is_some());

        handle.destroy();
        settle().await;
        press("ArrowRight");
        press("Escape");
        settle().await;
        assert_eq!(shown_alt(&root), None);

        root.remove();
    }
}
