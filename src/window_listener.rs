use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no window available")]
    NoWindow,
    #[error("failed to add {event_type} listener: {reason}")]
    Register {
        event_type: &'static str,
        reason: String,
    },
}

/// A listener attached to `window` for as long as this value lives.
///
/// Dropping it removes the listener, so returning it from an effect's
/// teardown ties the subscription to the component's mount period.
pub struct WindowListener {
    window: Window,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event_type: &'static str, callback: F) -> Result<Self, ListenerError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|e| ListenerError::Register {
                event_type,
                reason: format!("{:?}", e),
            })?;

        log::debug!("Attached window {} listener", event_type);
        Ok(Self {
            window,
            event_type,
            callback,
        })
    }

    /// Logs instead of failing so callers can keep rendering without the listener.
    pub fn attach_or_log<F>(event_type: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        match Self::new(event_type, callback) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!("Failed to remove {} listener: {:?}", self.event_type, e);
        } else {
            log::debug!("Detached window {} listener", self.event_type);
        }
    }
}
