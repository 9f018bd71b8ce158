use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    /// Distinguishes repeated toasts with the same text so each one restarts the timer.
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    on_dismiss.emit(());
                });
                // Dropping a pending Timeout cancels it.
                move || drop(timeout)
            },
            props.message.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match props.message.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        max-width: 360px;
                        padding: 14px 20px;
                        border-radius: 12px;
                        font-size: 0.95rem;
                        color: #fff;
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.25);
                        cursor: pointer;
                        z-index: 1100;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-success { background: #1f7a4d; }
                    .toast-error { background: #b3261e; }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class={classes!("toast", kind_class)} role="status" {onclick}>
                {&props.message.text}
            </div>
        </>
    }
}
