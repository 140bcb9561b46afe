use gloo_timers::callback::Timeout;
use leptos::*;

pub const AUTO_HIDE_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn classes(&self) -> &'static str {
        match self {
            Severity::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            Severity::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }
}

/// Single-slot message; a new one replaces the previous instead of queueing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

/// Id of the notification that should be hidden after [`AUTO_HIDE_MS`].
pub fn auto_hide_target(notification: Option<&Notification>) -> Option<u64> {
    notification.filter(|n| n.visible).map(|n| n.id)
}

/// Schedules `on_dismiss` for whichever notification is visible. Replacing
/// the stored timeout drops (and cancels) the previous one, so only the
/// newest notification schedules a hide.
pub fn use_auto_hide(notification: Signal<Option<Notification>>, on_dismiss: Callback<u64>) {
    let visible_id = create_memo(move |_| notification.with(|n| auto_hide_target(n.as_ref())));

    let auto_hide = store_value(None::<Timeout>);
    create_effect(move |_| {
        let timer = visible_id.get().map(|id| {
            Timeout::new(AUTO_HIDE_MS, move || {
                on_dismiss.call(id);
            })
        });
        auto_hide.set_value(timer);
    });
    on_cleanup(move || {
        auto_hide.try_update_value(|timer| {
            timer.take();
        });
    });
}

#[component]
pub fn Toast(
    #[prop(into)] notification: Signal<Option<Notification>>,
    #[prop(into)] on_dismiss: Callback<u64>,
) -> impl IntoView {
    use_auto_hide(notification, on_dismiss);

    view! {
        {move || {
            notification
                .get()
                .filter(|n| n.visible)
                .map(|n| {
                    let id = n.id;
                    view! {
                        <div
                            role="alert"
                            class="fixed bottom-4 left-4 z-50 max-w-sm w-full"
                        >
                            <div class=format!(
                                "flex items-start gap-3 border px-4 py-3 rounded shadow-lg {}",
                                n.severity.classes(),
                            )>
                                <i class=format!("fas {} mt-0.5", n.severity.icon())></i>
                                <p class="flex-1 text-sm">{n.message}</p>
                                <button
                                    type="button"
                                    class="text-sm opacity-75 hover:opacity-100"
                                    aria-label="Cerrar"
                                    on:click=move |_| on_dismiss.call(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn notification(severity: Severity, visible: bool) -> Notification {
        Notification {
            id: 1,
            message: "Código enviado".into(),
            severity,
            visible,
        }
    }

    #[test]
    fn toast_renders_visible_notification_with_severity() {
        let html = render_to_string(move || {
            let state = create_rw_signal(Some(notification(Severity::Error, true)));
            view! { <Toast notification=state on_dismiss=move |_: u64| {} /> }
        });
        assert!(html.contains("Código enviado"));
        assert!(html.contains("bg-status-error-bg"));
    }

    #[test]
    fn toast_hides_dismissed_notification() {
        let html = render_to_string(move || {
            let state = create_rw_signal(Some(notification(Severity::Success, false)));
            view! { <Toast notification=state on_dismiss=move |_: u64| {} /> }
        });
        assert!(!html.contains("Código enviado"));
    }

    #[test]
    fn only_visible_notifications_schedule_a_hide() {
        assert_eq!(auto_hide_target(None), None);
        assert_eq!(
            auto_hide_target(Some(&notification(Severity::Success, true))),
            Some(1)
        );
        assert_eq!(
            auto_hide_target(Some(&notification(Severity::Error, false))),
            None
        );
        assert_eq!(AUTO_HIDE_MS, 4000);
    }

    #[test]
    fn severity_classes_differ() {
        assert_ne!(Severity::Success.classes(), Severity::Error.classes());
        assert!(Severity::Success.classes().contains("success"));
    }
}
