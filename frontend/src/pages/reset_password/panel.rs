use super::flow::ResendControl;
use super::view_model::{use_reset_password_view_model, ResetPasswordViewModel};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        toast::Toast,
    },
    paths,
    utils::navigation,
};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm";

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordForm vm=vm /> }
}

#[component]
pub fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let fields = vm.fields;
    let flow = vm.flow;
    let submit_action = vm.submit_action;

    let pending = create_memo(move |_| flow.with(|f| f.pending));
    let code_sent = create_memo(move |_| flow.with(|f| f.is_code_sent()));
    let email_error = create_memo(move |_| flow.with(|f| f.field_errors.email.clone()));
    let document_error = create_memo(move |_| flow.with(|f| f.field_errors.document.clone()));
    let notification = Signal::derive(move || flow.with(|f| f.notification.clone()));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Recuperar contraseña"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {move || {
                            if code_sent.get() {
                                "Ingresa el código que recibiste y tu nueva contraseña."
                            } else {
                                "Te enviaremos un código de verificación a tu correo."
                            }
                        }}
                    </p>
                </div>

                <form
                    class="mt-8 space-y-6"
                    novalidate
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit_action.dispatch(());
                    }
                >
                    <div class="space-y-4">
                        <FieldInput
                            id="reset-email"
                            label="Correo electrónico"
                            input_type="email"
                            autocomplete="email"
                            value=fields.email
                            error=email_error
                        />
                        <FieldInput
                            id="reset-document"
                            label="Documento de identidad"
                            input_type="text"
                            autocomplete="off"
                            value=fields.document
                            error=document_error
                        />
                        <Show when=move || code_sent.get()>
                            <FieldInput
                                id="reset-code"
                                label="Código"
                                input_type="text"
                                autocomplete="one-time-code"
                                value=fields.code
                            />
                            <FieldInput
                                id="reset-new-password"
                                label="Nueva contraseña"
                                input_type="password"
                                autocomplete="new-password"
                                value=fields.new_password
                            />
                            <ResendCodeControl vm=vm />
                        </Show>
                    </div>

                    <div class="space-y-3">
                        <Button variant=ButtonVariant::Primary submit=true loading=pending>
                            {move || flow.with(|f| f.submit_label())}
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| navigation::redirect_to(paths::SIGN_IN_CLIENT)
                        >
                            "Cancelar"
                        </Button>
                    </div>
                </form>
            </div>
            <Toast notification=notification on_dismiss=vm.dismiss_notification />
        </div>
    }
}

#[component]
fn FieldInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg mb-1">
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class=INPUT_CLASS
                placeholder=label
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|msg| view! { <p class="mt-1 text-sm text-status-error-text">{msg}</p> })
            }}
        </div>
    }
}

/// Shown only after the backend reported an invalid or expired code:
/// a countdown while the cooldown runs, then the resend button.
#[component]
fn ResendCodeControl(vm: ResetPasswordViewModel) -> impl IntoView {
    let flow = vm.flow;
    let resend_action = vm.resend_action;
    let resend = create_memo(move |_| flow.with(|f| f.resend));
    let pending = create_memo(move |_| flow.with(|f| f.pending));

    view! {
        <div class="text-sm">
            {move || match resend.get().control() {
                ResendControl::Hidden => ().into_view(),
                ResendControl::Countdown { remaining, progress_percent } => {
                    view! {
                        <div class="space-y-1">
                            <div
                                class="w-full h-1.5 rounded bg-border overflow-hidden"
                                role="progressbar"
                                aria-valuemin="0"
                                aria-valuemax="100"
                                aria-valuenow=progress_percent.to_string()
                            >
                                <div
                                    class="h-full bg-action-primary-bg"
                                    style=format!("width: {}%", progress_percent)
                                ></div>
                            </div>
                            <p class="text-fg-muted">
                                {format!("Reenviar en {} segundos", remaining)}
                            </p>
                        </div>
                    }
                        .into_view()
                }
                ResendControl::Available => {
                    view! {
                        <button
                            type="button"
                            class="font-medium text-link hover:text-link-hover disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| resend_action.dispatch(())
                        >
                            "Reenviar código"
                        </button>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::MessageResponse;
    use crate::components::toast::Severity;
    use crate::pages::reset_password::flow::{FieldErrors, FlowPhase};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_starts_with_code_request_fields() {
        let html = render_to_string(move || view! { <ResetPasswordPanel /> });
        assert!(html.contains("Recuperar contraseña"));
        assert!(html.contains("Correo electrónico"));
        assert!(html.contains("Documento de identidad"));
        assert!(html.contains("Enviar código"));
        assert!(html.contains("Cancelar"));
        assert!(!html.contains("Nueva contraseña"));
        assert!(!html.contains("Reenviar"));
    }

    #[test]
    fn confirmation_phase_shows_code_inputs_without_resend() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| {
                f.finish_code_request(Ok(MessageResponse::default()));
                f.tick();
            });
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Código"));
        assert!(html.contains("Nueva contraseña"));
        assert!(html.contains("Cambiar contraseña"));
        assert!(!html.contains("Reenviar"));
        assert!(!html.contains("progressbar"));
    }

    #[test]
    fn rejected_code_shows_countdown_while_cooling_down() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| {
                f.finish_code_request(Ok(MessageResponse::default()));
                f.tick();
                f.resend.eligible = true;
            });
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Reenviar en 59 segundos"));
        assert!(html.contains("progressbar"));
        assert!(!html.contains("Reenviar código"));
    }

    #[test]
    fn successful_resend_hides_resend_control_during_new_cooldown() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| {
                f.phase = FlowPhase::AwaitingConfirmation;
                f.resend.eligible = true;
                f.finish_resend(Ok(MessageResponse::default()));
            });
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Código reenviado"));
        assert!(!html.contains("Reenviar"));
    }

    #[test]
    fn resend_button_appears_after_cooldown_when_eligible() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| {
                f.phase = FlowPhase::AwaitingConfirmation;
                f.resend.eligible = true;
            });
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Reenviar código"));
        assert!(!html.contains("segundos"));
    }

    #[test]
    fn field_errors_and_notification_render() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| {
                f.field_errors = FieldErrors {
                    email: Some("Correo inválido".into()),
                    document: None,
                };
                f.notify(Severity::Error, "Error al enviar el código");
            });
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Correo inválido"));
        assert!(html.contains("Error al enviar el código"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn submit_button_is_disabled_while_pending() {
        let html = render_to_string(move || {
            let vm = use_reset_password_view_model();
            vm.flow.update(|f| f.pending = true);
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("disabled"));
    }
}
