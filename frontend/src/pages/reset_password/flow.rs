//! Two-step password recovery: request a verification code, then confirm it
//! together with the new password.
//!
//! [`ResetFlow`] holds every piece of state the form reacts to and is driven
//! through `begin_*`/`finish_*` pairs around each network call, so the rules
//! below can be exercised without a browser:
//!
//! * a successful code request moves the flow to
//!   [`FlowPhase::AwaitingConfirmation`] and starts a 60 second resend cooldown;
//! * only one request runs at a time (`pending`);
//! * a confirmation failure whose message mentions an invalid or expired code
//!   makes the resend control available once the cooldown has run out.

use crate::api::{ApiError, ChangePasswordRequest, MessageResponse, VerificationCodeRequest};
use crate::components::toast::{Notification, Severity};
use validator::{Validate, ValidationError, ValidationErrors};

pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const REDIRECT_DELAY_MS: u32 = 2000;

pub const MSG_CODE_SENT: &str = "Correo enviado correctamente";
pub const MSG_CODE_REQUEST_FAILED: &str = "Error al enviar el código";
pub const MSG_PASSWORD_CHANGED: &str = "Contraseña actualizada";
pub const MSG_PASSWORD_CHANGE_FAILED: &str = "Error al cambiar la contraseña";
pub const MSG_CODE_RESENT: &str = "Código reenviado";
pub const MSG_CODE_RESEND_FAILED: &str = "Error al reenviar el código";
pub const MSG_CONFIRMATION_REQUIRED: &str = "Debes ingresar el código y la nueva contraseña";

const INVALID_CODE_MARKERS: [&str; 5] = ["inválido", "invalido", "expirado", "invalid", "expired"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    AwaitingCodeRequest,
    AwaitingConfirmation,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ResetForm {
    #[validate(email(message = "Correo inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Documento es requerido"))]
    pub document: String,
    pub code: String,
    pub new_password: String,
}

impl ResetForm {
    fn code_request(&self) -> VerificationCodeRequest {
        VerificationCodeRequest {
            email: self.email.clone(),
            document: self.document.clone(),
        }
    }

    fn change_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            email: self.email.clone(),
            document: self.document.clone(),
            code: self.code.clone(),
            new_password: self.new_password.clone(),
        }
    }
}

/// Inline messages shown under the e-mail and document inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub document: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.document.is_none()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            let name: &str = field.as_ref();
            let message = first_message(errs);
            match name {
                "email" => fields.email = message,
                "document" => fields.document = message,
                _ => {}
            }
        }
        fields
    }
}

fn first_message(errs: &[ValidationError]) -> Option<String> {
    errs.first().map(|err| {
        err.message
            .as_ref()
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| err.code.to_string())
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendState {
    pub eligible: bool,
    pub cooldown_remaining: u32,
}

impl ResendState {
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_remaining > 0
    }

    pub fn can_resend(&self) -> bool {
        self.eligible && self.cooldown_remaining == 0
    }

    pub fn restart_cooldown(&mut self) {
        self.cooldown_remaining = RESEND_COOLDOWN_SECS;
    }

    /// One second elapsed. Returns whether the countdown is still running.
    pub fn tick(&mut self) -> bool {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
        self.is_cooling_down()
    }

    pub fn progress_percent(&self) -> u32 {
        let elapsed = RESEND_COOLDOWN_SECS.saturating_sub(self.cooldown_remaining);
        elapsed * 100 / RESEND_COOLDOWN_SECS
    }

    pub fn control(&self) -> ResendControl {
        if !self.eligible {
            ResendControl::Hidden
        } else if self.is_cooling_down() {
            ResendControl::Countdown {
                remaining: self.cooldown_remaining,
                progress_percent: self.progress_percent(),
            }
        } else {
            ResendControl::Available
        }
    }

    /// The ticker runs exactly while the cooldown is above zero.
    pub fn ticker_command(&self, ticker_running: bool) -> TickerCommand {
        match (self.is_cooling_down(), ticker_running) {
            (true, false) => TickerCommand::Start,
            (false, true) => TickerCommand::Stop,
            _ => TickerCommand::Keep,
        }
    }
}

/// What the resend area shows. Nothing is shown until the backend has
/// rejected a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResendControl {
    Hidden,
    Countdown { remaining: u32, progress_percent: u32 },
    Available,
}

/// How the once-per-second cooldown ticker should change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerCommand {
    Start,
    Stop,
    Keep,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    RequestCode(VerificationCodeRequest),
    Confirm(ChangePasswordRequest),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetFlow {
    pub phase: FlowPhase,
    pub pending: bool,
    pub resend: ResendState,
    pub field_errors: FieldErrors,
    pub notification: Option<Notification>,
    next_notification_id: u64,
    redirect_scheduled: bool,
}

impl ResetFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_code_sent(&self) -> bool {
        self.phase == FlowPhase::AwaitingConfirmation
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FlowPhase::AwaitingCodeRequest => "Enviar código",
            FlowPhase::AwaitingConfirmation => "Cambiar contraseña",
        }
    }

    /// Validates `form` for the current phase and, when a request should go
    /// out, marks the flow pending and returns it.
    pub fn begin_submit(&mut self, form: &ResetForm) -> Option<Submission> {
        if self.pending {
            log::debug!("Ignoring submit while a request is in flight");
            return None;
        }

        self.field_errors = match form.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(errors),
        };
        if !self.field_errors.is_empty() {
            return None;
        }

        let submission = match self.phase {
            FlowPhase::AwaitingCodeRequest => Submission::RequestCode(form.code_request()),
            FlowPhase::AwaitingConfirmation => {
                if form.code.is_empty() || form.new_password.is_empty() {
                    self.notify(Severity::Error, MSG_CONFIRMATION_REQUIRED);
                    return None;
                }
                Submission::Confirm(form.change_request())
            }
        };
        self.pending = true;
        Some(submission)
    }

    pub fn finish_code_request(&mut self, result: Result<MessageResponse, ApiError>) {
        self.pending = false;
        match result {
            Ok(response) => {
                self.notify(Severity::Success, response.message_or(MSG_CODE_SENT));
                self.phase = FlowPhase::AwaitingConfirmation;
                self.resend.restart_cooldown();
            }
            Err(err) => {
                self.notify(Severity::Error, err.message_or(MSG_CODE_REQUEST_FAILED));
            }
        }
    }

    /// Returns `true` the first time a confirmation succeeds; the caller then
    /// navigates to sign-in after [`REDIRECT_DELAY_MS`].
    pub fn finish_confirmation(&mut self, result: Result<MessageResponse, ApiError>) -> bool {
        self.pending = false;
        match result {
            Ok(response) => {
                self.notify(Severity::Success, response.message_or(MSG_PASSWORD_CHANGED));
                !std::mem::replace(&mut self.redirect_scheduled, true)
            }
            Err(err) => {
                let message = err.message_or(MSG_PASSWORD_CHANGE_FAILED);
                if indicates_invalid_or_expired_code(&message) {
                    self.resend.eligible = true;
                }
                self.notify(Severity::Error, message);
                false
            }
        }
    }

    pub fn begin_resend(&mut self, form: &ResetForm) -> Option<VerificationCodeRequest> {
        if self.pending || !self.is_code_sent() || !self.resend.can_resend() {
            log::debug!("Resend not available: {:?}", self.resend);
            return None;
        }
        self.pending = true;
        Some(form.code_request())
    }

    /// Returns `true` when the code and password inputs must be cleared.
    pub fn finish_resend(&mut self, result: Result<MessageResponse, ApiError>) -> bool {
        self.pending = false;
        match result {
            Ok(response) => {
                self.notify(Severity::Success, response.message_or(MSG_CODE_RESENT));
                self.resend.eligible = false;
                self.resend.restart_cooldown();
                true
            }
            Err(err) => {
                self.notify(Severity::Error, err.message_or(MSG_CODE_RESEND_FAILED));
                false
            }
        }
    }

    pub fn tick(&mut self) -> bool {
        self.resend.tick()
    }

    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.next_notification_id += 1;
        self.notification = Some(Notification {
            id: self.next_notification_id,
            message: message.into(),
            severity,
            visible: true,
        });
    }

    /// Hides the notification with `id`; a newer notification stays visible.
    pub fn dismiss_notification(&mut self, id: u64) {
        if let Some(notification) = self.notification.as_mut().filter(|n| n.id == id) {
            notification.visible = false;
        }
    }
}

/// The backend signals a bad code only through its message text.
pub fn indicates_invalid_or_expired_code(message: &str) -> bool {
    let lowered = message.to_lowercase();
    INVALID_CODE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
