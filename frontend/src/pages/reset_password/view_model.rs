use super::flow::{ResetFlow, ResetForm, Submission, TickerCommand, REDIRECT_DELAY_MS};
use super::repository::ResetPasswordRepository;
use crate::{api::ApiClient, paths, utils::navigation};
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use std::rc::Rc;

const COOLDOWN_TICK_MS: u32 = 1000;

#[derive(Clone, Copy)]
pub struct ResetFormState {
    pub email: RwSignal<String>,
    pub document: RwSignal<String>,
    pub code: RwSignal<String>,
    pub new_password: RwSignal<String>,
}

impl ResetFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            document: create_rw_signal(String::new()),
            code: create_rw_signal(String::new()),
            new_password: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> ResetForm {
        ResetForm {
            email: self.email.get_untracked(),
            document: self.document.get_untracked(),
            code: self.code.get_untracked(),
            new_password: self.new_password.get_untracked(),
        }
    }

    pub fn clear_confirmation(&self) {
        self.code.set(String::new());
        self.new_password.set(String::new());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Skipped,
    CodeSent,
    CodeRequestFailed,
    PasswordChanged { redirect: bool },
    PasswordChangeFailed,
}

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub fields: ResetFormState,
    pub flow: RwSignal<ResetFlow>,
    pub submit_action: Action<(), SubmitOutcome>,
    pub resend_action: Action<(), bool>,
    pub dismiss_notification: Callback<u64>,
}

pub async fn submit_reset(
    repo: &ResetPasswordRepository,
    flow: RwSignal<ResetFlow>,
    form: ResetForm,
) -> SubmitOutcome {
    let Some(submission) = flow.try_update(|f| f.begin_submit(&form)).flatten() else {
        return SubmitOutcome::Skipped;
    };

    match submission {
        Submission::RequestCode(request) => {
            let result = repo.request_code(&request).await;
            let sent = result.is_ok();
            flow.try_update(|f| f.finish_code_request(result));
            if sent {
                SubmitOutcome::CodeSent
            } else {
                SubmitOutcome::CodeRequestFailed
            }
        }
        Submission::Confirm(request) => {
            let result = repo.confirm(&request).await;
            let changed = result.is_ok();
            let redirect = flow
                .try_update(|f| f.finish_confirmation(result))
                .unwrap_or(false);
            if changed {
                SubmitOutcome::PasswordChanged { redirect }
            } else {
                SubmitOutcome::PasswordChangeFailed
            }
        }
    }
}

/// Requests a fresh code. Returns `true` when the code was re-sent and the
/// confirmation inputs were cleared.
pub async fn resend_code(
    repo: &ResetPasswordRepository,
    flow: RwSignal<ResetFlow>,
    fields: ResetFormState,
) -> bool {
    let form = fields.snapshot();
    let Some(request) = flow.try_update(|f| f.begin_resend(&form)).flatten() else {
        return false;
    };

    let result = repo.request_code(&request).await;
    let resent = flow
        .try_update(|f| f.finish_resend(result))
        .unwrap_or(false);
    if resent {
        fields.clear_confirmation();
    }
    resent
}

/// Where to go once the password changed. Only the first success yields a
/// target, so navigation is scheduled at most once.
pub fn redirect_target(outcome: Option<SubmitOutcome>) -> Option<&'static str> {
    matches!(outcome, Some(SubmitOutcome::PasswordChanged { redirect: true }))
        .then_some(paths::SIGN_IN_CLIENT)
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));

    let fields = ResetFormState::new();
    let flow = create_rw_signal(ResetFlow::new());

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |_: &()| {
        let repo = repo_for_submit.clone();
        let form = fields.snapshot();
        async move { submit_reset(&repo, flow, form).await }
    });

    let repo_for_resend = repository;
    let resend_action = create_action(move |_: &()| {
        let repo = repo_for_resend.clone();
        async move { resend_code(&repo, flow, fields).await }
    });

    let redirect_timer = store_value(None::<Timeout>);
    create_effect(move |_| {
        if let Some(target) = redirect_target(submit_action.value().get()) {
            redirect_timer.set_value(Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                navigation::redirect_to(target);
            })));
        }
    });

    // The interval only exists while the countdown runs; dropping it cancels it.
    let cooldown_ticker = store_value(None::<Interval>);
    let resend_state = create_memo(move |_| flow.with(|f| f.resend));
    create_effect(move |_| {
        let running = cooldown_ticker.with_value(Option::is_some);
        match resend_state.get().ticker_command(running) {
            TickerCommand::Start => {
                cooldown_ticker.set_value(Some(Interval::new(COOLDOWN_TICK_MS, move || {
                    flow.try_update(|f| f.tick());
                })));
            }
            TickerCommand::Stop => cooldown_ticker.set_value(None),
            TickerCommand::Keep => {}
        }
    });

    on_cleanup(move || {
        redirect_timer.try_update_value(|timer| {
            timer.take();
        });
        cooldown_ticker.try_update_value(|ticker| {
            ticker.take();
        });
    });

    let dismiss_notification = Callback::new(move |id: u64| {
        flow.try_update(|f| f.dismiss_notification(id));
    });

    ResetPasswordViewModel {
        fields,
        flow,
        submit_action,
        resend_action,
        dismiss_notification,
    }
}
