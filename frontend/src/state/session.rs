use crate::{
    api::{ApiClient, ApiError, SessionUser},
    paths,
    utils::navigation,
};
use leptos::*;

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState {
        user: None,
        loading: true,
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        check_session(&api_client, set_session).await;
    });

    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Reloads the current user; any failure leaves the session signed out.
pub async fn check_session(api_client: &ApiClient, set_session: WriteSignal<SessionState>) {
    set_session.update(|state| state.loading = true);
    let result = api_client.get_session().await;
    if let Err(err) = &result {
        log::debug!("No active session: {}", err);
    }
    set_session.update(|state| {
        state.user = result.ok();
        state.loading = false;
    });
}

/// Staff accounts carry a role id; clients sign in through their own page.
pub fn sign_out_destination(user: Option<&SessionUser>) -> &'static str {
    match user.and_then(|u| u.role_id) {
        Some(role_id) if role_id != 0 => paths::SIGN_IN,
        _ => paths::SIGN_IN_CLIENT,
    }
}

/// Signs out and refreshes the session. Failures are logged and returned
/// without touching the session.
pub async fn sign_out(
    api_client: &ApiClient,
    session: SessionContext,
) -> Result<&'static str, ApiError> {
    let (state, set_state) = session;
    let destination = state.with_untracked(|s| sign_out_destination(s.user.as_ref()));

    if let Err(err) = api_client.sign_out().await {
        log::error!("Sign out error: {}", err);
        return Err(err);
    }

    check_session(api_client, set_state).await;
    Ok(destination)
}

pub fn use_sign_out_action() -> Action<(), Result<&'static str, ApiError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move {
            let destination = sign_out(&api, session).await?;
            navigation::redirect_to(destination);
            Ok(destination)
        }
    })
}
