#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::SessionUser;
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn session_user(role_id: Option<i64>) -> SessionUser {
        SessionUser {
            name: "Ana".into(),
            surname: "Pérez".into(),
            email: "ana@condado.ec".into(),
            role_id,
        }
    }

    pub fn provide_session(user: Option<SessionUser>) -> SessionContext {
        let ctx = create_signal(SessionState {
            user,
            loading: false,
        });
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
