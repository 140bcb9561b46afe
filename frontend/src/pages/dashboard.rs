use crate::{
    components::layout::{Layout, LoadingSpinner},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, _set_session) = use_session();
    let loading = move || session.with(|s| s.loading);
    let greeting = move || {
        session.with(|s| match &s.user {
            Some(user) => format!("Bienvenido, {}", user.display_name()),
            None => "No hay una sesión activa".to_string(),
        })
    };

    view! {
        <Layout>
            <Show when=move || !loading() fallback=|| view! { <LoadingSpinner/> }>
                <h2 class="text-2xl font-semibold text-fg px-4">{greeting}</h2>
            </Show>
        </Layout>
    }
}
