use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{dashboard::DashboardPage, reset_password::ResetPasswordPage},
    paths,
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[paths::RESET_PASSWORD, paths::DASHBOARD];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="Condado"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=paths::RESET_PASSWORD view=ResetPasswordPage/>
                    <Route path=paths::DASHBOARD view=DashboardPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
