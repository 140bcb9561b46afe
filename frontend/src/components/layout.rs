use crate::{components::account_menu::AccountMenu, paths, state::session::use_session};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let initials = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default()
        })
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=paths::DASHBOARD class="text-xl font-semibold text-fg">
                        "Condado"
                    </a>
                    <div class="relative">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center h-10 w-10 rounded-full bg-action-ghost-bg-hover text-fg font-semibold"
                            on:click=toggle_menu
                            aria-haspopup="menu"
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="account-menu"
                        >
                            <span class="sr-only">"Cuenta"</span>
                            {initials}
                        </button>
                        <AccountMenu open=menu_open on_close=close_menu />
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
