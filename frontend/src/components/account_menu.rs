use crate::{
    api::SessionUser,
    components::common::{Button, ButtonVariant},
    paths,
    state::session::{use_session, use_sign_out_action},
};
use leptos::*;

/// Role ids whose accounts have no profile page.
const ROLES_WITHOUT_PROFILE: [i64; 2] = [1, 3];

pub fn profile_link_visible(user: Option<&SessionUser>) -> bool {
    !matches!(
        user.and_then(|u| u.role_id),
        Some(role_id) if ROLES_WITHOUT_PROFILE.contains(&role_id)
    )
}

#[component]
pub fn AccountMenu(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (session, _set_session) = use_session();
    let user = create_memo(move |_| session.with(|s| s.user.clone()));
    let sign_out_action = use_sign_out_action();
    let signing_out = sign_out_action.pending();

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        sign_out_action.dispatch(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40" aria-hidden="true" on:click=move |_| on_close.call(())></div>
            <div
                id="account-menu"
                role="menu"
                class="absolute right-0 top-full mt-2 z-50 w-60 rounded-md border border-border bg-surface-elevated shadow-lg"
            >
                {move || {
                    user.get()
                        .map(|u| {
                            let name = u.display_name();
                            view! {
                                <div class="px-4 py-3">
                                    <p class="text-sm font-semibold text-fg">{name}</p>
                                    <p class="text-sm text-fg-muted truncate">{u.email}</p>
                                </div>
                                <div class="border-t border-border"></div>
                            }
                        })
                }}
                <div class="p-1">
                    <Show when=move || user.with(|u| profile_link_visible(u.as_ref()))>
                        <a
                            href=paths::ACCOUNT
                            role="menuitem"
                            class="flex items-center gap-2 px-3 py-2 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| on_close.call(())
                        >
                            <i class="fas fa-user"></i>
                            "Perfil"
                        </a>
                    </Show>
                </div>
                <div class="border-t border-border"></div>
                <div class="p-1">
                    <Button
                        variant=ButtonVariant::MenuItem
                        loading=signing_out
                        on:click=on_sign_out
                    >
                        <i class="fas fa-sign-out-alt mr-2"></i>
                        "Cerrar Sesión"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
