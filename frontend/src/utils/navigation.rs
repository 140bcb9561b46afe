use super::storage;

/// Full-page navigation, matching how the rest of the app leaves a view.
pub fn redirect_to(path: &str) {
    match storage::window() {
        Ok(window) => {
            log::info!("Navigating to {}", path);
            if window.location().set_href(path).is_err() {
                log::error!("Failed to navigate to {}", path);
            }
        }
        Err(err) => log::warn!("Cannot navigate to {}: {}", path, err),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn redirect_without_window_is_a_no_op() {
        redirect_to(crate::paths::SIGN_IN_CLIENT);
    }
}
