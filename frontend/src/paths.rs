//! Navigation targets used by the recovery form and the account menu.

pub const SIGN_IN: &str = "/auth/sign-in";
pub const SIGN_IN_CLIENT: &str = "/auth/sign-in-client";
pub const RESET_PASSWORD: &str = "/auth/reset-password";
pub const DASHBOARD: &str = "/dashboard";
pub const ACCOUNT: &str = "/dashboard/account";
