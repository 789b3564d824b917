mod actions;
pub(crate) mod args;
pub(crate) mod http;
pub(crate) mod session;
pub(crate) mod store;

pub(crate) use actions::{
    handle_forgot_password, handle_login, handle_logout, handle_resend_code, handle_reset_password,
    handle_signup, handle_verify,
};
pub(crate) use session::Session;
