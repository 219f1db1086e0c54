use web_sys::window;

/// Set by the sign-in flow, which lives outside this app
const EMAIL_KEY: &str = "email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// E-mail of the signed-in user from localStorage; blank counts as absent
pub fn get_email() -> Option<String> {
    get_local_storage()?
        .get_item(EMAIL_KEY)
        .ok()?
        .filter(|email| !email.trim().is_empty())
}
