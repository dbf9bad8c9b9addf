use leptos::Owner;

/// The owner of the component currently being built, for use in async tasks
/// that resume after an await.
pub fn current_owner(log_context: &str) -> Option<Owner> {
    let owner = Owner::current();
    if owner.is_none() {
        leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
    }
    owner
}

/// Runs `f` under `owner`. If the component has since been unmounted, logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(_) => {
                leptos::logging::log!("[OWNER] Owner disposed before update: {}", log_context);
                None
            }
        },
        None => Some(f()),
    }
}
