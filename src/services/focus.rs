use crate::models::Page;

/// Focus the body field with the caret after the last character, if the field
/// exists and holds text. Silent no-op otherwise. Runs once, at ready time.
pub fn focus_body(page: &mut Page, body_id: &str) -> bool {
    let length = match page.value_of(body_id) {
        Some(value) if !value.is_empty() => value.chars().count(),
        _ => return false,
    };
    page.set_focus(body_id, length);
    tracing::debug!("Focused #{} with caret at {}", body_id, length);
    true
}
