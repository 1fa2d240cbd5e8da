use crate::models::Page;

/// Force block display on every wrapper element of the given class that
/// contains a descendant with the given id. Wrappers without that descendant
/// (e.g. tags-input fields sharing the class) are left alone. Returns how
/// many wrappers were adjusted.
pub fn fix_display(page: &mut Page, wrapper_class: &str, image_id: &str) -> usize {
    let mut fixed = 0;
    page.for_each_class_mut(wrapper_class, |element| {
        if element.has_descendant_id(image_id) {
            element.display = Some("block".to_string());
            fixed += 1;
        }
    });
    if fixed > 0 {
        tracing::debug!("Set display: block on {} {} wrapper(s)", fixed, wrapper_class);
    }
    fixed
}
