//! Theme persistence and application.
//!
//! The flag is read from local storage once at startup and written back on
//! every toggle. Dark is the default; the light theme is a single class on
//! the document body that the stylesheet keys off.

use folio_core::theme::{LIGHT_CLASS, STORAGE_KEY, Theme};

/// Read the stored theme, falling back to dark when storage is missing or
/// holds something unrecognized.
pub fn load() -> Theme {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Persist the choice. Storage failures (private windows, full quotas) just
/// mean the choice does not stick.
pub fn store(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Reflect the theme on the document body.
pub fn apply(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let class_list = body.class_list();
    if theme.is_light() {
        let _ = class_list.add_1(LIGHT_CLASS);
    } else {
        let _ = class_list.remove_1(LIGHT_CLASS);
    }
}
