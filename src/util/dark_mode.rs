//! Applies the active theme to the document root.
//!
//! Sets the `dark` class (consumed by the stylesheet's `.dark` selectors) and
//! a `data-theme` attribute on `<html>`. Persistence lives in
//! `state::theme`; this module only reflects the value into the DOM.
//!
//! TRADE-OFFS
//! ==========
//! DOM failures are logged and ignored. Native builds (tests) no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Reflect `theme` onto the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            log::warn!("no document root; theme {} not applied", theme.as_str());
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
            log::warn!("failed to toggle theme class: {err:?}");
        }
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to set data-theme: {err:?}");
        }
    }
}
