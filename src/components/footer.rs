//! Page footer with copyright and social links.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::style::{muted_class, use_theme};
use crate::profile::PROFILE;

/// Calendar year from the browser clock. `None` in native builds.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

pub fn copyright_line(year: Option<u32>, name: &str) -> String {
    match year {
        Some(year) => format!("\u{a9} {year} {name}"),
        None => format!("\u{a9} {name}"),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let copyright = copyright_line(current_year(), PROFILE.name);
    let class = move || muted_class(theme.get());

    view! {
        <footer class="footer">
            <div class=class>{copyright}</div>
            <div class="footer__socials">
                {PROFILE
                    .socials
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                class="footer__social"
                                href=link.href
                                target="_blank"
                                rel="noreferrer"
                                aria-label=link.label
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </footer>
    }
}
