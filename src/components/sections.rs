//! Static profile sections: hero, about, skills, education, contact.

use leptos::prelude::*;

use crate::components::style::{accent_class, inline_link_class, use_theme, with_accent};
use crate::profile::PROFILE;

/// `<h3>` title shared by every section.
#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    let theme = use_theme();
    let class = move || with_accent("section__title", accent_class(theme.get()));
    view! { <h3 class=class>{text}</h3> }
}

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let class = move || with_accent("hero__title", accent_class(theme.get()));
    view! {
        <section class="hero">
            <h2 class=class>{format!("Hi, I'm {}", PROFILE.name)}</h2>
            <p class="hero__tagline">{PROFILE.tagline}</p>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <SectionTitle text="About Me"/>
            <p class="section__body">{PROFILE.about}</p>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <SectionTitle text="Skills"/>
            <div class="skills__grid">
                {PROFILE
                    .skills
                    .iter()
                    .map(|skill| view! { <div class="skills__item">{*skill}</div> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="section">
            <SectionTitle text="Education"/>
            <div class="education__list">
                {PROFILE
                    .education
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="education__item">
                                <div class="education__degree">{entry.degree}</div>
                                <div class="education__school">{entry.school}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let link_class = move || inline_link_class(theme.get());
    view! {
        <section id="contact" class="section">
            <SectionTitle text="Contact"/>
            <p>
                "Feel free to reach out via email: "
                <a href=PROFILE.mailto() class=link_class>
                    {PROFILE.email}
                </a>
            </p>
        </section>
    }
}
