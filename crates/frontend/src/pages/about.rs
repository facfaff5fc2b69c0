use contracts::site::content::{ABOUT_HEADING, ABOUT_INTRO, VALUES};
use leptos::prelude::*;

/// About tab: brand story and core values
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h2>{ABOUT_HEADING}</h2>
            <p>{ABOUT_INTRO}</p>
            <ul class="values-list">
                {VALUES
                    .iter()
                    .map(|value| {
                        view! {
                            <li class="values-item">
                                <h3>{value.title}</h3>
                                <p>{value.detail}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
