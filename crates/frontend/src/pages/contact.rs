use contracts::site::content::{ContactDetail, CONTACT_COPY, CONTACT_DETAILS, CONTACT_HEADING, CONTACT_NOTE};
use leptos::prelude::*;

/// Visit tab: practical details and booking notes
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact">
            <h2>{CONTACT_HEADING}</h2>
            <p>{CONTACT_COPY}</p>
            <div class="contact-grid">
                {CONTACT_DETAILS
                    .iter()
                    .map(|detail| view! { <DetailCard detail=*detail /> })
                    .collect_view()}
            </div>
            <p class="contact-note">{CONTACT_NOTE}</p>
        </section>
    }
}

#[component]
fn DetailCard(detail: ContactDetail) -> impl IntoView {
    view! {
        <article class="contact-card">
            <span class="label">{detail.label}</span>
            <p>{detail.value}</p>
        </article>
    }
}
