use contracts::site::config::SiteConfig;
use contracts::site::content::{
    Feature, FEATURES, HERO_BODY, HERO_CAPTION, HERO_EYEBROW, HERO_HEADLINE, HERO_IMAGE_ALT,
    HERO_PRIMARY_CTA, HERO_SECONDARY_CTA,
};
use leptos::prelude::*;

/// Home tab: hero with photo, then the feature grid
#[component]
pub fn HomePage() -> impl IntoView {
    let hero_image = use_context::<SiteConfig>()
        .unwrap_or_default()
        .hero_image;

    view! {
        <section class="hero">
            <div class="hero-copy">
                <span class="eyebrow">{HERO_EYEBROW}</span>
                <h2>{HERO_HEADLINE}</h2>
                <p>{HERO_BODY}</p>
                <div class="cta-group">
                    <button class="button primary" type="button">{HERO_PRIMARY_CTA}</button>
                    <button class="button ghost" type="button">{HERO_SECONDARY_CTA}</button>
                </div>
            </div>
            <figure class="hero-visual">
                <img src=hero_image alt=HERO_IMAGE_ALT />
                <figcaption>{HERO_CAPTION}</figcaption>
            </figure>
        </section>
        <section class="feature-grid">
            {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </article>
    }
}
