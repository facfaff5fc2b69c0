//! Static page copy. Rendered once at startup, never mutated.

/// Card in the home page feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Entry of the about page values list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Labelled card in the visit page contact grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

// ============================================================================
// Brand
// ============================================================================

pub const BRAND_NAME: &str = "Beary’s Breakfast Bar";
pub const BRAND_TAGLINE: &str = "Woodland-inspired breakfasts, plated with modern finesse";

// ============================================================================
// Home
// ============================================================================

pub const HERO_EYEBROW: &str = "Breakfast, perfected";
pub const HERO_HEADLINE: &str = "Slow mornings, warm plates, thoughtful hospitality";
pub const HERO_BODY: &str = "Our menu is anchored in seasonal berries, house-churned butter, and porridge simmered to silk. Find your rhythm, linger longer, and savor the calm.";
pub const HERO_PRIMARY_CTA: &str = "Reserve a table";
pub const HERO_SECONDARY_CTA: &str = "View seasonal menu";
pub const HERO_IMAGE_ALT: &str = "Plated breakfast featuring porridge, berries, and warm bread";
pub const HERO_CAPTION: &str = "Signature birchwood board with honeycomb, caramelized oats, and wild berry compote.";

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Wildcrafted ingredients",
        description: "We gather local honey, orchard fruit, and stone-milled grains each morning before the doors open.",
    },
    Feature {
        title: "Mindful dining pace",
        description: "Low-lit booths, curated playlists, and service choreographed to match the rhythm of your morning.",
    },
    Feature {
        title: "Seasonal chef tastings",
        description: "Rotating five-course breakfast flights showcasing the brilliance of our farm partners.",
    },
];

// ============================================================================
// About
// ============================================================================

pub const ABOUT_HEADING: &str = "Rooted in forest tradition";
pub const ABOUT_INTRO: &str = "Beary’s Breakfast Bar began as a woodland pop-up by pastry chef Mara Ellison. Today, it remains a tribute to slow mornings, rustic craft, and the flavors that flourish under a canopy of pines.";

pub const VALUES: &[Value] = &[
    Value {
        title: "Sustainable sourcing",
        detail: "We partner with heritage grain mills, regenerative farms, and foragers who steward the land.",
    },
    Value {
        title: "Community table",
        detail: "Monthly workshops invite guests to learn preserve making, oat roasting, and woodland pairing rituals.",
    },
    Value {
        title: "Thoughtful rituals",
        detail: "Every service begins with a tasting pour of spruce tip tea to ground your senses.",
    },
];

// ============================================================================
// Visit
// ============================================================================

pub const CONTACT_HEADING: &str = "Visit the den";
pub const CONTACT_COPY: &str = "Nestled along Alder Lane, our breakfast den opens its doors daily from 7:30 to 2:00. Reservations are recommended for weekend tastings.";
pub const CONTACT_NOTE: &str = "Private gatherings, pastry classes, and chef’s table bookings are available with advance notice.";

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Address",
        value: "112 Alder Lane, Riverford, OR 97201",
    },
    ContactDetail {
        label: "Phone",
        value: "(503) 555-0126",
    },
    ContactDetail {
        label: "Email",
        value: "hello@bearybreakfast.com",
    },
    ContactDetail {
        label: "Hours",
        value: "Daily 7:30 AM – 2:00 PM",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_shape() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(VALUES.len(), 3);
        let labels: Vec<_> = CONTACT_DETAILS.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Address", "Phone", "Email", "Hours"]);
    }

    #[test]
    fn test_no_blank_copy() {
        assert!(FEATURES.iter().all(|f| !f.title.is_empty() && !f.description.is_empty()));
        assert!(VALUES.iter().all(|v| !v.title.is_empty() && !v.detail.is_empty()));
        assert!(CONTACT_DETAILS.iter().all(|d| !d.value.is_empty()));
    }
}
