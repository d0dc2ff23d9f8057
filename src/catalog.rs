// Static site content: services, artists, process copy.
// Everything here is read-only and lives for the whole page session.

pub const BRAND: &str = "CanvasBike";
pub const TAGLINE: &str =
    "Hire world-class artists to customize your ride at your doorstep. From graffiti stencils to fine-line ink.";
pub const FOOTER_BLURB: &str =
    "Redefining bike customization. We bring the art to you, transforming everyday rides into rolling masterpieces.";
pub const COPYRIGHT: &str = "© 2024 CANVASBIKE. ALL RIGHTS RESERVED.";

pub const HERO_IMAGE: &str = "https://picsum.photos/seed/hero-bike/800/600";
pub const FEATURED_WORK: &str = "Featured: 'Neon Pulse' by Marcus Vane";

// In-page anchors
pub const SERVICES_ANCHOR: &str = "services";
pub const ARTISTS_ANCHOR: &str = "artists";
pub const PROCESS_ANCHOR: &str = "how-it-works";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bike,
    Brush,
    Palette,
    Zap,
    Star,
    MapPin,
    Calendar,
    Check,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Bike => "🚲",
            Icon::Brush => "🖌️",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::Star => "★",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
            Icon::Check => "✔",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Display label only, never parsed as an amount.
    pub price: &'static str,
    pub icon: Icon,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub image: &'static str,
}

impl Artist {
    // f32 Display already drops a trailing ".0": 5.0 -> "5", 4.9 -> "4.9"
    pub fn rating_label(&self) -> String {
        format!("{}", self.rating)
    }

    pub fn reviews_label(&self) -> String {
        format!("({} reviews)", self.reviews)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "draw",
        title: "Hand Drawing",
        description: "Intricate pen and ink illustrations directly on your frame.",
        price: "From $150",
        icon: Icon::Brush,
        image: "https://picsum.photos/seed/bike-draw/600/400",
    },
    Service {
        id: "paint",
        title: "Fine Painting",
        description: "Detailed brushwork, patterns, and custom color palettes.",
        price: "From $250",
        icon: Icon::Palette,
        image: "https://picsum.photos/seed/bike-paint/600/400",
    },
    Service {
        id: "spray",
        title: "Spray Art",
        description: "Graffiti style, stencils, and bold street-art aesthetics.",
        price: "From $200",
        icon: Icon::Zap,
        image: "https://picsum.photos/seed/bike-spray/600/400",
    },
    Service {
        id: "design",
        title: "Digital Design",
        description: "Full wrap designs and conceptual mockups before application.",
        price: "From $100",
        icon: Icon::Bike,
        image: "https://picsum.photos/seed/bike-design/600/400",
    },
];

pub const ARTISTS: &[Artist] = &[
    Artist {
        name: "Kira 'Ink' Sato",
        specialty: "Hand Drawing",
        rating: 4.9,
        reviews: 124,
        image: "https://picsum.photos/seed/artist1/400/400",
    },
    Artist {
        name: "Marcus Vane",
        specialty: "Spray Art",
        rating: 4.8,
        reviews: 89,
        image: "https://picsum.photos/seed/artist2/400/400",
    },
    Artist {
        name: "Elena Rossi",
        specialty: "Fine Painting",
        rating: 5.0,
        reviews: 56,
        image: "https://picsum.photos/seed/artist3/400/400",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        label: "01",
        title: "Choose Style",
        description: "Select the customization style and share your bike details.",
    },
    ProcessStep {
        label: "02",
        title: "Match Artist",
        description: "We match you with a local artist who specializes in your style.",
    },
    ProcessStep {
        label: "03",
        title: "Home Studio",
        description: "The artist comes to your house and transforms your bike on-site.",
    },
];

/// Display-only slots for the schedule step. No availability logic behind them.
pub const SCHEDULE_SLOTS: &[&str] = &["Mon, Feb 24", "Tue, Feb 25", "Wed, Feb 26", "Thu, Feb 27"];

pub const MARQUEE_WORDS: &[&str] = &["Spray Paint", "Hand Drawn", "Custom Design"];
pub const MARQUEE_REPEAT: usize = 10;

pub const FOOTER_LINKS: &[&str] = &["About Us", "Gallery", "Join as Artist", "Contact"];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Title for a possibly-unset or unknown id. Absent renders as "".
pub fn service_title(id: Option<&str>) -> &'static str {
    id.and_then(find_service).map(|s| s.title).unwrap_or_default()
}

pub fn service_price(id: Option<&str>) -> &'static str {
    id.and_then(find_service).map(|s| s.price).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn every_service_is_findable_by_id() {
        for s in SERVICES {
            assert_eq!(find_service(s.id), Some(s));
        }
        assert_eq!(find_service("draw").map(|s| s.title), Some("Hand Drawing"));
    }

    #[test]
    fn unknown_or_unset_ids_render_empty() {
        assert_eq!(find_service("nonexistent-id"), None);
        assert_eq!(service_title(Some("nonexistent-id")), "");
        assert_eq!(service_price(Some("nonexistent-id")), "");
        assert_eq!(service_title(None), "");
        assert_eq!(service_price(None), "");
    }

    #[test]
    fn known_id_resolves_title_and_price() {
        assert_eq!(service_title(Some("paint")), "Fine Painting");
        assert_eq!(service_price(Some("paint")), "From $250");
        assert_eq!(service_price(Some("design")), "From $100");
    }

    #[test]
    fn rating_labels_use_shortest_form() {
        assert_eq!(ARTISTS[0].rating_label(), "4.9");
        assert_eq!(ARTISTS[2].rating_label(), "5");
        assert_eq!(ARTISTS[1].reviews_label(), "(89 reviews)");
    }

    #[test]
    fn tables_keep_display_order() {
        let ids: Vec<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["draw", "paint", "spray", "design"]);
        let labels: Vec<_> = PROCESS_STEPS.iter().map(|p| p.label).collect();
        assert_eq!(labels, ["01", "02", "03"]);
        assert_eq!(SCHEDULE_SLOTS.len(), 4);
    }
}
