//! Localized page strings for each supported culture.
//!
//! One static bundle per culture; lookup falls back to the default culture's
//! bundle when the tag is unknown, so rendering can never fail on a bad tag.

/// All localized strings a rendered page needs.
#[derive(Debug, Clone)]
pub struct PageStrings {
    // ==================== Site Chrome ====================
    /// Site title shown in <title> and the header
    pub site_title: &'static str,

    /// Label in front of the language-switch links
    pub language_label: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_categories: &'static str,
    pub nav_destinations: &'static str,
    pub nav_features: &'static str,
    pub nav_trip_plans: &'static str,
    pub nav_testimonials: &'static str,
    pub nav_reservations: &'static str,

    // ==================== Page Headings & Blurbs ====================
    pub home_heading: &'static str,
    pub home_blurb: &'static str,
    pub categories_heading: &'static str,
    pub categories_blurb: &'static str,
    pub destinations_heading: &'static str,
    pub destinations_blurb: &'static str,
    pub features_heading: &'static str,
    pub features_blurb: &'static str,
    pub trip_plans_heading: &'static str,
    pub trip_plans_blurb: &'static str,
    pub testimonials_heading: &'static str,
    pub testimonials_blurb: &'static str,
    pub reservations_heading: &'static str,
    pub reservations_blurb: &'static str,
}

/// Look up the string bundle for a culture tag.
///
/// Unknown tags get the default culture's bundle (Turkish); this mirrors the
/// resolver's fallback and keeps rendering total.
pub fn for_tag(tag: &str) -> &'static PageStrings {
    match tag {
        "tr" => &TURKISH,
        "en" => &ENGLISH,
        "de" => &GERMAN,
        "fr" => &FRENCH,
        _ => &TURKISH,
    }
}

static TURKISH: PageStrings = PageStrings {
    site_title: "Jadoo Travel",
    language_label: "Dil",
    nav_home: "Ana Sayfa",
    nav_categories: "Kategoriler",
    nav_destinations: "Destinasyonlar",
    nav_features: "Özellikler",
    nav_trip_plans: "Gezi Planları",
    nav_testimonials: "Yorumlar",
    nav_reservations: "Rezervasyonlar",
    home_heading: "Dünyayı keşfetmeye hazır mısınız?",
    home_blurb: "Jadoo ile hayalinizdeki tatili planlayın.",
    categories_heading: "Tatil Kategorileri",
    categories_blurb: "Size en uygun tatil türünü seçin.",
    destinations_heading: "Popüler Destinasyonlar",
    destinations_blurb: "En çok tercih edilen rotaları keşfedin.",
    features_heading: "Neden Jadoo?",
    features_blurb: "Kolay rezervasyon, esnek planlama, yerel rehberler.",
    trip_plans_heading: "Gezi Planları",
    trip_plans_blurb: "Uzmanlarımızın hazırladığı gün gün programlar.",
    testimonials_heading: "Misafirlerimiz Ne Diyor?",
    testimonials_blurb: "Binlerce mutlu gezginin deneyimleri.",
    reservations_heading: "Rezervasyon",
    reservations_blurb: "Yerinizi birkaç adımda ayırtın.",
};

static ENGLISH: PageStrings = PageStrings {
    site_title: "Jadoo Travel",
    language_label: "Language",
    nav_home: "Home",
    nav_categories: "Categories",
    nav_destinations: "Destinations",
    nav_features: "Features",
    nav_trip_plans: "Trip Plans",
    nav_testimonials: "Testimonials",
    nav_reservations: "Reservations",
    home_heading: "Ready to explore the world?",
    home_blurb: "Plan the holiday of your dreams with Jadoo.",
    categories_heading: "Holiday Categories",
    categories_blurb: "Pick the kind of trip that suits you best.",
    destinations_heading: "Popular Destinations",
    destinations_blurb: "Discover our most loved routes.",
    features_heading: "Why Jadoo?",
    features_blurb: "Easy booking, flexible planning, local guides.",
    trip_plans_heading: "Trip Plans",
    trip_plans_blurb: "Day-by-day itineraries crafted by our experts.",
    testimonials_heading: "What Our Guests Say",
    testimonials_blurb: "Stories from thousands of happy travellers.",
    reservations_heading: "Reservations",
    reservations_blurb: "Secure your spot in just a few steps.",
};

static GERMAN: PageStrings = PageStrings {
    site_title: "Jadoo Travel",
    language_label: "Sprache",
    nav_home: "Startseite",
    nav_categories: "Kategorien",
    nav_destinations: "Reiseziele",
    nav_features: "Leistungen",
    nav_trip_plans: "Reisepläne",
    nav_testimonials: "Bewertungen",
    nav_reservations: "Reservierungen",
    home_heading: "Bereit, die Welt zu entdecken?",
    home_blurb: "Planen Sie Ihren Traumurlaub mit Jadoo.",
    categories_heading: "Urlaubskategorien",
    categories_blurb: "Wählen Sie die Reiseart, die zu Ihnen passt.",
    destinations_heading: "Beliebte Reiseziele",
    destinations_blurb: "Entdecken Sie unsere beliebtesten Routen.",
    features_heading: "Warum Jadoo?",
    features_blurb: "Einfache Buchung, flexible Planung, lokale Guides.",
    trip_plans_heading: "Reisepläne",
    trip_plans_blurb: "Tagesgenaue Programme von unseren Experten.",
    testimonials_heading: "Das sagen unsere Gäste",
    testimonials_blurb: "Erfahrungen tausender zufriedener Reisender.",
    reservations_heading: "Reservierung",
    reservations_blurb: "Sichern Sie sich Ihren Platz in wenigen Schritten.",
};

static FRENCH: PageStrings = PageStrings {
    site_title: "Jadoo Travel",
    language_label: "Langue",
    nav_home: "Accueil",
    nav_categories: "Catégories",
    nav_destinations: "Destinations",
    nav_features: "Atouts",
    nav_trip_plans: "Itinéraires",
    nav_testimonials: "Témoignages",
    nav_reservations: "Réservations",
    home_heading: "Prêt à explorer le monde ?",
    home_blurb: "Planifiez les vacances de vos rêves avec Jadoo.",
    categories_heading: "Catégories de vacances",
    categories_blurb: "Choisissez le type de voyage qui vous convient.",
    destinations_heading: "Destinations populaires",
    destinations_blurb: "Découvrez nos itinéraires préférés.",
    features_heading: "Pourquoi Jadoo ?",
    features_blurb: "Réservation simple, planification flexible, guides locaux.",
    trip_plans_heading: "Itinéraires",
    trip_plans_blurb: "Des programmes jour par jour conçus par nos experts.",
    testimonials_heading: "Ce que disent nos voyageurs",
    testimonials_blurb: "Les expériences de milliers de voyageurs heureux.",
    reservations_heading: "Réservation",
    reservations_blurb: "Réservez votre place en quelques étapes.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tag_known_cultures() {
        assert_eq!(for_tag("tr").nav_home, "Ana Sayfa");
        assert_eq!(for_tag("en").nav_home, "Home");
        assert_eq!(for_tag("de").nav_home, "Startseite");
        assert_eq!(for_tag("fr").nav_home, "Accueil");
    }

    #[test]
    fn test_for_tag_unknown_falls_back_to_default() {
        assert_eq!(for_tag("xx").nav_home, "Ana Sayfa");
        assert_eq!(for_tag("").nav_home, "Ana Sayfa");
    }

    #[test]
    fn test_site_title_consistent_across_cultures() {
        for tag in ["tr", "en", "de", "fr"] {
            assert_eq!(for_tag(tag).site_title, "Jadoo Travel");
        }
    }
}
