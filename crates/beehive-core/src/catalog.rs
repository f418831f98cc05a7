//! Static content catalog.
//!
//! Every record here is authored at compile time and never mutated. Display
//! order is slice order.

/// Image shown in place of any picture that fails to load.
pub const FALLBACK_IMAGE: &str = "https://beehivewayanad.com/images/resort.jpg";

/// Resort logo used by the header, drawer, footer and lightbox.
pub const LOGO: &str = "https://beehivewayanad.com/images/logo.png";

/// A nearby sightseeing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    /// Road distance from the resort, when known.
    pub distance: Option<&'static str>,
}

impl Destination {
    /// Badge text for the card: the distance, or "Premium" when unknown.
    pub fn distance_label(&self) -> &'static str {
        self.distance.unwrap_or("Premium")
    }

    /// Google Maps search link for this destination.
    pub fn directions_url(&self) -> String {
        let query = format!("{} Wayanad", self.name);
        format!(
            "https://www.google.com/maps/search/{}",
            urlencoding::encode(&query)
        )
    }
}

/// An on-site activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// A per-night accommodation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffPlan {
    pub id: &'static str,
    pub name: &'static str,
    /// Display string such as `"5500/-"`. Never parsed as a number.
    pub price: &'static str,
    pub image: &'static str,
    pub details: &'static str,
    pub capacity: &'static str,
}

impl TariffPlan {
    /// Price formatted for display, e.g. `"₹5500"`.
    pub fn display_price(&self) -> String {
        display_price(self.price)
    }

    /// Details split into one line per sentence.
    pub fn detail_lines(&self) -> impl Iterator<Item = &'static str> {
        self.details.split(". ").filter(|line| !line.trim().is_empty())
    }
}

/// A multi-night holiday package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub kind: &'static str,
    pub price_2n3d: &'static str,
    pub price_3n4d: &'static str,
    pub inclusions: &'static str,
}

/// Resort contact details shared by the shell and the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub phones: [&'static str; 2],
    pub email: &'static str,
    pub address: &'static str,
    pub region: &'static str,
    pub landmark: &'static str,
    pub map_embed_url: &'static str,
    pub directions_url: &'static str,
}

impl ContactInfo {
    /// The number advertised in the header drawer and footer.
    pub fn primary_phone(&self) -> &'static str {
        self.phones[0]
    }

    /// `tel:` link for a display-formatted phone number.
    pub fn tel_href(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:+91{digits}")
    }

    /// `mailto:` link for the resort inbox.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Strips the `/-` suffix used in price strings and prefixes the rupee sign.
pub fn display_price(price: &str) -> String {
    format!("₹{}", price.replace("/-", ""))
}

pub const CONTACT: ContactInfo = ContactInfo {
    phones: ["9656 359 111", "9447 394 111"],
    email: "wayanadbeehive@gmail.com",
    address: "Manjappara, Ambalavayal, Wayanad, Kerala",
    region: "Karapuzha, Meenagadi, Wayanad",
    landmark: "ABR SOLAR, Meenagadi, Wayanad",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3910.887268800262!2d76.1965141758925!3d11.59039404221884!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ba60f18767fba6d%3A0x42d451324fd42699!2sBee%20Hive%20Staycations%20Wayanad!5e0!3m2!1sen!2sin!4v1715858000000!5m2!1sen!2sin",
    directions_url: "https://www.google.com/maps/dir//Bee+Hive+Staycations+Wayanad",
};

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        id: "karapuzha",
        name: "Karapuzha Dam",
        image: "https://beehivewayanad.com/images/tour-places-wayanad.png",
        description: "The largest earth dam in India with beautiful landscapes, bird watching opportunities, and an adventure park. Ideal for photography lovers.",
        distance: Some("5 km"),
    },
    Destination {
        id: "edakkal",
        name: "Edakkal Caves",
        image: "https://beehivewayanad.com/images/tour-places-wayanad2.png",
        description: "Rare prehistoric caves inhabited since ancient times. Located on Ambukuthi Hills, it features natural rock carvings.",
        distance: Some("8 km"),
    },
    Destination {
        id: "phantom",
        name: "Phantom Rock",
        image: "https://beehivewayanad.com/images/tour-places-wayanad3.png",
        description: "An archaeological structure shaped like a phantom skull. A favorite spot for trekkers and nature enthusiasts.",
        distance: Some("2 km"),
    },
    Destination {
        id: "cheengeri",
        name: "Cheengeri Hills",
        image: "https://beehivewayanad.com/images/tour-places-wayanad5.png",
        description: "A popular destination for adventure trekkers offering breathtaking sunset views of Wayanad.",
        distance: Some("8 km"),
    },
    Destination {
        id: "banasura",
        name: "Banasura Sagar Dam",
        image: "https://beehivewayanad.com/images/tour-places-wayanad4.png",
        description: "India’s largest earthen dam, surrounded by majestic hills and mesmerising waterfalls. A photographer’s delight.",
        distance: None,
    },
    Destination {
        id: "muthanga",
        name: "Muthanga Wildlife Safari",
        image: "https://beehivewayanad.com/images/tour-places-wayanad6.png",
        description: "Experience Asian elephants, tigers, and deer in their natural habitat through a thrilling jeep safari.",
        distance: None,
    },
    Destination {
        id: "pookode",
        name: "Pookode Lake",
        image: "https://beehivewayanad.com/images/tour-places-wayanad9.png",
        description: "A serene freshwater lake nestled in the rainforest, perfect for boating and nature walks.",
        distance: None,
    },
    Destination {
        id: "heritage",
        name: "Ambalavayal Heritage Museum",
        image: "https://beehivewayanad.com/images/wayanad-places.png",
        description: "One of the biggest archaeological museums in Kerala, showcasing artefacts dating back thousands of years.",
        distance: None,
    },
    Destination {
        id: "soochipara",
        name: "Soochipara Waterfalls",
        image: "https://beehivewayanad.com/images/soochipara.png",
        description: "Sentinel Rock waterfalls, where white streams fall headfirst into granite rocks. A surreal trekking experience.",
        distance: None,
    },
    Destination {
        id: "kuruvadweep",
        name: "Kuruvadweep",
        image: "https://beehivewayanad.com/images/kuruva.png",
        description: "A protected river delta comprising a cluster of islands on the Kabini River, rich in flora and fauna.",
        distance: None,
    },
    Destination {
        id: "chembra",
        name: "Chembra Peak",
        image: "https://beehivewayanad.com/images/chembra.png",
        description: "One of the highest mountain ranges in South India, famous for the heart-shaped lake \"Hridaya Saras\".",
        distance: None,
    },
    Destination {
        id: "kanthanpara",
        name: "Kanthanpara Waterfalls",
        image: "https://beehivewayanad.com/images/Kanthampara.png",
        description: "A quaint and secluded waterfall perfect for picnicking and rejuvenating in nature.",
        distance: None,
    },
    Destination {
        id: "jain-temple",
        name: "Jain Temple Bathery",
        image: "https://beehivewayanad.com/images/Jain-temple.png",
        description: "A 13th-century temple built in the Vijayanagar Dynasty architectural style, rich in history.",
        distance: None,
    },
    Destination {
        id: "lakkidi",
        name: "Lakkidi Viewpoint",
        image: "https://beehivewayanad.com/images/Lakkidi-view-point.png",
        description: "The gateway of Wayanad, offering a stunning view of the serpentine Thamarassery ghat pass.",
        distance: None,
    },
];

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: "horse",
        name: "Horse riding (kids)",
        image: "https://beehivewayanad.com/images/horse-ride.png",
        description: "Safe and fun horse riding experiences specifically designed for children.",
    },
    Activity {
        id: "campfire",
        name: "Campfire with music",
        image: "https://beehivewayanad.com/images/Campfire.png",
        description: "Enjoy cozy evenings with a warm campfire and soulful music under the stars.",
    },
    Activity {
        id: "tent",
        name: "Tent stay",
        image: "https://beehivewayanad.com/images/tentstay.png",
        description: "Exciting outdoor camping facilities for backpackers and nature lovers.",
    },
    Activity {
        id: "spa",
        name: "Steam bath and Jacuzzi",
        image: "https://beehivewayanad.com/images/steambath.png",
        description: "Relax and unwind with our steam bath and jacuzzi facilities.",
    },
    Activity {
        id: "ayurveda",
        name: "Ayurveda spa",
        image: "https://beehivewayanad.com/images/ayurveda-spa.png",
        description: "Traditional Ayurvedic treatments to rejuvenate your mind, body, and soul.",
    },
    Activity {
        id: "fishing",
        name: "Fishing",
        image: "https://beehivewayanad.com/images/fishing.png",
        description: "Calm fishing experiences at our natural pond within the resort premises.",
    },
    Activity {
        id: "boat",
        name: "Boat Ride",
        image: "https://beehivewayanad.com/images/kotathoni.png",
        description: "Enjoy peaceful boat rides in the nearby water bodies.",
    },
    Activity {
        id: "play",
        name: "Play area",
        image: "https://beehivewayanad.com/images/play-area.png",
        description: "Dedicated play area for children to enjoy various outdoor activities.",
    },
];

pub const TARIFFS: &[TariffPlan] = &[
    TariffPlan {
        id: "family",
        name: "FAMILY ROOM",
        price: "5500/-",
        image: "https://beehivewayanad.com/images/villa.png",
        details: "Independent villa facing the lake. Spacious suite for family and groups.",
        capacity: "4 bedrooms in one villa",
    },
    TariffPlan {
        id: "tent",
        name: "TENT STAY",
        price: "1500/-",
        image: "https://beehivewayanad.com/images/tent.png",
        details: "Eco-designed 3-person tent. Includes sleeping bags and mattresses for comfort.",
        capacity: "2 Adults per tent",
    },
    TariffPlan {
        id: "cottage",
        name: "PRIVATE COTTAGE",
        price: "4500/-",
        image: "https://beehivewayanad.com/images/resort-cottage.png",
        details: "2 bedroom private cottage located inside calm coffee plantations.",
        capacity: "1 cottage for 2 families",
    },
];

pub const SPECIAL_PACKAGES: &[Package] = &[
    Package {
        kind: "Independent room",
        price_2n3d: "9,500/-",
        price_3n4d: "15,500/-",
        inclusions: "Bed Coffee/Tea + Breakfast + Evening Tea with Snacks + Dinner + Campfire",
    },
    Package {
        kind: "Tent Stay",
        price_2n3d: "6,800/-",
        price_3n4d: "10,500/-",
        inclusions: "Bed Coffee/Tea + Breakfast + Evening Tea with Snacks + Dinner",
    },
    Package {
        kind: "Private Cottage",
        price_2n3d: "16,800/-",
        price_3n4d: "20,500/-",
        inclusions: "Bed Coffee/Tea + Breakfast + Evening Tea with Snacks + Dinner + Campfire with music + 2 days Wayanad sightseeing safari in Jeep",
    },
];

/// Gallery pictures, newest first. The repeated `14.jpg` is part of the
/// published gallery.
pub const GALLERY_IMAGES: &[&str] = &[
    "https://beehivewayanad.com/images/tent.png",
    "https://beehivewayanad.com/images/gallery/14.jpg",
    "https://beehivewayanad.com/images/gallery/13.jpg",
    "https://beehivewayanad.com/images/gallery/12.jpg",
    "https://beehivewayanad.com/images/gallery/11.jpg",
    "https://beehivewayanad.com/images/gallery/10.jpg",
    "https://beehivewayanad.com/images/gallery/9.jpg",
    "https://beehivewayanad.com/images/gallery/8.jpg",
    "https://beehivewayanad.com/images/gallery/7.jpg",
    "https://beehivewayanad.com/images/gallery/6.jpg",
    "https://beehivewayanad.com/images/gallery/5.jpg",
    "https://beehivewayanad.com/images/gallery/4.jpg",
    "https://beehivewayanad.com/images/gallery/3.jpg",
    "https://beehivewayanad.com/images/gallery/2.jpg",
    "https://beehivewayanad.com/images/gallery/1.jpg",
    "https://beehivewayanad.com/images/gallery/14.jpg",
];

/// In-room and on-site amenities listed on the facilities page.
pub const FACILITIES: &[&str] = &[
    "Hot Water / Filter Water",
    "Twin, Double or single beds",
    "En-suite bathrooms",
    "Air conditioning or fan cooling system",
    "Satellite Television",
    "In-room safes (*) or a safe system",
    "Tea and coffee making facilities (*)",
    "Campfire / Refreshment area",
    "Barbeque Dinner with music",
    "Play area",
    "Natural Pond",
    "Designed Rooms",
    "Kitchen and Homely food",
    "Close to Major Tourist Destinations",
    "Accommodation for Group and Family",
];

/// Look up a destination by id.
pub fn destination(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

/// Look up an activity by id.
pub fn activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Look up a tariff plan by id.
pub fn tariff(id: &str) -> Option<&'static TariffPlan> {
    TARIFFS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(DESTINATIONS.len(), 14);
        assert_eq!(ACTIVITIES.len(), 8);
        assert_eq!(TARIFFS.len(), 3);
        assert_eq!(SPECIAL_PACKAGES.len(), 3);
        assert_eq!(GALLERY_IMAGES.len(), 16);
        assert_eq!(FACILITIES.len(), 15);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = DESTINATIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DESTINATIONS.len());

        let ids: HashSet<_> = ACTIVITIES.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACTIVITIES.len());
    }

    #[test]
    fn test_destination_distance_label() {
        let karapuzha = destination("karapuzha").expect("karapuzha exists");
        assert_eq!(karapuzha.distance_label(), "5 km");

        let chembra = destination("chembra").expect("chembra exists");
        assert_eq!(chembra.distance_label(), "Premium");
    }

    #[test]
    fn test_directions_url_is_encoded() {
        let phantom = destination("phantom").expect("phantom exists");
        assert_eq!(
            phantom.directions_url(),
            "https://www.google.com/maps/search/Phantom%20Rock%20Wayanad"
        );
    }

    #[test]
    fn test_tariff_display_price() {
        let family = tariff("family").expect("family plan exists");
        assert_eq!(family.display_price(), "₹5500");
        assert_eq!(display_price("16,800/-"), "₹16,800");
    }

    #[test]
    fn test_tariff_detail_lines() {
        let tent = tariff("tent").expect("tent plan exists");
        let lines: Vec<_> = tent.detail_lines().collect();
        assert_eq!(
            lines,
            vec![
                "Eco-designed 3-person tent",
                "Includes sleeping bags and mattresses for comfort."
            ]
        );
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT.primary_phone(), "9656 359 111");
        assert_eq!(ContactInfo::tel_href("9656 359 111"), "tel:+919656359111");
        assert_eq!(CONTACT.mailto_href(), "mailto:wayanadbeehive@gmail.com");
    }

    #[test]
    fn test_lookup_missing_id() {
        assert!(destination("atlantis").is_none());
        assert!(activity("skiing").is_none());
        assert!(tariff("penthouse").is_none());
    }
}
