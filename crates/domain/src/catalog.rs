//! Static catalog data.
//!
//! Built once at application start; nothing here changes at runtime
//! except the `unlocked` flag on heritage elements, which only the hunt
//! board flips.

use crate::element::{
    ClueBundle, Difficulty, ElementCategory, ElementDetails, ElementKind, ElementLocation,
    HistoricalElement, ModelReference, Rewards,
};
use crate::ids::{ElementId, ProductId, SiteId};
use crate::product::Product;
use crate::site::HeritageSite;

/// The collectible elements of ancient Sufetula.
pub fn heritage_elements() -> Vec<HistoricalElement> {
    vec![
        HistoricalElement {
            id: ElementId::from("CAP-001"),
            name: "Corinthian Capital".to_string(),
            kind: ElementKind::Architectural,
            difficulty: Difficulty::Medium,
            category: ElementCategory::Roman,
            points: 150,
            location: ElementLocation {
                area: "Temple Complex".to_string(),
                coordinates: Some("35.2321° N, 9.1239° E".to_string()),
                hints: vec![
                    "Look for fallen columns near the main temple".to_string(),
                    "Eastern side of the forum".to_string(),
                    "Near the Byzantine fortress".to_string(),
                ],
            },
            clues: ClueBundle {
                silhouette: "/fig_296/before.jpg".to_string(),
                riddle: "Atop columns I did stand, with leaves of stone in patterns grand"
                    .to_string(),
                historical_context:
                    "Part of the main temple's colonnade, showing typical 2nd century Roman craftsmanship"
                        .to_string(),
            },
            details: ElementDetails {
                description:
                    "An ornate Corinthian capital featuring acanthus leaves and detailed volutes"
                        .to_string(),
                historical_period: "2nd Century AD".to_string(),
                significance:
                    "Demonstrates the high level of architectural sophistication in Roman Sufetula"
                        .to_string(),
                fun_facts: vec![
                    "Carved from local limestone".to_string(),
                    "Shows signs of earthquake damage".to_string(),
                    "Similar to capitals found in Carthage".to_string(),
                ],
                related_elements: vec![ElementId::from("COL-001"), ElementId::from("BAS-002")],
            },
            unlock_requirements: None,
            rewards: Rewards {
                points: 150,
                badge: Some("Master of Architecture".to_string()),
                title: Some("Temple Explorer".to_string()),
                special_unlock: None,
            },
            model: ModelReference {
                target_image_path: "/fig_296/after.jpg".to_string(),
                recognition_threshold: 0.85,
                alternative_angles: vec![
                    "/fig_296/after-alt1.jpg".to_string(),
                    "/fig_296/after-alt2.jpg".to_string(),
                ],
            },
            unlocked: false,
        },
        HistoricalElement {
            id: ElementId::from("COL-001"),
            name: "Forum Colonnade".to_string(),
            kind: ElementKind::Building,
            difficulty: Difficulty::Easy,
            category: ElementCategory::Roman,
            points: 100,
            location: ElementLocation {
                area: "Forum".to_string(),
                coordinates: Some("35.2318° N, 9.1241° E".to_string()),
                hints: vec![
                    "Enter through the Gate of Antoninus".to_string(),
                    "Follow the paved way toward the three temples".to_string(),
                ],
            },
            clues: ClueBundle {
                silhouette: "/fig_301/before.jpg".to_string(),
                riddle: "In rows we guard the sacred square, count us while the sun is fair"
                    .to_string(),
                historical_context: "The porticoed enclosure framing the capitoline temples"
                    .to_string(),
            },
            details: ElementDetails {
                description: "Columns of the forum portico, re-erected during early excavations"
                    .to_string(),
                historical_period: "2nd Century AD".to_string(),
                significance: "One of the best preserved forum enclosures in North Africa"
                    .to_string(),
                fun_facts: vec![
                    "The forum measures roughly 70 by 67 metres".to_string(),
                    "Its paving slabs still carry cart ruts".to_string(),
                ],
                related_elements: vec![ElementId::from("CAP-001")],
            },
            unlock_requirements: None,
            rewards: Rewards {
                points: 100,
                badge: None,
                title: Some("Forum Walker".to_string()),
                special_unlock: None,
            },
            model: ModelReference {
                target_image_path: "/fig_301/after.jpg".to_string(),
                recognition_threshold: 0.8,
                alternative_angles: vec!["/fig_301/after-alt1.jpg".to_string()],
            },
            unlocked: false,
        },
        HistoricalElement {
            id: ElementId::from("BAS-002"),
            name: "Basilica of Bellator".to_string(),
            kind: ElementKind::Building,
            difficulty: Difficulty::Hard,
            category: ElementCategory::Christian,
            points: 200,
            location: ElementLocation {
                area: "Episcopal Quarter".to_string(),
                coordinates: None,
                hints: vec![
                    "North of the great baths".to_string(),
                    "Look for the baptistery mosaic".to_string(),
                    "The apse faces the rising sun".to_string(),
                ],
            },
            clues: ClueBundle {
                silhouette: "/fig_312/before.jpg".to_string(),
                riddle: "Waters of faith once filled my heart, though my naves now stand apart"
                    .to_string(),
                historical_context: "Converted from a civic building in the 4th century"
                    .to_string(),
            },
            details: ElementDetails {
                description: "A three-nave basilica with a cruciform baptismal font".to_string(),
                historical_period: "4th-6th Century AD".to_string(),
                significance: "Testifies to the Christian transformation of Sufetula".to_string(),
                fun_facts: vec![
                    "Named after an inscription naming bishop Bellator".to_string(),
                    "The font kept its polychrome mosaic lining".to_string(),
                ],
                related_elements: vec![ElementId::from("CAP-001")],
            },
            unlock_requirements: None,
            rewards: Rewards {
                points: 200,
                badge: Some("Keeper of the Font".to_string()),
                title: None,
                special_unlock: None,
            },
            model: ModelReference {
                target_image_path: "/fig_312/after.jpg".to_string(),
                recognition_threshold: 0.9,
                alternative_angles: vec![
                    "/fig_312/after-alt1.jpg".to_string(),
                    "/fig_312/after-alt2.jpg".to_string(),
                ],
            },
            unlocked: false,
        },
        HistoricalElement {
            id: ElementId::from("INS-004"),
            name: "Dedication of the Triumphal Arch".to_string(),
            kind: ElementKind::Inscription,
            difficulty: Difficulty::Medium,
            category: ElementCategory::Roman,
            points: 120,
            location: ElementLocation {
                area: "Arch of Diocletian".to_string(),
                coordinates: None,
                hints: vec![
                    "Read the attic of the southern arch".to_string(),
                    "Best light in the late afternoon".to_string(),
                ],
            },
            clues: ClueBundle {
                silhouette: "/fig_318/before.jpg".to_string(),
                riddle: "Letters carved for emperors four, name the tetrarchs I adore"
                    .to_string(),
                historical_context: "Dedicated to the Tetrarchy at the end of the 3rd century"
                    .to_string(),
            },
            details: ElementDetails {
                description: "Monumental Latin dedication panel of the triumphal arch".to_string(),
                historical_period: "Late 3rd Century AD".to_string(),
                significance: "Anchors the dating of the southern entrance to the city"
                    .to_string(),
                fun_facts: vec![
                    "The lettering still holds traces of red pigment".to_string(),
                ],
                related_elements: vec![ElementId::from("COL-001")],
            },
            unlock_requirements: None,
            rewards: Rewards {
                points: 120,
                badge: None,
                title: Some("Epigraphist".to_string()),
                special_unlock: None,
            },
            model: ModelReference {
                target_image_path: "/fig_318/after.jpg".to_string(),
                recognition_threshold: 0.85,
                alternative_angles: vec![],
            },
            unlocked: false,
        },
    ]
}

/// Souvenir products of the points store.
pub fn products() -> Vec<Product> {
    let entries: [(u32, &str, &str, u32, &str, &str); 9] = [
        (
            1,
            "Tableau à l'huile Tunisie",
            "Un magnifique tableau peinture acrylique taille 110/60 fait à la main par de talents tunisiens. Ces tableaux reprennent les architectures des maisons tunisiennes donnant un décor éblouissant à votre maison.",
            500,
            "/Tunisia/tableau1.jpg",
            "Artisanat",
        ),
        (
            2,
            "La balgha",
            "Belgha ou belga, est une chaussure en cuir qui fait partie des costumes traditionnels du Maghreb.",
            150,
            "/Tunisia/souv2.png",
            "Produits du terroir",
        ),
        (
            3,
            "Poterie",
            "Poterie artisanale, articles en terre cuite artisanale tunisienne incarnant à la perfection l'élégance méditerranéenne et le savoir-faire traditionnel.",
            100,
            "/Tunisia/ceramic2.jpg",
            "Artisanat",
        ),
        (
            4,
            "Margoum",
            "Le margoum ou mergoum est un tissage de laine utilisé comme tapis de sol dont les origines sont arabo-berbères.",
            500,
            "/Tunisia/tapis4.jpg",
            "Artisanat",
        ),
        (
            5,
            "Mdhalla",
            "Chapeau de plage traditionnel M'Dhala fabriqué à partir de matériaux naturels et tissé à la main, créé à partir des feuilles de palmiers.",
            250,
            "/Tunisia/souv6.png",
            "Artisanat",
        ),
        (
            6,
            "Tableau Sidi Bou Said",
            "Tableau peinture acrylique taille 110/60 fait à la main par de talents tunisiens.",
            350,
            "/Tunisia/tableau3.jpg",
            "Artisanat",
        ),
        (
            7,
            "Kholkhal",
            "Le kholkhal ne se porte pas au niveau des poignets mais au niveau des chevilles. Bracelets de pieds, les kholkhal sont issus de la culture berbère.",
            250,
            "/Tunisia/acc2.jpg",
            "Artisanat",
        ),
        (
            8,
            "Poterie",
            "Articles en terre cuite artisanale tunisienne incarnant à la perfection l'élégance méditerranéenne et le savoir-faire traditionnel.",
            100,
            "/Tunisia/ceramic1.jpeg",
            "Artisanat",
        ),
        (
            9,
            "Tableau à l'huile Tunisie",
            "Tableau peinture acrylique taille 110/60 fait à la main par de talents tunisiens.",
            450,
            "/Tunisia/tableau5.jpg",
            "Artisanat",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, title, description, price, image, category)| Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Sites offered for historical movie generation.
pub fn heritage_sites() -> Vec<HeritageSite> {
    let entries: [(&str, &str, &str, &str); 6] = [
        (
            "157",
            "Hr. Bou Mefteh",
            "Site antique arasé qui se compose de trois parties",
            "/videos/hr.boumeftah.mp4",
        ),
        (
            "004",
            "Aïn Jeljil",
            "Source avec captage antique",
            "/videos/AïnJeljil.mp4",
        ),
        (
            "290",
            "Amphithéâtre",
            "C'est une forme ovale allongée orientée est-ouest, dotée de deux ouvertures sur les extrémités occidentale et orientale.",
            "/videos/amphithéâtre.mp4",
        ),
        (
            "119",
            "Hr. Gazouz",
            "A l'ouest de l'ancien parcours reliant Sbeitla à Rohia à environ 3 ou 4 km au sud-est.",
            "/videos/gazouz.mp4",
        ),
        (
            "024",
            "Hr. Jedliane",
            "Superficie : environ 2 ha. Site antique arasé situé à côté du collège de Jedliane.",
            "/videos/Jedliane.mp4",
        ),
        (
            "189",
            "Hr. Tsmed",
            "C'est un site antique très étendu, composé de champs de ruines dispersées et formant quatre unités en gros",
            "/videos/Hr.Tsmed.mp4",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, name, description, video_path)| HeritageSite {
            id: SiteId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            video_path: video_path.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_fully_locked() {
        assert!(heritage_elements().iter().all(|e| !e.unlocked));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let elements = heritage_elements();
        for (i, a) in elements.iter().enumerate() {
            for b in elements.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_recognition_thresholds_in_unit_range() {
        for element in heritage_elements() {
            let t = element.model.recognition_threshold;
            assert!((0.0..=1.0).contains(&t), "{}: {t}", element.id);
        }
    }

    #[test]
    fn test_fixed_data_sizes() {
        assert_eq!(products().len(), 9);
        assert_eq!(heritage_sites().len(), 6);
    }
}
