//! What is on offer and at what price. Rendered by the services section; the
//! figures are contractual, keep them in sync with quotes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub problem: &'static str,
    pub benefit: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: Option<&'static str>,
    /// Euros, tax-free (micro-entreprise).
    pub price: u32,
    pub monthly: bool,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<&'static str>,
}

impl Offer {
    pub fn is_highlighted(&self) -> bool {
        self.badge.is_some()
    }

    pub fn price_label(&self) -> String {
        if self.monthly {
            format!("{} €/mois", format_price(self.price))
        } else {
            format!("{} €", format_price(self.price))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub techs: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Site vitrine artisan",
        problem: "Vos clients ne vous trouvent pas en ligne et passent chez le concurrent.",
        benefit: "Un site professionnel qui reflète la qualité de votre travail et rassure vos prospects.",
        impact: "Vous apparaissez sur Google quand un client cherche votre métier dans votre ville.",
    },
    Service {
        title: "Site restaurant",
        problem: "Vos clients veulent voir la carte et réserver, mais votre présence web est inexistante.",
        benefit: "Un site appétissant avec menu, photos et réservation qui donne envie de pousser la porte.",
        impact: "Plus de réservations, moins d'appels inutiles, une image à la hauteur de votre cuisine.",
    },
    Service {
        title: "E-commerce local",
        problem: "Vous voulez vendre vos produits du terroir au-delà de votre comptoir.",
        benefit: "Une boutique en ligne simple pour vendre vos produits locaux partout en France.",
        impact: "Un canal de vente qui travaille 24h/24, même quand la boutique est fermée.",
    },
    Service {
        title: "Maintenance web",
        problem: "Votre site existe mais il est lent, pas à jour et vous ne savez pas le gérer.",
        benefit: "Un site toujours rapide, sécurisé et à jour sans que vous ayez à y penser.",
        impact: "Zéro stress technique : concentrez-vous sur votre métier, je m'occupe du reste.",
    },
];

pub const OFFERS: &[Offer] = &[
    Offer {
        id: "essentiel",
        name: "L'Essentiel Local",
        kind: Some("One-Page"),
        price: 600,
        monthly: false,
        description: "Vous êtes artisan, commerçant ou restaurateur et vous avez besoin d'être trouvé rapidement sur Google ? Cette offre est faite pour vous.",
        features: &[
            "Site one-page professionnel",
            "Design moderne sur mesure",
            "Adapté mobile & tablette",
            "Fiche Google Maps intégrée",
            "Formulaire de contact sécurisé",
            "Vitesse de chargement optimale",
            "Hébergement & mise en ligne",
            "Formation prise en main (1h)",
        ],
        badge: None,
    },
    Offer {
        id: "premium",
        name: "La Vitrine Premium",
        kind: Some("Multi-pages"),
        price: 900,
        monthly: false,
        description: "Vous voulez un site complet qui travaille pour vous 24h/24 ? Plusieurs pages, galerie photo, référencement avancé et autonomie totale de gestion.",
        features: &[
            "Site multi-pages sur mesure",
            "Référencement SEO avancé",
            "Galerie photo professionnelle",
            "Autonomie de gestion (CMS)",
            "Blog ou page actualités",
            "Formulaire de devis avancé",
            "Optimisation Google Maps",
            "Statistiques de visites",
            "Support prioritaire 30 jours",
        ],
        badge: Some("★ Recommandé"),
    },
];

pub const SUBSCRIPTIONS: &[Offer] = &[
    Offer {
        id: "tranquillite",
        name: "Tranquillité",
        kind: None,
        price: 29,
        monthly: true,
        description: "Le minimum pour garder votre site en ligne, à jour et sécurisé.",
        features: &[
            "Hébergement & nom de domaine",
            "Certificat SSL (HTTPS)",
            "Mises à jour de sécurité",
            "Sauvegardes automatiques",
            "Support par email",
        ],
        badge: None,
    },
    Offer {
        id: "serenite",
        name: "Sérénité",
        kind: None,
        price: 39,
        monthly: true,
        description: "Votre site reste performant et évolue avec votre activité.",
        features: &[
            "Tout Tranquillité inclus",
            "Modifications mineures (2/mois)",
            "Rapport mensuel de performance",
            "Surveillance disponibilité 24/7",
            "Corrections de bugs incluses",
            "Support email & téléphone",
        ],
        badge: Some("★ Populaire"),
    },
    Offer {
        id: "croissance",
        name: "Croissance",
        kind: None,
        price: 49,
        monthly: true,
        description: "Un vrai partenariat pour développer votre visibilité en continu.",
        features: &[
            "Tout Sérénité inclus",
            "Modifications illimitées",
            "Stratégie SEO locale mensuelle",
            "Optimisation Google Maps continue",
            "Réseaux sociaux : lien & intégration",
            "Support prioritaire 7j/7",
            "Refonte visuelle annuelle offerte",
        ],
        badge: None,
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Front-end",
        techs: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
    },
    SkillGroup {
        category: "Back-end",
        techs: &["Node.js", "Express", "PHP", "Python"],
    },
    SkillGroup {
        category: "Base de données",
        techs: &["MySQL", "PostgreSQL", "MongoDB"],
    },
    SkillGroup {
        category: "Outils",
        techs: &["Git", "Docker", "Figma", "VS Code"],
    },
];

/// Cheapest one-off offer, quoted in the hero.
pub fn starting_price() -> u32 {
    OFFERS.iter().map(|o| o.price).min().unwrap_or_default()
}

/// French grouping: `1 200`, `12 500`.
pub fn format_price(euros: u32) -> String {
    let digits = euros.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(49), "49");
        assert_eq!(format_price(900), "900");
        assert_eq!(format_price(1200), "1\u{202f}200");
        assert_eq!(format_price(1234567), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn test_price_labels() {
        assert_eq!(OFFERS[0].price_label(), "600 €");
        assert_eq!(SUBSCRIPTIONS[1].price_label(), "39 €/mois");
    }

    #[test]
    fn test_starting_price() {
        assert_eq!(starting_price(), 600);
    }

    #[test]
    fn test_one_highlight_per_group() {
        for group in [OFFERS, SUBSCRIPTIONS] {
            assert_eq!(group.iter().filter(|o| o.is_highlighted()).count(), 1);
        }
    }

    #[test]
    fn test_offer_ids_unique() {
        let mut ids = OFFERS
            .iter()
            .chain(SUBSCRIPTIONS)
            .map(|o| o.id)
            .collect::<Vec<_>>();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}
