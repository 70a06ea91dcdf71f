//! Built-in question bank: true/false statements about fablabs.

use crate::model::{Question, QuestionBank};

/// `(statement, is_true, explanation)` in bank order.
const FABLAB_QUESTIONS: &[(&str, bool, &str)] = &[
    (
        "Des makers utilisent les fablabs pour créer des prothèses ou aides techniques.",
        true,
        "Oui. Beaucoup de fablabs soutiennent des projets d'assistance (prothèses, adaptations, aides techniques) via l'impression 3D et l'électronique.",
    ),
    (
        "Des fablabs organisent des ateliers intergénérationnels.",
        true,
        "Oui. Ateliers enfants/parents, seniors, débutants : le fablab est souvent un lieu de transmission entre publics.",
    ),
    (
        "Des enfants apprennent à coder ou modéliser en fablab.",
        true,
        "Oui. Scratch, Arduino, modélisation 3D… les fablabs proposent souvent des initiations adaptées.",
    ),
    (
        "Certains fablabs sont accessibles aux personnes en situation de handicap.",
        true,
        "Oui. Certains lieux adaptent l'accueil et les postes de travail, ou mènent des projets inclusifs avec des partenaires.",
    ),
    (
        "Il existe des fablabs dans des bibliothèques, des écoles et des centres sociaux.",
        true,
        "Oui. Les fablabs peuvent être intégrés à des structures publiques/associatives : écoles, médiathèques, maisons de quartier.",
    ),
    (
        "Des fablabs ont été créés à l'initiative de citoyens.",
        true,
        "Oui. Beaucoup naissent de collectifs locaux qui veulent mutualiser outils, savoir-faire et projets.",
    ),
    (
        "Des fablabs participent à des projets de recherche scientifique.",
        true,
        "Oui. Prototypage rapide, instrumentation, tests : certains fablabs collaborent avec universités, écoles, labs.",
    ),
    (
        "Des fablabs organisent des hackathons citoyens.",
        true,
        "Oui. Il arrive qu'ils animent des événements de co-création (solutions locales, écologie, mobilité, inclusion).",
    ),
    (
        "Certains fablabs ont des règles de sécurité strictes.",
        true,
        "Oui. Machines + outils = procédures : formation, EPI, encadrement, zones dédiées, etc.",
    ),
    (
        "Des fablabs utilisent des logiciels libres pour la modélisation.",
        true,
        "Oui. On peut y utiliser Blender, FreeCAD, Inkscape, etc. (même si certains utilisent aussi des logiciels propriétaires).",
    ),
    (
        "Tous les fablabs sont ouverts 24h/24 et 7j/7.",
        false,
        "Non. Les horaires dépendent du lieu, de l'équipe, des bénévoles, et des contraintes de sécurité.",
    ),
    (
        "On peut utiliser toutes les machines sans aucune formation.",
        false,
        "Non. La plupart des machines nécessitent une initiation (sécurité + bonnes pratiques) avant usage autonome.",
    ),
    (
        "Tous les projets réalisés en fablab sont automatiquement open source.",
        false,
        "Non. Le partage est encouragé, mais un projet peut rester privé. Cela dépend des règles du lieu et du choix du maker.",
    ),
    (
        "Les fablabs sont toujours gratuits pour tout le monde.",
        false,
        "Non. Beaucoup demandent une cotisation, un coût matière, ou un tarif atelier (parfois socialement modulé).",
    ),
    (
        "Il n'y a jamais de règles dans un fablab.",
        false,
        "Non. Il y a presque toujours un cadre : sécurité, réservation machines, respect du matériel, usage des espaces.",
    ),
    (
        "Les fablabs sont réservés aux ingénieurs et techniciens.",
        false,
        "Non. Le principe d'un fablab, c'est l'ouverture : curieux, artistes, étudiants, bricoleurs, pros…",
    ),
    (
        "On peut y fabriquer une voiture roulante et homologuée pour la route en une journée.",
        false,
        "Non. Un fablab aide à prototyper, mais fabriquer une voiture complète homologuée en 24h n'est pas réaliste.",
    ),
    (
        "Les fablabs ne servent qu'à imprimer des gadgets.",
        false,
        "Non. On y fait du prototypage utile, de la réparation, de l'apprentissage, des objets fonctionnels, artistiques, éducatifs.",
    ),
    (
        "Il n'y a pas besoin de respecter les règles de sécurité.",
        false,
        "Non. C'est l'inverse : la sécurité est centrale (machines dangereuses, outils coupants, lasers, etc.).",
    ),
    (
        "Les fablabs sont des magasins de bricolage.",
        false,
        "Non. Un fablab est un lieu de fabrication/formation/communauté, pas une surface de vente de matériel.",
    ),
];

impl QuestionBank {
    /// The fablab quiz shipped with the application.
    #[must_use]
    pub fn fablab() -> Self {
        let questions = FABLAB_QUESTIONS
            .iter()
            .map(|&(text, is_true, explanation)| Question::from_static(text, is_true, explanation))
            .collect();
        QuestionBank::from_trusted(questions)
    }
}
