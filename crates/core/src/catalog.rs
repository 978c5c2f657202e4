//! The fixed five-day workout catalog.
//!
//! The plan exists in every supported display locale with an identical
//! shape (same days, same exercise count and order). Storage keys are
//! always drawn from [`Locale::CANONICAL`], so switching the rendered
//! language never changes which stored flags count as completed.

use crate::plan::{DayPlan, Exercise, WeekPlan};
use crate::report::SuggestionTier;

/// Display locale for catalog text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// English
    En,
    /// French
    Fr,
}

impl Locale {
    /// Locale whose exercise names key stored progress documents.
    pub const CANONICAL: Locale = Locale::En;

    /// Lowercase language code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

/// The five-day plan rendered in `locale`.
pub fn weekly_plan(locale: Locale) -> WeekPlan {
    WeekPlan {
        days: match locale {
            Locale::En => &PLAN_EN,
            Locale::Fr => &PLAN_FR,
        },
    }
}

/// The plan whose exercise names are used as storage keys.
pub fn canonical_plan() -> WeekPlan {
    weekly_plan(Locale::CANONICAL)
}

/// Map an exercise name in `locale` (or already canonical) to its
/// canonical name, by position in the plan.
pub fn canonical_name(name: &str, locale: Locale) -> Option<&'static str> {
    let canonical = canonical_plan();
    for (canonical_day, display_day) in canonical.days.iter().zip(weekly_plan(locale).days) {
        for (canonical_ex, display_ex) in canonical_day.exercises.iter().zip(display_day.exercises)
        {
            if canonical_ex.name == name || display_ex.name == name {
                return Some(canonical_ex.name);
            }
        }
    }
    None
}

/// Suggestion line for a completion tier.
pub fn suggestion_text(locale: Locale, tier: SuggestionTier) -> &'static str {
    match (locale, tier) {
        (Locale::En, SuggestionTier::Start) => "Let's get started this week!",
        (Locale::En, SuggestionTier::GoodStart) => {
            "Good start! Aim for consistency on all workout days."
        }
        (Locale::En, SuggestionTier::GreatWork) => {
            "Great work! You're building a strong habit. Push for a few more exercises next week."
        }
        (Locale::En, SuggestionTier::Excellent) => {
            "Excellent consistency! You're very close to a perfect week. Keep up the momentum!"
        }
        (Locale::En, SuggestionTier::Perfect) => {
            "Perfect week! You've crushed your goals. Consider increasing weights or reps next week."
        }
        (Locale::Fr, SuggestionTier::Start) => "Commençons cette semaine!",
        (Locale::Fr, SuggestionTier::GoodStart) => {
            "Bon début! Essayez d'être constant tous les jours d'entraînement."
        }
        (Locale::Fr, SuggestionTier::GreatWork) => {
            "Excellent travail! Vous créez une bonne habitude. Essayez quelques exercices de plus la semaine prochaine."
        }
        (Locale::Fr, SuggestionTier::Excellent) => {
            "Excellente constance! Vous êtes très près d'une semaine parfaite. Gardez cet élan!"
        }
        (Locale::Fr, SuggestionTier::Perfect) => {
            "Semaine parfaite! Vous avez pulvérisé vos objectifs. Envisagez d'augmenter les poids ou les répétitions la semaine prochaine."
        }
    }
}

/// Short cheers shown when an exercise is marked complete.
pub fn motivation_messages(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &[
            "Awesome work!",
            "You've got this!",
            "Keep pushing!",
            "One step closer!",
            "Nailed it!",
            "Feeling strong!",
        ],
        Locale::Fr => &[
            "Super travail!",
            "Tu es capable!",
            "Continue comme ça!",
            "Un pas de plus!",
            "Réussi!",
            "En pleine forme!",
        ],
    }
}

static PLAN_EN: [DayPlan; 5] = [
    DayPlan {
        day_index: 1,
        day_name: "Upper Body Push & HIIT",
        focus: "Chest, Shoulders, Triceps",
        exercises: &[
            Exercise {
                name: "Barbell Bench Press",
                sets: "4 sets",
                reps: "6-8 reps",
                advice: "Keep your back flat on the bench and feet firmly on the ground for stability.",
            },
            Exercise {
                name: "Incline Dumbbell Press",
                sets: "3 sets",
                reps: "8-12 reps",
                advice: "Focus on squeezing your chest at the top of the movement. Don't lock out your elbows.",
            },
            Exercise {
                name: "Overhead Press",
                sets: "4 sets",
                reps: "6-8 reps",
                advice: "Engage your core to protect your lower back. Press the bar straight up.",
            },
            Exercise {
                name: "Lateral Raises",
                sets: "3 sets",
                reps: "12-15 reps",
                advice: "Avoid using momentum. Lift the weights with a controlled motion, leading with your elbows.",
            },
            Exercise {
                name: "Tricep Pushdowns",
                sets: "3 sets",
                reps: "10-15 reps",
                advice: "Keep your elbows tucked into your sides throughout the entire movement.",
            },
            Exercise {
                name: "HIIT: Treadmill Sprints",
                sets: "10 rounds",
                reps: "30s sprint, 60s walk",
                advice: "Push your hardest during the sprints, and use the walk to recover your breath.",
            },
        ],
    },
    DayPlan {
        day_index: 2,
        day_name: "Upper Body Pull & LISS",
        focus: "Back, Biceps",
        exercises: &[
            Exercise {
                name: "Barbell Rows",
                sets: "4 sets",
                reps: "6-8 reps",
                advice: "Maintain a flat back and pull the bar towards your lower chest. Squeeze your shoulder blades together.",
            },
            Exercise {
                name: "Lat Pulldowns",
                sets: "4 sets",
                reps: "8-12 reps",
                advice: "Lead with your elbows and pull the bar down to your upper chest. Focus on using your back muscles.",
            },
            Exercise {
                name: "Seated Cable Rows",
                sets: "3 sets",
                reps: "10-12 reps",
                advice: "Keep your torso upright and pull the handle to your stomach. Avoid leaning back too much.",
            },
            Exercise {
                name: "Face Pulls",
                sets: "3 sets",
                reps: "15-20 reps",
                advice: "Pull the rope towards your face, aiming to get your hands by your ears. Great for shoulder health.",
            },
            Exercise {
                name: "Dumbbell Bicep Curls",
                sets: "3 sets",
                reps: "10-15 reps",
                advice: "Keep your elbows stationary at your sides. Avoid swinging the weights.",
            },
            Exercise {
                name: "LISS: Incline Walk",
                sets: "1 session",
                reps: "30 mins, steady pace",
                advice: "Maintain a consistent pace at a challenging incline to keep your heart rate elevated.",
            },
        ],
    },
    DayPlan {
        day_index: 3,
        day_name: "Leg Day",
        focus: "Quads, Hamstrings, Glutes",
        exercises: &[
            Exercise {
                name: "Barbell Squats",
                sets: "4 sets",
                reps: "6-8 reps",
                advice: "Keep your chest up and back straight. Go down until your thighs are at least parallel to the floor.",
            },
            Exercise {
                name: "Romanian Deadlifts",
                sets: "3 sets",
                reps: "8-12 reps",
                advice: "Hinge at your hips, keeping your legs almost straight (slight bend). Feel the stretch in your hamstrings.",
            },
            Exercise {
                name: "Leg Press",
                sets: "3 sets",
                reps: "10-15 reps",
                advice: "Don't let your lower back round off the pad. Control the weight on the way down.",
            },
            Exercise {
                name: "Leg Curls",
                sets: "3 sets",
                reps: "12-15 reps",
                advice: "Focus on squeezing your hamstrings to curl the weight. Avoid using your lower back.",
            },
            Exercise {
                name: "Calf Raises",
                sets: "4 sets",
                reps: "15-20 reps",
                advice: "Get a full stretch at the bottom and a powerful squeeze at the top of the movement.",
            },
            Exercise {
                name: "Treadmill Cool-down",
                sets: "1 session",
                reps: "15 mins, light jog",
                advice: "Gradually lower your heart rate. This helps with recovery.",
            },
        ],
    },
    DayPlan {
        day_index: 4,
        day_name: "Full Body & Core",
        focus: "Strength & Stability",
        exercises: &[
            Exercise {
                name: "Dumbbell Goblet Squats",
                sets: "3 sets",
                reps: "8-10 reps",
                advice: "Hold one dumbbell vertically against your chest. Keep your torso upright as you squat.",
            },
            Exercise {
                name: "Dumbbell Bench Press",
                sets: "3 sets",
                reps: "8-10 reps",
                advice: "Provides more stability challenge than a barbell. Control the dumbbells through the full range of motion.",
            },
            Exercise {
                name: "One-Arm Dumbbell Rows",
                sets: "3 sets",
                reps: "8-10 reps / arm",
                advice: "Support yourself with one hand on a bench. Pull the dumbbell up towards your hip, not your chest.",
            },
            Exercise {
                name: "Arnold Press",
                sets: "3 sets",
                reps: "10-12 reps",
                advice: "This exercise involves rotation, so use a lighter weight to master the form first.",
            },
            Exercise {
                name: "Plank",
                sets: "3 sets",
                reps: "Hold to failure",
                advice: "Keep a straight line from your head to your heels. Don't let your hips sag.",
            },
            Exercise {
                name: "Treadmill Run",
                sets: "1 session",
                reps: "15 mins, moderate pace",
                advice: "Find a pace you can maintain for the full 15 minutes to build cardiovascular endurance.",
            },
        ],
    },
    DayPlan {
        day_index: 5,
        day_name: "Active Recovery & Cardio",
        focus: "Endurance & Flexibility",
        exercises: &[
            Exercise {
                name: "LISS Cardio: Treadmill Walk",
                sets: "1 session",
                reps: "45 mins, brisk walk",
                advice: "Keep your heart rate in a steady, low-intensity zone. This is great for burning fat and recovery.",
            },
            Exercise {
                name: "Foam Rolling",
                sets: "1 session",
                reps: "10-15 mins",
                advice: "Slowly roll over tight muscle groups to release tension and improve flexibility.",
            },
            Exercise {
                name: "Stretching",
                sets: "1 session",
                reps: "10-15 mins",
                advice: "Hold each stretch for 20-30 seconds. Focus on major muscle groups worked during the week.",
            },
        ],
    },
];

static PLAN_FR: [DayPlan; 5] = [
    DayPlan {
        day_index: 1,
        day_name: "Haut du corps (Poussée) & HIIT",
        focus: "Pectoraux, Épaules, Triceps",
        exercises: &[
            Exercise {
                name: "Développé couché à la barre",
                sets: "4 séries",
                reps: "6-8 reps",
                advice: "Gardez votre dos plat sur le banc et les pieds fermement au sol pour la stabilité.",
            },
            Exercise {
                name: "Développé incliné avec haltères",
                sets: "3 séries",
                reps: "8-12 reps",
                advice: "Concentrez-vous sur la contraction de vos pectoraux en haut du mouvement. Ne bloquez pas vos coudes.",
            },
            Exercise {
                name: "Développé militaire à la barre",
                sets: "4 séries",
                reps: "6-8 reps",
                advice: "Contractez vos abdominaux pour protéger votre bas du dos. Poussez la barre bien droit.",
            },
            Exercise {
                name: "Élévations latérales",
                sets: "3 séries",
                reps: "12-15 reps",
                advice: "Évitez d'utiliser l'élan. Soulevez les poids de manière contrôlée, en menant avec les coudes.",
            },
            Exercise {
                name: "Poussées à la poulie pour triceps",
                sets: "3 séries",
                reps: "10-15 reps",
                advice: "Gardez vos coudes près de vos flancs pendant tout le mouvement.",
            },
            Exercise {
                name: "HIIT: Sprints sur tapis roulant",
                sets: "10 tours",
                reps: "30s sprint, 60s marche",
                advice: "Donnez tout pendant les sprints et utilisez la marche pour récupérer votre souffle.",
            },
        ],
    },
    DayPlan {
        day_index: 2,
        day_name: "Haut du corps (Tirage) & LISS",
        focus: "Dos, Biceps",
        exercises: &[
            Exercise {
                name: "Rowing barre buste penché",
                sets: "4 séries",
                reps: "6-8 reps",
                advice: "Gardez le dos plat et tirez la barre vers le bas de votre poitrine. Serrez les omoplates.",
            },
            Exercise {
                name: "Tirage vertical à la poulie haute",
                sets: "4 séries",
                reps: "8-12 reps",
                advice: "Menez avec les coudes et tirez la barre vers le haut de votre poitrine. Concentrez-vous sur l'utilisation de vos muscles du dos.",
            },
            Exercise {
                name: "Rowing assis à la poulie basse",
                sets: "3 séries",
                reps: "10-12 reps",
                advice: "Gardez le torse droit et tirez la poignée vers votre ventre. Évitez de trop vous pencher en arrière.",
            },
            Exercise {
                name: "Face pulls",
                sets: "3 séries",
                reps: "15-20 reps",
                advice: "Tirez la corde vers votre visage, en visant à amener vos mains près de vos oreilles. Excellent pour la santé des épaules.",
            },
            Exercise {
                name: "Flexions des biceps avec haltères",
                sets: "3 séries",
                reps: "10-15 reps",
                advice: "Gardez vos coudes immobiles sur les côtés. Évitez de balancer les poids.",
            },
            Exercise {
                name: "LISS: Marche inclinée",
                sets: "1 session",
                reps: "30 mins, rythme constant",
                advice: "Maintenez un rythme constant sur une pente difficile pour garder votre fréquence cardiaque élevée.",
            },
        ],
    },
    DayPlan {
        day_index: 3,
        day_name: "Jour des jambes",
        focus: "Quadriceps, Ischio-jambiers, Fessiers",
        exercises: &[
            Exercise {
                name: "Squats à la barre",
                sets: "4 séries",
                reps: "6-8 reps",
                advice: "Gardez la poitrine haute et le dos droit. Descendez jusqu'à ce que vos cuisses soient au moins parallèles au sol.",
            },
            Exercise {
                name: "Soulevé de terre roumain",
                sets: "3 séries",
                reps: "8-12 reps",
                advice: "Basculez au niveau des hanches, en gardant les jambes presque droites (légère flexion). Sentez l'étirement dans vos ischio-jambiers.",
            },
            Exercise {
                name: "Presse à cuisses",
                sets: "3 séries",
                reps: "10-15 reps",
                advice: "Ne laissez pas le bas de votre dos s'arrondir sur le coussin. Contrôlez le poids en descendant.",
            },
            Exercise {
                name: "Flexions des jambes",
                sets: "3 séries",
                reps: "12-15 reps",
                advice: "Concentrez-vous sur la contraction de vos ischio-jambiers pour enrouler le poids. Évitez d'utiliser le bas de votre dos.",
            },
            Exercise {
                name: "Élévations des mollets",
                sets: "4 séries",
                reps: "15-20 reps",
                advice: "Obtenez un étirement complet en bas et une forte contraction en haut du mouvement.",
            },
            Exercise {
                name: "Récupération sur tapis roulant",
                sets: "1 session",
                reps: "15 mins, jogging léger",
                advice: "Abaissez progressivement votre fréquence cardiaque. Cela aide à la récupération.",
            },
        ],
    },
    DayPlan {
        day_index: 4,
        day_name: "Corps complet & Tronc",
        focus: "Force & Stabilité",
        exercises: &[
            Exercise {
                name: "Goblet Squats avec haltère",
                sets: "3 séries",
                reps: "8-10 reps",
                advice: "Tenez un haltère verticalement contre votre poitrine. Gardez le torse droit pendant que vous squattez.",
            },
            Exercise {
                name: "Développé couché avec haltères",
                sets: "3 séries",
                reps: "8-10 reps",
                advice: "Fournit un plus grand défi de stabilité qu'une barre. Contrôlez les haltères sur toute l'amplitude du mouvement.",
            },
            Exercise {
                name: "Rowing à un bras avec haltère",
                sets: "3 séries",
                reps: "8-10 reps / bras",
                advice: "Soutenez-vous avec une main sur un banc. Tirez l'haltère vers votre hanche, pas votre poitrine.",
            },
            Exercise {
                name: "Développé Arnold",
                sets: "3 séries",
                reps: "10-12 reps",
                advice: "Cet exercice implique une rotation, alors utilisez un poids plus léger pour maîtriser la forme d'abord.",
            },
            Exercise {
                name: "Planche",
                sets: "3 séries",
                reps: "Tenir jusqu'à l'échec",
                advice: "Gardez une ligne droite de la tête aux talons. Ne laissez pas vos hanches s'affaisser.",
            },
            Exercise {
                name: "Course sur tapis roulant",
                sets: "1 session",
                reps: "15 mins, rythme modéré",
                advice: "Trouvez un rythme que vous pouvez maintenir pendant les 15 minutes pour développer l'endurance cardiovasculaire.",
            },
        ],
    },
    DayPlan {
        day_index: 5,
        day_name: "Récupération active & Cardio",
        focus: "Endurance & Flexibilité",
        exercises: &[
            Exercise {
                name: "Cardio LISS: Marche sur tapis roulant",
                sets: "1 session",
                reps: "45 mins, marche rapide",
                advice: "Maintenez votre fréquence cardiaque dans une zone stable et de faible intensité. C'est excellent pour brûler les graisses et récupérer.",
            },
            Exercise {
                name: "Roulage avec rouleau en mousse",
                sets: "1 session",
                reps: "10-15 mins",
                advice: "Roulez lentement sur les groupes musculaires tendus pour relâcher la tension et améliorer la flexibilité.",
            },
            Exercise {
                name: "Étirements",
                sets: "1 session",
                reps: "10-15 mins",
                advice: "Maintenez chaque étirement pendant 20 à 30 secondes. Concentrez-vous sur les principaux groupes musculaires travaillés pendant la semaine.",
            },
        ],
    },
];
