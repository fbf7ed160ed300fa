// tests/engine_properties.rs
//
// Behavioral properties of the copy scorer, exercised through the public API
// with the built-in keyword tables.

use aso_copy_scorer::analyze::recommend::{MSG_CATEGORY, MSG_NUMERIC};
use aso_copy_scorer::{score_copy, ScoreInput};

fn input(app: &str, category: &str, captions: [&str; 6]) -> ScoreInput {
    ScoreInput::new(app, category, captions)
}

const PRODUCTIVITY_CAPTIONS: [&str; 6] = [
    "Plan every task in one planner",
    "Focus on deadlines and projects",
    "Smart reminders for your schedule",
    "Calendar and notes together",
    "Build better habits",
    "A workflow that keeps tasks moving",
];

fn varied_inputs() -> Vec<ScoreInput> {
    vec![
        input("FocusFlow", "Productivity", PRODUCTIVITY_CAPTIONS),
        input("", "", ["", "", "", "", "", ""]),
        input("X", "Unknown", ["!!!!", "????", "?!?!", "!", "?", "..."]),
        input(
            "Budgetly",
            "finance",
            [
                "Download free now",
                "Try it today, start now",
                "Save 50% on bills",
                "Track money 10x faster",
                "Love your budget again",
                "Join 1M users",
            ],
        ),
        input(
            "Über Fit",
            "Health & Fitness",
            [
                "Trainiere jeden Tag",
                "Schlaf besser",
                "Kalorien zählen",
                "Herzfrequenz im Blick",
                "Pasos diarios",
                "健康的な生活",
            ],
        ),
        input(
            "Wordy",
            "Education",
            [
                "learn learn learn learn learn learn learn learn learn learn learn learn",
                "practice practice practice practice practice practice practice practice",
                "quiz quiz quiz quiz quiz quiz quiz quiz quiz quiz quiz quiz quiz quiz",
                "study study study study study study study study study study study",
                "skills skills skills skills skills skills skills skills skills skills",
                "antidisestablishmentarianismically-long-hyphenated-word",
            ],
        ),
    ]
}

#[test]
fn scores_and_sub_scores_stay_in_bounds() {
    for inp in varied_inputs() {
        let r = score_copy(&inp);
        let b = r.breakdown;
        assert!(r.score <= 100, "{inp:?} -> {r:?}");
        for (name, v) in [
            ("cta", b.cta),
            ("benefit", b.benefit),
            ("clarity", b.clarity),
            ("numeric", b.numeric),
            ("emotion", b.emotion),
        ] {
            assert!(v <= 20, "{name}={v} for {inp:?}");
        }
        assert!(b.category <= 25, "category={} for {inp:?}", b.category);
    }
}

#[test]
fn recommendation_is_never_empty() {
    for inp in varied_inputs() {
        assert!(!score_copy(&inp).recommendation.is_empty(), "{inp:?}");
    }
}

#[test]
fn identical_input_gives_identical_output() {
    for inp in varied_inputs() {
        assert_eq!(score_copy(&inp), score_copy(&inp.clone()));
    }
}

#[test]
fn screenshot_filenames_are_not_numeric_proof() {
    let captions = [
        "screenshot_1.png",
        "screenshot_2.png",
        "screenshot_3.png",
        "screenshot_4.png",
        "screenshot_5.png",
        "screenshot_6.png",
    ];
    let r = score_copy(&input("FocusFlow", "Productivity", captions));

    assert!(r.breakdown.numeric <= 5, "numeric = {}", r.breakdown.numeric);
    assert!(r.score <= 30, "score = {} ({:?})", r.score, r.breakdown);
    assert!(
        r.recommendation.iter().any(|m| m == MSG_NUMERIC),
        "expected numeric proof-point advice: {:?}",
        r.recommendation
    );
}

#[test]
fn matching_category_beats_mismatched_category() {
    let matched = score_copy(&input("FocusFlow", "Productivity", PRODUCTIVITY_CAPTIONS));
    let mismatched = score_copy(&input("FocusFlow", "Finance", PRODUCTIVITY_CAPTIONS));

    assert!(
        matched.breakdown.category > mismatched.breakdown.category,
        "category: {} vs {}",
        matched.breakdown.category,
        mismatched.breakdown.category
    );
    assert!(
        matched.score > mismatched.score,
        "score: {} vs {}",
        matched.score,
        mismatched.score
    );
    assert!(mismatched.recommendation.iter().any(|m| m == MSG_CATEGORY));
}

#[test]
fn unknown_category_contributes_nothing() {
    let r = score_copy(&input("FocusFlow", "Weather", PRODUCTIVITY_CAPTIONS));
    assert_eq!(r.breakdown.category, 0);
}

#[test]
fn category_lookup_ignores_case_and_padding() {
    let a = score_copy(&input("FocusFlow", "  PRODUCTIVITY ", PRODUCTIVITY_CAPTIONS));
    let b = score_copy(&input("FocusFlow", "productivity", PRODUCTIVITY_CAPTIONS));
    assert_eq!(a.breakdown.category, b.breakdown.category);
    assert!(a.breakdown.category > 0);
}

#[test]
fn one_more_cta_keyword_adds_exactly_five() {
    let base = [
        "Download FocusFlow",
        "Plan your week",
        "Track habits",
        "Write notes",
        "See progress",
        "Stay on track",
    ];
    let mut more = base;
    more[5] = "Try FocusFlow";

    let before = score_copy(&input("FocusFlow", "Productivity", base)).breakdown.cta;
    let after = score_copy(&input("FocusFlow", "Productivity", more)).breakdown.cta;
    assert_eq!(before, 5);
    assert_eq!(after, before + 5);
}

#[test]
fn cta_is_capped_at_twenty() {
    let r = score_copy(&input(
        "Go",
        "Games",
        [
            "Download now",
            "Try free",
            "Start today",
            "Join now",
            "Install free",
            "Get it now",
        ],
    ));
    assert_eq!(r.breakdown.cta, 20);
}

#[test]
fn eight_words_without_punctuation_hit_top_clarity_bands() {
    // Notes Utilities Write ideas anywhere sync every device = 8 words,
    // average length 47/8: 10 + 6 + 2 + 2 = 20
    let r = score_copy(&input(
        "Notes",
        "Utilities",
        ["Write", "ideas", "anywhere", "sync", "every", "device"],
    ));
    assert_eq!(r.breakdown.clarity, 20);

    // Seven words fall into the wider 5..=60 band: 10 + 3 + 2 + 2 = 17
    let r = score_copy(&input(
        "Notes",
        "Utilities",
        ["Write", "ideas", "anywhere", "sync", "every", ""],
    ));
    assert_eq!(r.breakdown.clarity, 17);

    // Eight short words keep both bands but lose the word-length bonus: 10 + 6 + 2 = 18
    let r = score_copy(&input("a", "b", ["c", "d", "e", "f", "g", "h"]));
    assert_eq!(r.breakdown.clarity, 18);
}

#[test]
fn substrings_never_count_as_keywords() {
    let r = score_copy(&input(
        "Widgetry",
        "Games",
        [
            "Subcategory entry",
            "Freedom in the countryside",
            "Lovely funding",
            "Saved uploads",
            "Playground gameplay",
            "Levelling",
        ],
    ));
    let b = r.breakdown;
    assert_eq!(b.cta, 0, "{b:?}");
    assert_eq!(b.benefit, 0, "{b:?}");
    assert_eq!(b.emotion, 0, "{b:?}");
    assert_eq!(b.category, 0, "{b:?}");
}

#[test]
fn repeated_numeric_signal_counts_once() {
    let r = score_copy(&input(
        "Stars",
        "Games",
        [
            "Rated 5 stars",
            "5 stars again",
            "Still 5 stars",
            "plain",
            "words",
            "here",
        ],
    ));
    assert_eq!(r.breakdown.numeric, 5);
}
