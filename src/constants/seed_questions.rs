pub struct SeedQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub answer: i32,
    pub difficulty: &'static str,
}

pub const SEED_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        question: "What does HTML stand for?",
        options: &[
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Hyperlink and Text Management Language",
            "Home Tool Markup Language",
        ],
        answer: 0,
        difficulty: "easy",
    },
    SeedQuestion {
        question: "Which HTTP method is typically used to create a resource in a REST API?",
        options: &["GET", "POST", "DELETE", "OPTIONS"],
        answer: 1,
        difficulty: "easy",
    },
    SeedQuestion {
        question: "Which React hook runs side effects after render?",
        options: &["useState", "useMemo", "useEffect", "useRef"],
        answer: 2,
        difficulty: "medium",
    },
    SeedQuestion {
        question: "What does `git rebase` do?",
        options: &[
            "Deletes a branch",
            "Reapplies commits on top of another base commit",
            "Creates a new remote",
            "Reverts the last commit",
        ],
        answer: 1,
        difficulty: "medium",
    },
    SeedQuestion {
        question: "In MongoDB, what guarantees that no two documents share a field value?",
        options: &["A text index", "A capped collection", "A unique index", "A TTL index"],
        answer: 2,
        difficulty: "hard",
    },
];
