pub const SKILL_VOCABULARY: [&str; 11] = [
    "javascript",
    "react",
    "node",
    "express",
    "mongodb",
    "html",
    "css",
    "git",
    "github",
    "rest",
    "api",
];

/// Returned by the fallback analysis regardless of the uploaded file.
pub const FALLBACK_MATCHED_SKILLS: [&str; 4] = ["javascript", "react", "html", "css"];

pub const FALLBACK_NOTE: &str = "Fallback analysis used due to PDF parser instability";
