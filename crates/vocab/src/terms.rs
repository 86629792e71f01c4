//! Fixed technology and profession vocabularies.
//!
//! All entries are pre-normalized: lowercase, ascii-folded, no punctuation
//! beyond `#`, `.` and `-`.

use once_cell::sync::Lazy;

/// Technology, framework and platform terms seen in developer-job ads.
static TECH_TERMS: &[&str] = &[
    "react",
    "angular",
    "vue",
    "svelte",
    "javascript",
    "typescript",
    "node",
    "nodejs",
    "java",
    "kotlin",
    "python",
    "c#",
    "csharp",
    "dotnet",
    ".net",
    "asp.net",
    "swift",
    "swiftui",
    "php",
    "ruby",
    "rust",
    "golang",
    "scala",
    "html",
    "css",
    "sass",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "graphql",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "linux",
    "android",
    "ios",
    "flutter",
];

/// Profession and role terms, Swedish and English.
static PROFESSION_TERMS: &[&str] = &[
    "utvecklare",
    "developer",
    "programmerare",
    "engineer",
    "ingenjor",
    "systemutvecklare",
    "mjukvaruutvecklare",
    "webbutvecklare",
    "apputvecklare",
    "frontend",
    "backend",
    "fullstack",
    "full-stack",
    "devops",
    "arkitekt",
    "testare",
    "designer",
    "konsult",
];

/// Technology/framework vocabulary.
pub fn tech_terms() -> &'static [&'static str] {
    TECH_TERMS
}

/// Profession/role vocabulary.
pub fn profession_terms() -> &'static [&'static str] {
    PROFESSION_TERMS
}

/// Every vocabulary term: tech, professions and city names combined.
///
/// Enumeration order is tech → professions → cities, which also fixes the
/// tie-break order for typo correction.
pub fn combined_terms() -> &'static [&'static str] {
    static ALL: Lazy<Vec<&'static str>> = Lazy::new(|| {
        TECH_TERMS
            .iter()
            .chain(PROFESSION_TERMS.iter())
            .copied()
            .chain(crate::city_names())
            .collect()
    });
    &ALL
}
