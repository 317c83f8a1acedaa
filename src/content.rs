//! Static site content: blog posts and policy pages.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::router::PolicyKey;

/// A blog post. Bodies are plain paragraphs; slugs are fixed at authoring
/// time and never derived, so routing stays stable if a title is reworded.
#[derive(Clone, Copy, Debug)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "understanding-emi",
        title: "Understanding EMIs: what your monthly payment really buys",
        date: "2025-06-02",
        excerpt: "The EMI formula splits every payment between interest and principal. Here is how the split shifts over the life of a loan.",
        body: &[
            "An equated monthly installment keeps your payment constant while the \
             interest share falls and the principal share grows each month.",
            "Early in a long loan almost the whole payment is interest, which is why \
             prepayments in the first years save the most money.",
            "Use the EMI calculator to compare tenures: a shorter tenure raises the \
             monthly payment but can cut total interest dramatically.",
        ],
    },
    BlogPost {
        slug: "bmi-limits",
        title: "BMI is a screening number, not a diagnosis",
        date: "2025-04-18",
        excerpt: "Body mass index is quick and comparable, but it cannot see muscle, frame, or age.",
        body: &[
            "BMI divides weight by height squared, so two people with identical \
             numbers can carry very different body compositions.",
            "Treat the bands as a prompt for a conversation with a professional, \
             not a verdict.",
        ],
    },
    BlogPost {
        slug: "percentage-mental-math",
        title: "Three percentage tricks for mental math",
        date: "2025-02-09",
        excerpt: "Swap the operands, move the decimal, and build from 10% blocks.",
        body: &[
            "X% of Y always equals Y% of X, so 8% of 50 is just 50% of 8: four.",
            "Ten percent is a decimal shift; build 5% by halving it and 1% by \
             shifting twice, then add the blocks you need.",
        ],
    },
];

/// Look up a post by its exact slug.
#[must_use]
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

/// Title and body paragraphs for a policy page.
#[must_use]
pub fn policy_text(key: PolicyKey) -> (&'static str, &'static [&'static str]) {
    match key {
        PolicyKey::Privacy => (
            "Privacy Policy",
            &[
                "CalcDeck runs entirely in your browser. Calculations, history, and \
                 saved dates are stored on your device and never sent to a server.",
                "Clearing your browser storage removes everything the app knows.",
            ],
        ),
        PolicyKey::Terms => (
            "Terms of Use",
            &[
                "CalcDeck's results are provided for information only and are not \
                 financial, medical, or legal advice.",
                "Double-check any number before acting on it.",
            ],
        ),
        PolicyKey::About => (
            "About CalcDeck",
            &[
                "CalcDeck is a collection of small, focused calculators with a \
                 shared history so you can revisit past results.",
                "Every tool works offline once the page has loaded.",
            ],
        ),
        PolicyKey::Disclaimer => (
            "Disclaimer",
            &[
                "Formulas follow standard conventions but institutions may round \
                 differently; quoted figures from a lender or clinic take precedence.",
            ],
        ),
    }
}
