//! One-shot notices shown after an action
//!
//! Notices travel in the response body; nothing is kept between requests.

use serde::Serialize;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
}

/// A message for the visitor, in the site's wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: &'static str,
}

impl Notice {
    const fn success(text: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            text,
        }
    }

    pub const fn post_shared() -> Self {
        Self::success("Bien joué! Votre instant de bonheur a bien été partagé")
    }

    pub const fn vote_recorded() -> Self {
        Self::success(
            "Bravo! vous avez voté pour un instant de bonheur qui devient ainsi un peu plus populaire grâce à vous",
        )
    }

    pub const fn comment_shared() -> Self {
        Self::success(
            "Merci ! vous avez partagé un commentaire sur un instant de bonheur avec nous - pourquoi ne pas lire et commenter d'autres instants de bonheur ?",
        )
    }

    pub const fn abuse_reported() -> Self {
        Self::success(
            "Merci de nous avoir averti de ce contenu, nous allons le traiter dès que possible",
        )
    }

    /// Shown when there is nothing to list yet
    pub const fn empty_listing() -> Self {
        Self {
            level: NoticeLevel::Info,
            text: "Nous n'avons pas trouvé d'instant de bonheur en base - pourquoi ne pas en partager un ?",
        }
    }
}
