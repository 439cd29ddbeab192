// src/application/commands/lead_magnets/draft.rs
use crate::{
    application::validation::{MAX_SLUG_LEN, MAX_TEXT_LEN, ValidationErrors},
    domain::lead_magnet::{LeadMagnetContent, value_objects::is_url_safe},
};

/// Draft content as supplied by a client. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub prompt: Option<String>,
    pub first_question: Option<String>,
    pub email_capture: Option<String>,
}

impl DraftFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.body.is_none()
            && self.prompt.is_none()
            && self.first_question.is_none()
            && self.email_capture.is_none()
    }

    pub(super) fn validate_into(&self, errors: &mut ValidationErrors) {
        let fields = [
            ("draftTitle", &self.title),
            ("draftSubtitle", &self.subtitle),
            ("draftBody", &self.body),
            ("draftPrompt", &self.prompt),
            ("draftFirstQuestion", &self.first_question),
            ("draftEmailCapture", &self.email_capture),
        ];
        for (field, value) in fields {
            errors.check_max_len(field, value.as_deref(), MAX_TEXT_LEN);
        }
    }

    pub(super) fn apply_to(self, mut content: LeadMagnetContent) -> LeadMagnetContent {
        if let Some(title) = self.title {
            content.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            content.subtitle = subtitle;
        }
        if let Some(body) = self.body {
            content.body = body;
        }
        if let Some(prompt) = self.prompt {
            content.prompt = prompt;
        }
        if let Some(first_question) = self.first_question {
            content.first_question = first_question;
        }
        if let Some(email_capture) = self.email_capture {
            content.email_capture = email_capture;
        }
        content
    }
}

/// A blank slug counts as absent; the caller derives one instead.
pub(super) fn provided_slug(slug: Option<String>) -> Option<String> {
    slug.filter(|slug| !slug.trim().is_empty())
}

pub(super) fn validate_slug_input(errors: &mut ValidationErrors, slug: Option<&str>) {
    let Some(slug) = slug.filter(|slug| !slug.trim().is_empty()) else {
        return;
    };
    if slug.len() > MAX_SLUG_LEN {
        errors.push("slug", format!("must be at most {MAX_SLUG_LEN} characters"));
    } else if !is_url_safe(slug) {
        errors.push(
            "slug",
            "may only contain lowercase letters, digits and hyphens",
        );
    }
}
