//! Site content loading
//!
//! Parses the site's TOML content document into [`SiteContent`] and
//! sanitizes it: out-of-range values are clamped and structurally empty
//! entries are dropped, each with a warning. Bad content degrades the page,
//! it never brings it down.

use folio_types::SiteContent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

/// Parse and sanitize the site's TOML content document.
pub fn load_site_content(raw: &str) -> Result<SiteContent, ContentError> {
    let mut content: SiteContent =
        toml::from_str(raw).map_err(|source| ContentError::Parse { source })?;
    sanitize(&mut content);
    Ok(content)
}

fn sanitize(content: &mut SiteContent) {
    for skill in &mut content.skills {
        if skill.percent > 100 {
            tracing::warn!(
                name = %skill.name,
                percent = skill.percent,
                "skill percent clamped to 100"
            );
            skill.percent = 100;
        }
    }
    content.skills.retain(|skill| {
        let keep = !skill.name.trim().is_empty();
        if !keep {
            tracing::warn!(percent = skill.percent, "dropping skill with empty name");
        }
        keep
    });
    content.stats.retain(|stat| {
        let keep = !stat.label.trim().is_empty();
        if !keep {
            tracing::warn!(target = stat.target, "dropping stat with empty label");
        }
        keep
    });
    content.testimonials.retain(|testimonial| {
        let keep = !testimonial.quote.trim().is_empty();
        if !keep {
            tracing::warn!(author = %testimonial.author, "dropping testimonial with empty quote");
        }
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let content = load_site_content(
            r#"
            [profile]
            name = "Ada Example"
            role = "Systems Programmer"
            about = ["First paragraph.", "Second paragraph."]
            location = "Berlin"

            [hero]
            headline = "Hi, I'm Ada"
            typed_lines = ["Systems Programmer", "Open Source Maintainer"]

            [[stats]]
            label = "Projects"
            target = 250
            suffix = "+"

            [[skills]]
            name = "Rust"
            percent = 90

            [[projects]]
            title = "folio"
            summary = "This site."
            tags = ["rust", "wasm"]

            [[testimonials]]
            quote = "Ships."
            author = "A Colleague"
            role = "Engineer"

            [contact]
            email = "ada@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(content.profile.name, "Ada Example");
        assert_eq!(content.hero.typed_lines.len(), 2);
        assert_eq!(content.stats[0].target, 250);
        assert_eq!(content.stats[0].suffix_str(), "+");
        assert_eq!(content.skills[0].percent, 90);
        assert_eq!(content.projects[0].tags, ["rust", "wasm"]);
        assert_eq!(content.contact.email, "ada@example.com");
    }

    #[test]
    fn clamps_out_of_range_skill_percent() {
        let content = load_site_content(
            r#"
            [[skills]]
            name = "Enthusiasm"
            percent = 150
            "#,
        )
        .unwrap();
        assert_eq!(content.skills[0].percent, 100);
    }

    #[test]
    fn drops_stats_with_empty_labels() {
        let content = load_site_content(
            r#"
            [[stats]]
            label = ""
            target = 10

            [[stats]]
            label = "Kept"
            target = 20
            "#,
        )
        .unwrap();
        assert_eq!(content.stats.len(), 1);
        assert_eq!(content.stats[0].label, "Kept");
    }

    #[test]
    fn drops_skills_with_empty_names() {
        let content = load_site_content(
            r#"
            [[skills]]
            name = "  "
            percent = 50
            "#,
        )
        .unwrap();
        assert!(content.skills.is_empty());
    }

    #[test]
    fn drops_testimonials_with_empty_quotes() {
        let content = load_site_content(
            r#"
            [[testimonials]]
            quote = ""
            author = "Nobody"
            "#,
        )
        .unwrap();
        assert!(content.testimonials.is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = load_site_content("profile = not toml").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn empty_document_defaults_every_section() {
        let content = load_site_content("").unwrap();
        assert!(content.stats.is_empty());
        assert!(content.skills.is_empty());
        assert!(content.hero.typed_lines.is_empty());
    }
}
