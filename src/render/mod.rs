//! Static HTML rendering of a page for a given carousel state.

pub mod html;
pub mod markdown;
pub mod nav;
pub mod style;
pub mod table;
pub mod widgets;

use std::fmt::Write;

use tracing::{info, warn};

use crate::content::{Block, MetricsTable, PageContent, Section};
use crate::render::html::escape;
use crate::resolve::ImageResolver;
use crate::session::Session;

/// Renders the whole page as one HTML document.
///
/// Each carousel starts on the image its controller in `session` points at.
/// Images that cannot be resolved are replaced by inline messages; rendering
/// itself never fails.
pub fn render_page(content: &PageContent, session: &Session, resolver: &dyn ImageResolver) -> String {
    let mut body = String::new();

    let _ = write!(body, r#"<div class="page-title">{}</div>"#, escape(&content.title));
    if !content.members.is_empty() {
        let _ = write!(body, r#"<h3 id="{}">Team Members</h3><div class="names-list">"#, nav::TEAM_ANCHOR);
        for member in &content.members {
            let _ = write!(
                body,
                r#"<span><a href="{}" target="_blank">{}</a></span> "#,
                escape(&member.link),
                escape(&member.name)
            );
        }
        body.push_str("</div>");
    }

    for section in &content.sections {
        render_section(&mut body, section, content, session, resolver);
    }

    if let Some(repository) = &content.repository {
        let _ = write!(
            body,
            r#"<h3 id="{}">GitHub Repository</h3><p><a href="{url}"><img src="https://img.shields.io/badge/GitHub-Repository-blue" alt="GitHub Repository"></a></p><div class="footer"><a href="{url}">{url}</a></div>"#,
            nav::REPOSITORY_ANCHOR,
            url = escape(repository),
        );
    }

    info!(sections = content.sections.len(), carousels = session.len(), "rendered page");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{sidebar}
<main>
{body}
</main>
<script>{script}</script>
</body>
</html>
"#,
        title = escape(&content.title),
        style = style::STYLESHEET,
        sidebar = nav::sidebar(content),
        script = style::CAROUSEL_SCRIPT,
    )
}

fn render_section(out: &mut String, section: &Section, content: &PageContent, session: &Session, resolver: &dyn ImageResolver) {
    let class = match section.level {
        1 => "title",
        2 => "section-header",
        _ => "subsection-header",
    };
    let _ = write!(out, r#"<div class="{class}" id="{}">{}</div>"#, escape(&section.anchor), escape(&section.title));

    for block in &section.blocks {
        match block {
            Block::Markdown { text } => out.push_str(&markdown::to_html(text)),
            Block::Metrics(t) => out.push_str(&table::metrics(t)),
            Block::Scores { title, runs } => out.push_str(&table::metrics(&MetricsTable::from_runs(title.as_str(), runs))),
            Block::Figure(figure) => out.push_str(&widgets::image(resolver, &figure.image, &figure.caption)),
            Block::Gallery { id } => match (content.gallery(id), session.carousel(id)) {
                (Some(gallery), Some(state)) => out.push_str(&widgets::carousel(resolver, gallery, state)),
                _ => {
                    warn!(gallery = %id, "no carousel for gallery block");
                    let _ = write!(out, r#"<div class="image-error">Unknown gallery {}</div>"#, escape(id));
                }
            },
            Block::Video(video) => out.push_str(&widgets::video(&video.url)),
            Block::Contributions { rows } => out.push_str(&table::contributions(rows)),
            Block::References { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    let _ = write!(out, "<p>[{}] {}</p>", i + 1, escape(entry));
                }
            }
        }
    }
}
