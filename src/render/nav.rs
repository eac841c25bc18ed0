use std::fmt::Write;

use crate::content::PageContent;
use crate::render::html::escape;

pub const TEAM_ANCHOR: &str = "team-members";
pub const REPOSITORY_ANCHOR: &str = "git-repo";

/// Sidebar links generated from the section anchors, indented by section level.
pub fn sidebar(content: &PageContent) -> String {
    let mut out = String::from(r#"<nav class="sidebar"><h2>Navigation</h2><ul>"#);
    if !content.members.is_empty() {
        link(&mut out, 1, TEAM_ANCHOR, "Team Members");
    }
    for section in &content.sections {
        link(&mut out, section.level, &section.anchor, &section.title);
    }
    if content.repository.is_some() {
        link(&mut out, 1, REPOSITORY_ANCHOR, "GitHub Repository");
    }
    out.push_str("</ul></nav>");
    out
}

fn link(out: &mut String, level: u8, anchor: &str, title: &str) {
    let _ = write!(
        out,
        r##"<li class="nav-level-{}"><a href="#{}">{}</a></li>"##,
        level.clamp(1, 3),
        escape(anchor),
        escape(title)
    );
}
