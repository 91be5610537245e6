// HTML for the page, built from the static project table.
//
// Element ids and `data-*` attributes below are the contract with the web
// layer, which looks elements up by them after mounting.

use super::constants::{ARTIST_NAME, PLACEHOLDER_TEXT, SOCIAL_URL};
use super::projects::{Project, PORTRAIT_IMAGE, PROJECTS};
use super::selection::{DetailView, ProjectDetail, Selection};
use std::fmt::Write;

pub const PAGE_ROOT_ID: &str = "page-root";
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_PREVIEW_ID: &str = "cursor-preview";
pub const CURSOR_BLEND_ID: &str = "cursor-blend";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PROJECT_LIST_ID: &str = "project-list";
pub const DETAIL_PANE_ID: &str = "detail-pane";
pub const DETAIL_PLACEHOLDER_ID: &str = "detail-placeholder";
pub const CONTACT_FORM_ID: &str = "contact-form";

pub const TRACK_ATTR: &str = "data-track";
pub const PROJECT_ID_ATTR: &str = "data-project-id";
pub const SELECTED_CLASS: &str = "selected";

pub const SECTION_ANCHORS: [(&str, &str); 3] =
    [("work", "Work"), ("about", "About"), ("contact", "Contact")];

const ABOUT_TEXT: &str = "Max Pirrit is a visionary artist whose work transcends traditional \
boundaries, blending digital and traditional mediums to create captivating visual narratives. \
With a keen eye for detail and a passion for exploring the human experience, Max's art invites \
viewers to lose themselves in worlds where reality and imagination intertwine.";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page_html(selection: &Selection) -> String {
    let mut html = String::new();
    _ = write!(html, "<div id=\"{PAGE_ROOT_ID}\" class=\"page\">");
    html.push_str(&cursor_html());
    html.push_str(&header_html());
    html.push_str("<main class=\"content\"><div class=\"container\">");
    html.push_str(&work_html(selection));
    html.push_str(&about_html());
    html.push_str(&contact_html());
    html.push_str("</div></main>");
    html.push_str(&footer_html());
    html.push_str("</div>");
    html
}

/// Blend-mode dot plus the hover cursor with its image preview.
pub fn cursor_html() -> String {
    format!(
        "<div id=\"{CURSOR_BLEND_ID}\" class=\"cursor-blend\"></div>\
<div id=\"{CURSOR_ID}\" class=\"cursor\">\
<div id=\"{CURSOR_DOT_ID}\" class=\"cursor-dot\"></div>\
<img id=\"{CURSOR_PREVIEW_ID}\" class=\"cursor-preview\" alt=\"Preview\" style=\"display:none\">\
</div>"
    )
}

pub fn header_html() -> String {
    let mut nav = String::new();
    for (anchor, label) in SECTION_ANCHORS {
        _ = write!(nav, "<li><a href=\"#{anchor}\">{label}</a></li>");
    }
    format!(
        "<header class=\"site-header\"><div class=\"bar\">\
<h1 class=\"brand\">{}</h1><nav><ul class=\"nav\">{nav}</ul></nav></div>\
<div id=\"{PROGRESS_BAR_ID}\" class=\"progress-bar\" style=\"transform: scaleX(0)\"></div>\
</header>",
        escape(&ARTIST_NAME.to_uppercase())
    )
}

/// Selector for tracked elements of one kind, e.g. `"item"`.
pub fn track_selector(kind: &str) -> String {
    format!("[{TRACK_ATTR}=\"{kind}\"]")
}

pub fn project_item_html(project: &Project, selected: bool) -> String {
    let class = if selected {
        format!("project-item {SELECTED_CLASS}")
    } else {
        "project-item".to_string()
    };
    format!(
        "<div class=\"{class}\" {TRACK_ATTR}=\"item\" {PROJECT_ID_ATTR}=\"{id}\">\
<button type=\"button\" class=\"project-button\" {PROJECT_ID_ATTR}=\"{id}\">\
<h3>{title}</h3><p class=\"date\">{date}</p>\
<div class=\"accent\" style=\"background-color: {color}\"></div>\
</button></div>",
        id = project.id,
        title = escape(project.title),
        date = escape(project.date),
        color = escape(project.color),
    )
}

pub fn project_list_html(selection: &Selection) -> String {
    PROJECTS
        .iter()
        .map(|p| project_item_html(p, selection.is_selected(p.id)))
        .collect()
}

pub fn detail_html(view: &DetailView) -> String {
    match view {
        DetailView::Placeholder => format!(
            "<div id=\"{DETAIL_PLACEHOLDER_ID}\" class=\"detail-placeholder\" style=\"opacity: 0\">{}</div>",
            escape(PLACEHOLDER_TEXT)
        ),
        DetailView::Project(detail) => project_detail_html(detail),
    }
}

fn project_detail_html(detail: &ProjectDetail) -> String {
    let mut html = format!(
        "<div class=\"project-detail\" {TRACK_ATTR}=\"detail\">\
<h2>{}</h2><p class=\"description\">{}</p><div class=\"categories\">",
        escape(detail.title),
        escape(detail.description)
    );
    for category in &detail.categories {
        _ = write!(html, "<span class=\"chip\">{}</span>", escape(category));
    }
    html.push_str("</div><div class=\"gallery\">");
    for image in &detail.images {
        _ = write!(
            html,
            "<img src=\"{}\" alt=\"{}\" width=\"1200\" height=\"800\" class=\"gallery-image\">",
            escape(image.src),
            escape(&image.alt)
        );
    }
    html.push_str("</div></div>");
    html
}

fn work_html(selection: &Selection) -> String {
    format!(
        "<section id=\"work\" class=\"section\"><h2 class=\"section-title\">Selected Works</h2>\
<div class=\"work-grid\"><div id=\"{PROJECT_LIST_ID}\">{}</div>\
<div id=\"{DETAIL_PANE_ID}\" class=\"detail-pane\">{}</div></div></section>",
        project_list_html(selection),
        detail_html(&selection.detail())
    )
}

fn about_html() -> String {
    let first_name = ARTIST_NAME.split_whitespace().next().unwrap_or(ARTIST_NAME);
    format!(
        "<section id=\"about\" class=\"section\"><h2 class=\"section-title\">About {}</h2>\
<div class=\"about-grid\"><p class=\"bio\">{}</p>\
<img src=\"{}\" alt=\"{}\" class=\"portrait\"></div></section>",
        escape(first_name),
        escape(ABOUT_TEXT),
        escape(PORTRAIT_IMAGE),
        escape(ARTIST_NAME)
    )
}

fn contact_html() -> String {
    format!(
        "<section id=\"contact\" class=\"section\"><h2 class=\"section-title\">Get in Touch</h2>\
<form id=\"{CONTACT_FORM_ID}\" class=\"contact-form\">\
<input type=\"text\" name=\"name\" placeholder=\"Name\">\
<input type=\"email\" name=\"email\" placeholder=\"Email\">\
<textarea name=\"message\" placeholder=\"Message\"></textarea>\
<button type=\"submit\">Send Message</button>\
</form></section>"
    )
}

fn footer_html() -> String {
    format!(
        "<footer class=\"site-footer\"><div class=\"bar\">\
<p>&copy; 2024 {}. All rights reserved.</p>\
<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Instagram</a>\
</div></footer>",
        escape(ARTIST_NAME),
        escape(SOCIAL_URL)
    )
}
