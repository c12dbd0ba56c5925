//! HTML rendering — [`Renderer`] and the per-section builders.
//!
//! # Document layout
//!
//! | Block       | Gated on                      | Heading                  |
//! |-------------|-------------------------------|--------------------------|
//! | head        | always                        | `<title>`                |
//! | header      | always                        | `<h1>` name              |
//! | education   | `education` (+ `highSchool`)  | Education                |
//! | coursework  | `coursework`                  | Coursework               |
//! | skills      | `skills`                      | Skills                   |
//! | experience  | `experience`                  | Experience               |
//! | projects    | `projects`                    | Projects                 |
//! | hobbies     | `hobbies`                     | Interests & Activities   |
//! | footer      | always                        | generation date          |
//!
//! Every gate goes through [`present`], so an absent key, an empty list and
//! an empty string all suppress their block the same way.
//!
//! Field values are inserted verbatim unless [`EscapeMode::Html`] is set.
//! A resume from an untrusted source can therefore inject arbitrary markup
//! into the default output.

use chrono::{Local, NaiveDate};

use resume_core::types::{
    Coursework, Education, Experience, HighSchool, Hobby, Presence, Project, ResumeRecord,
    SkillCategory, Text,
};

use crate::options::{EscapeMode, RenderOptions};

// ---------------------------------------------------------------------------
// Fixed markup
// ---------------------------------------------------------------------------

const STYLE: &str = include_str!("assets/style.css");

const HEAD_OPEN: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>";

const BODY_OPEN: &str = "    </style>\n</head>\n<body>\n    <div class=\"header\">\n";

const DOCUMENT_CLOSE: &str = "</body>\n</html>";

/// `strftime`-style footer date, e.g. `January 05, 2024`.
pub const FOOTER_DATE_FORMAT: &str = "%B %d, %Y";

// ---------------------------------------------------------------------------
// Presence gate
// ---------------------------------------------------------------------------

/// Returns the inner value if it should be rendered.
///
/// This is the single gate for sections and optional sub-blocks.
pub fn present<T: Presence>(value: &Option<T>) -> Option<&T> {
    value.as_ref().filter(|v| v.is_present())
}

// ---------------------------------------------------------------------------
// Output buffer
// ---------------------------------------------------------------------------

struct HtmlBuf {
    out: String,
    escape: EscapeMode,
}

impl HtmlBuf {
    fn new(escape: EscapeMode) -> Self {
        Self { out: String::with_capacity(STYLE.len() * 2), escape }
    }

    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn text(&mut self, value: &Text) {
        match (self.escape, value) {
            (EscapeMode::Verbatim, Text::Str(s)) => self.out.push_str(s),
            (EscapeMode::Verbatim, other) => self.out.push_str(&other.to_string()),
            (EscapeMode::Html, other) => {
                self.out.push_str(&tera::escape_html(&other.to_string()))
            }
        }
    }

    /// Absent leaves render as nothing.
    fn field(&mut self, value: &Option<Text>) {
        if let Some(value) = value {
            self.text(value);
        }
    }

    fn open_section(&mut self, title: &str) {
        self.raw("    <div class=\"section\">\n        <h2 class=\"section-title\">");
        self.raw(title);
        self.raw("</h2>\n");
    }

    fn close_section(&mut self) {
        self.raw("    </div>\n");
    }

    /// `<ul class="details">` with one `<li>` per item, opened at `indent`.
    fn bullet_list(&mut self, indent: &str, items: &[Text]) {
        self.raw(indent);
        self.raw("<ul class=\"details\">\n");
        for item in items {
            self.raw(indent);
            self.raw("    <li>");
            self.text(item);
            self.raw("</li>\n");
        }
        self.raw(indent);
        self.raw("</ul>\n");
    }

    /// A flex container of pill spans, opened at 12 spaces.
    fn pill_list(&mut self, container_class: &str, pill_class: &str, items: &[Text]) {
        self.raw("            <div class=\"");
        self.raw(container_class);
        self.raw("\">\n");
        for item in items {
            self.raw("                <span class=\"");
            self.raw(pill_class);
            self.raw("\">");
            self.text(item);
            self.raw("</span>\n");
        }
        self.raw("            </div>\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders resume records into self-contained HTML documents.
///
/// Holds no state besides its options; one instance can render any number of
/// records, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a complete HTML document. Never fails.
    pub fn render(&self, resume: &ResumeRecord) -> String {
        let generated_on = self
            .options
            .generated_on
            .unwrap_or_else(|| Local::now().date_naive());

        let mut buf = HtmlBuf::new(self.options.escape);
        head(&mut buf, resume);
        header(&mut buf, resume);

        if let Some(entries) = present(&resume.education) {
            education(&mut buf, entries, present(&resume.high_school));
        }
        if let Some(coursework_block) = present(&resume.coursework) {
            coursework(&mut buf, coursework_block);
        }
        if let Some(categories) = present(&resume.skills) {
            skills(&mut buf, categories);
        }
        if let Some(jobs) = present(&resume.experience) {
            experience(&mut buf, jobs);
        }
        if let Some(entries) = present(&resume.projects) {
            projects(&mut buf, entries);
        }
        if let Some(entries) = present(&resume.hobbies) {
            hobbies(&mut buf, entries);
        }

        footer(&mut buf, generated_on);
        let html = buf.finish();
        tracing::debug!(bytes = html.len(), %generated_on, "rendered resume");
        html
    }
}

/// Render with default options: verbatim text, footer dated today.
pub fn render(resume: &ResumeRecord) -> String {
    Renderer::default().render(resume)
}

/// Render with explicit options.
pub fn render_with(resume: &ResumeRecord, options: &RenderOptions) -> String {
    Renderer::new(options.clone()).render(resume)
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn head(buf: &mut HtmlBuf, resume: &ResumeRecord) {
    buf.raw(HEAD_OPEN);
    match &resume.name {
        Some(name) => buf.text(name),
        None => buf.raw("Resume"),
    }
    buf.raw(" - Resume</title>\n    <style>\n");
    buf.raw(STYLE);
    buf.raw(BODY_OPEN);
}

fn header(buf: &mut HtmlBuf, resume: &ResumeRecord) {
    buf.raw("        <h1>");
    buf.field(&resume.name);
    buf.raw("</h1>\n");

    // Each contact field carries its own separator; this is positional, not a join.
    buf.raw("        <div class=\"contact-info\">\n");
    if let Some(email) = present(&resume.email) {
        buf.raw("            <span>");
        buf.text(email);
        buf.raw("</span> | \n");
    }
    if let Some(linkedin) = present(&resume.linkedin) {
        buf.raw("            <span><a href='https://");
        buf.text(linkedin);
        buf.raw("'>");
        buf.text(linkedin);
        buf.raw("</a></span> | \n");
    }
    if let Some(github) = present(&resume.github) {
        buf.raw("            <span><a href='https://");
        buf.text(github);
        buf.raw("'>");
        buf.text(github);
        buf.raw("</a></span>");
    }
    if let Some(website) = present(&resume.website) {
        buf.raw(" | <span><a href='");
        buf.text(website);
        buf.raw("'>");
        buf.text(website);
        buf.raw("</a></span>");
    }
    buf.raw("\n        </div>\n");

    if let Some(updated) = present(&resume.last_updated) {
        buf.raw("        <div><small>Last Updated: ");
        buf.text(updated);
        buf.raw("</small></div>\n");
    }
    buf.raw("    </div>\n");
}

fn education(buf: &mut HtmlBuf, entries: &[Education], high_school: Option<&HighSchool>) {
    buf.open_section("Education");
    for edu in entries {
        education_entry(buf, &edu.institution, &edu.date, &edu.degree, &edu.gpa);
    }
    if let Some(hs) = high_school {
        education_entry(buf, &hs.name, &hs.date, &hs.note, &hs.gpa);
    }
    buf.close_section();
}

fn education_entry(
    buf: &mut HtmlBuf,
    institution: &Option<Text>,
    date: &Option<Text>,
    degree: &Option<Text>,
    gpa: &Option<Text>,
) {
    buf.raw("        <div class=\"education\">\n            <div class=\"edu-header\">\n                <span class=\"institution\">");
    buf.field(institution);
    buf.raw("</span>\n                <span class=\"date\">");
    buf.field(date);
    buf.raw("</span>\n            </div>\n            <div class=\"degree\">");
    buf.field(degree);
    buf.raw("</div>\n");
    if let Some(gpa) = present(gpa) {
        buf.raw("            <div class=\"description\">\n                <p>GPA: ");
        buf.text(gpa);
        buf.raw("</p>\n            </div>\n");
    }
    buf.raw("        </div>\n");
}

fn coursework(buf: &mut HtmlBuf, block: &Coursework) {
    buf.open_section("Coursework");
    if let Some(courses) = present(&block.courses) {
        buf.raw("        <div class=\"skill-category\">\n");
        buf.pill_list("skills-list", "skill", courses);
        buf.raw("        </div>\n");
    }
    if let Some(awards) = present(&block.awards) {
        buf.raw("        <h3>Awards</h3>\n");
        buf.bullet_list("        ", awards);
    }
    buf.close_section();
}

fn skills(buf: &mut HtmlBuf, categories: &[SkillCategory]) {
    buf.open_section("Skills");
    for category in categories {
        buf.raw("        <div class=\"skill-category\">\n            <h3>");
        buf.field(&category.category);
        buf.raw("</h3>\n");
        buf.pill_list("skills-list", "skill", category.items.as_deref().unwrap_or_default());
        buf.raw("        </div>\n");
    }
    buf.close_section();
}

fn experience(buf: &mut HtmlBuf, jobs: &[Experience]) {
    buf.open_section("Experience");
    for job in jobs {
        buf.raw("        <div class=\"job\">\n            <div class=\"job-header\">\n                <span class=\"organization\">");
        buf.field(&job.organization);
        buf.raw("</span>\n                <span class=\"date\">");
        buf.field(&job.date);
        buf.raw("</span>\n            </div>\n            <div class=\"role\">");
        buf.field(&job.role);
        buf.raw("</div>\n");
        if let Some(details) = present(&job.details) {
            buf.bullet_list("            ", details);
        }
        buf.raw("        </div>\n");
    }
    buf.close_section();
}

fn projects(buf: &mut HtmlBuf, entries: &[Project]) {
    buf.open_section("Projects");
    for project in entries {
        buf.raw("        <div class=\"project\">\n            <div class=\"project-header\">\n                <span class=\"project-name\">");
        buf.field(&project.name);
        buf.raw("</span>\n                <span class=\"date\">");
        buf.field(&project.date);
        buf.raw("</span>\n            </div>\n");
        if let Some(technologies) = present(&project.technologies) {
            buf.pill_list("technologies", "technology", technologies);
        }
        if let Some(details) = present(&project.details) {
            buf.bullet_list("            ", details);
        }
        buf.raw("        </div>\n");
    }
    buf.close_section();
}

fn hobbies(buf: &mut HtmlBuf, entries: &[Hobby]) {
    buf.open_section("Interests & Activities");
    for hobby in entries {
        buf.raw("        <div class=\"hobby\">\n            <div class=\"hobby-header\">\n                <span class=\"hobby-name\"><strong>");
        buf.field(&hobby.name);
        buf.raw("</strong></span>\n                ");
        if let Some(date) = present(&hobby.date) {
            buf.raw("<span class='date'>");
            buf.text(date);
            buf.raw("</span>");
        }
        buf.raw("\n            </div>\n");
        if let Some(details) = present(&hobby.details) {
            buf.bullet_list("            ", details);
        }
        buf.raw("        </div>\n");
    }
    buf.close_section();
}

fn footer(buf: &mut HtmlBuf, generated_on: NaiveDate) {
    buf.raw("    <div class=\"footer\">\n        <p><small>Generated on ");
    buf.raw(&generated_on.format(FOOTER_DATE_FORMAT).to_string());
    buf.raw("</small></p>\n    </div>\n");
    buf.raw(DOCUMENT_CLOSE);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
