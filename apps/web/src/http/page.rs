use std::fmt::Write;

use tubepost_core::TubepostError;

/// What a submission produced, as shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Warning(&'static str),
    Error {
        detail: Option<String>,
        message: &'static str,
    },
    Success(String),
}

impl Outcome {
    pub fn from_error(err: &TubepostError) -> Self {
        if err.is_warning() {
            Outcome::Warning(err.user_message())
        } else {
            Outcome::Error {
                detail: err.detail(),
                message: err.user_message(),
            }
        }
    }
}

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
input[type=text] { width: 100%; padding: 0.5rem; box-sizing: border-box; }
button { margin-top: 0.5rem; padding: 0.5rem 1rem; }
.msg { padding: 0.75rem; margin: 1rem 0; border-radius: 4px; }
.warning { background: #fff4ce; }
.error { background: #fde7e9; }
.success { background: #dff6dd; }
textarea { width: 100%; height: 300px; box-sizing: border-box; }";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full form page, with the submitted URL kept in the field.
pub fn render_page(url: &str, outcome: Option<&Outcome>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>YouTube Video Summarizer</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <h1>YouTube Video Summarizer</h1>\n\
         <form method=\"post\" action=\"/generate\">\n\
         <label for=\"url\">Enter YouTube Video URL:</label>\n\
         <input type=\"text\" id=\"url\" name=\"url\" value=\"{}\">\n\
         <button type=\"submit\">Generate Summary</button>\n</form>\n",
        escape_html(url)
    );

    match outcome {
        None => {}
        Some(Outcome::Warning(message)) => {
            let _ = writeln!(
                html,
                "<div class=\"msg warning\">{}</div>",
                escape_html(message)
            );
        }
        Some(Outcome::Error { detail, message }) => {
            if let Some(detail) = detail {
                let _ = writeln!(html, "<div class=\"msg error\">{}</div>", escape_html(detail));
            }
            let _ = writeln!(html, "<div class=\"msg error\">{}</div>", escape_html(message));
        }
        Some(Outcome::Success(post)) => {
            let _ = writeln!(
                html,
                "<div class=\"msg success\">Summary generated successfully!</div>\n\
                 <label for=\"post\">Summary:</label>\n\
                 <textarea id=\"post\" readonly>{}</textarea>",
                escape_html(post)
            );
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
