//! HTML presentation layer
//!
//! A fixed handlebars template renders the whole page. Every interpolated
//! value goes through the engine's HTML escaping except the reply, which is
//! converted from markdown with raw HTML stripped first.

use handlebars::Handlebars;
use pulldown_cmark::{html, Event, Parser};
use serde::Serialize;

use shared::{ChatTurn, Language};

pub const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{lang}}">
<head>
    <title>Assistant Agricole Madagascar</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
    <div class="header">
        <div>
            <h1>🌱 Assistant Agricole Madagascar</h1>
            <div class="weather">{{weather}}</div>
        </div>
        <form method="POST" style="display:inline;">
            <input type="hidden" name="lang" value="{{toggle_lang}}">
            <button class="lang-btn" type="submit">{{toggle_label}}</button>
        </form>
    </div>

    <div class="container">
        <div class="forecast">
            <h3>{{forecast_title}}</h3>
            {{#each forecast}}
            <p>{{this}}</p>
            {{/each}}
        </div>

        <div class="chat">
            {{#each history}}
            <div class="question">📝 {{question}}</div>
            <div class="response">🤖 {{{reply_html}}}</div>
            <hr>
            {{/each}}
        </div>

        <div class="input-container">
            <form method="POST">
                <input type="hidden" name="lang" value="{{lang}}">
                <input type="text" name="message" placeholder="Posez votre question agricole ici..." required>
                <button type="submit">Envoyer</button>
            </form>
        </div>
    </div>
</body>
</html>
"#;

/// Page view model
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub lang: &'static str,
    pub toggle_lang: &'static str,
    pub toggle_label: &'static str,
    pub weather: String,
    pub forecast_title: String,
    pub forecast: Vec<String>,
    pub history: Vec<RenderedTurn>,
}

/// One history entry with the reply already converted to HTML
#[derive(Debug, Serialize)]
pub struct RenderedTurn {
    pub question: String,
    pub reply_html: String,
}

impl PageContext {
    pub fn new(
        lang: Language,
        weather: String,
        forecast_title: String,
        forecast: Vec<String>,
        history: Vec<ChatTurn>,
    ) -> Self {
        let toggle = lang.toggled();

        Self {
            lang: lang.code(),
            toggle_lang: toggle.code(),
            toggle_label: match toggle {
                Language::Fr => "FR",
                Language::Mg => "MG",
            },
            weather,
            forecast_title,
            forecast,
            history: history.into_iter().map(RenderedTurn::from).collect(),
        }
    }
}

impl From<ChatTurn> for RenderedTurn {
    fn from(turn: ChatTurn) -> Self {
        Self {
            reply_html: markdown_to_html(&turn.reply),
            question: turn.question,
        }
    }
}

/// Build the template registry; called once at startup
pub fn page_registry() -> Result<Handlebars<'static>, handlebars::TemplateError> {
    let mut registry = Handlebars::new();
    registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    Ok(registry)
}

/// Convert model output from lightweight markup to HTML.
///
/// Raw HTML in the input is demoted to escaped text, so the result is safe
/// to embed without further escaping.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
