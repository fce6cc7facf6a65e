//! Assistant service: prompt composition, completion and translation
//!
//! The agronomy prompt is always composed in French; translation to
//! Malagasy is a second, differently-prompted model call applied to
//! displayed text only.

use shared::Language;

use crate::external::CompletionClient;

/// Orchestrates model calls for answers and display translation
#[derive(Clone)]
pub struct AssistantService {
    llm: CompletionClient,
}

/// Format the fixed agronomy instruction template with the current context
pub fn build_prompt(city: &str, weather_line: &str, question: &str) -> String {
    format!(
        "Tu es un assistant agricole spécialisé pour Madagascar.
La météo actuelle à {city} est : {weather_line}.

Règles de réponse :
- Réponds uniquement à la question suivante de manière claire et simple.
- Utilise des points avec des emojis 🌱💧🌾💰🚜.
- Aère bien le texte (sauts de ligne entre chaque point).
- Inclure si possible : plantation, arrosage, fertilisation, récolte et vente.
- Propose une culture rare ou peu cultivée et explique comment réussir malgré le climat actuel, en proposant des protections ou irrigation si nécessaire.
- Ne fais pas de tableau, ne mets pas de # ou de *.

Question : {question}"
    )
}

impl AssistantService {
    /// Create a new AssistantService
    pub fn new(llm: CompletionClient) -> Self {
        Self { llm }
    }

    /// Answer an agricultural question with the current weather as context.
    ///
    /// A completion failure is substituted with a French error line so the
    /// page always has something to display; the caller records the turn
    /// either way.
    pub async fn answer(
        &self,
        question: &str,
        city: &str,
        weather_line: &str,
        lang: Language,
    ) -> String {
        let prompt = build_prompt(city, weather_line, question);

        let reply = match self.llm.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("completion call failed: {err}");
                return format!("Erreur lors de l'appel au modèle : {err}");
            }
        };

        self.translate(&reply, lang).await
    }

    /// Translate text for display; identity in French mode.
    ///
    /// Keeps the untranslated text when the model call fails.
    pub async fn translate(&self, text: &str, lang: Language) -> String {
        if lang == Language::Fr {
            return text.to_string();
        }

        let prompt = format!(
            "Traduis le texte suivant en malgache de manière naturelle, en gardant les emojis et la mise en page:\n{text}"
        );

        match self.llm.complete(&prompt).await {
            Ok(translated) => translated,
            Err(err) => {
                tracing::warn!("translation call failed, keeping original text: {err}");
                text.to_string()
            }
        }
    }
}
