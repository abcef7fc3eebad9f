use dioxus::prelude::*;
use hadith_core::presentation::answer_paragraphs;

/// Synthesized answer shown above the supporting hadiths.
///
/// Renders nothing when there is no answer.
#[component]
pub fn AnswerPanel(#[props(!optional)] answer: Option<String>, question: String) -> Element {
    let Some(answer) = answer else {
        return rsx! {};
    };

    rsx! {
        section { class: "hs-answer-panel",
            header { class: "hs-answer-header",
                span { class: "hs-answer-icon", "✦" }
                h2 { class: "hs-answer-title", "Answer" }
            }
            p { class: "hs-answer-question", "“{question}”" }
            div { class: "hs-answer-body",
                for (i, paragraph) in answer_paragraphs(&answer).into_iter().enumerate() {
                    p { key: "{i}", class: "hs-answer-paragraph", "{paragraph}" }
                }
            }
            footer { class: "hs-answer-footer",
                "Based on the hadiths below. Verify with qualified scholars before acting on it."
            }
        }
    }
}
