//! Quiz display surface: pure functions from engine state to markup. All
//! interaction goes back through the `/quiz/*` posts, so these views hold no
//! state of their own.

use maud::{html, Markup};

use crate::{
    catalog::Question,
    engine::MatchReport,
    names,
};

pub struct QuestionData<'a> {
    pub question: &'static Question,
    pub index: usize,
    pub total: usize,
    pub selected: &'a [&'static str],
}

pub fn question(data: QuestionData) -> Markup {
    let is_last = data.index + 1 == data.total;
    let can_advance = !data.selected.is_empty();

    html! {
        div class="quiz-progress" {
            p class="quiz-step" {
                "Question " strong { (data.index + 1) } " of " (data.total)
            }
            progress value=(data.index + 1) max=(data.total) {}
        }

        h3 class="question-title" { (data.question.title) }
        p class="question-description" { (data.question.description) }
        @if data.question.multiple {
            p class="question-hint" { "Select all that apply." }
        }

        div class="options-grid" {
            @for option in data.question.options {
                @let selected = data.selected.contains(&option.value);
                div class=(if selected { "option-card selected" } else { "option-card" })
                    hx-post=(names::toggle_option_url(option.value))
                    hx-target="#quiz"
                    hx-swap="innerHTML" {
                    @if data.question.multiple {
                        input type="checkbox" name=(format!("question-{}", data.question.id))
                              value=(option.value) checked[selected] tabindex="-1";
                    } @else {
                        input type="radio" name=(format!("question-{}", data.question.id))
                              value=(option.value) checked[selected] tabindex="-1";
                    }
                    div class="option-content" {
                        h4 { (option.label) }
                        p { (option.description) }
                    }
                }
            }
        }

        div class="quiz-navigation" {
            button class="nav-btn nav-btn-back"
                   hx-post=(names::QUIZ_PREVIOUS_URL)
                   hx-target="#quiz"
                   hx-swap="innerHTML"
                   disabled[data.index == 0] {
                "Previous"
            }
            span style="margin-left: auto;" {
                button class="nav-btn nav-btn-next"
                       hx-post=(names::QUIZ_NEXT_URL)
                       hx-target="#quiz"
                       hx-swap="innerHTML"
                       disabled[!can_advance] {
                    @if is_last { "See Results" } @else { "Next" }
                }
            }
        }
    }
}

pub struct ResultsData<'a> {
    pub report: &'a MatchReport,
    pub contact_email: &'a str,
}

pub fn results(data: ResultsData) -> Markup {
    let report = data.report;

    html! {
        article class="quiz-results" {
            div class="score-circle"
                style=(format!(
                    "background: conic-gradient(var(--pico-primary) {score}%, var(--pico-muted-border-color) {score}%);",
                    score = report.score
                )) {
                span class="score-number" { (report.score) "%" }
            }
            h3 class=(format!("score-text {}", report.tier.css_class())) {
                (report.tier.label())
            }
            p class="score-description" { (report.tier.description()) }
        }

        article {
            h4 { "Recommended Approach" }
            @if report.recommendations.is_empty() {
                p { "Based on your answers, I recommend we schedule a call to discuss your specific needs." }
            } @else {
                @for rec in &report.recommendations {
                    div class="recommendation-item" {
                        h4 { (rec.title) }
                        p { (rec.description) }
                    }
                }
            }
        }

        article {
            h4 { "Suggested Next Steps" }
            ul {
                @for step in report.next_steps {
                    li { (step) }
                }
            }
            p {
                strong {
                    "Click \"Get Detailed Recommendations\" to send your quiz results directly to my inbox!"
                }
            }
        }

        div class="quiz-navigation" {
            button class="nav-btn secondary"
                   hx-post=(names::QUIZ_RESTART_URL)
                   hx-target="#quiz"
                   hx-swap="innerHTML" {
                "Retake Quiz"
            }
            span style="margin-left: auto;" {
                button class="nav-btn nav-btn-next"
                       hx-post=(names::QUIZ_SEND_URL)
                       hx-target="#send-outcome"
                       hx-swap="innerHTML" {
                    "Get Detailed Recommendations"
                }
            }
        }
        div id="send-outcome" {}
    }
}

pub fn sent(contact_email: &str) -> Markup {
    html! {
        article class="send-confirmation" {
            p {
                "Your quiz summary is on its way to "
                strong { (contact_email) }
                ". I'll reply as soon as I've read it."
            }
        }
    }
}

/// Shown when no email transport is configured: the visitor sends the
/// composed summary through their own mail client, or copies it by hand.
pub fn manual_copy(summary: &str, contact_email: &str, mailto: &str) -> Markup {
    html! {
        article class="email-fallback" {
            h4 { "Email Client Required" }
            p {
                "Direct sending is not set up on this site. Open the pre-filled draft "
                "in your mail client, or copy the text below and send it to "
                strong { (contact_email) } "."
            }
            p {
                a href=(mailto) role="button" { "Open Email Draft" }
            }
            textarea readonly rows="12" { (summary) }
        }
    }
}

pub fn not_ready() -> Markup {
    html! {
        article class="send-note" {
            p { "Finish the quiz to send your results." }
        }
    }
}

/// The quiz cookie outlived its server-side session.
pub fn session_expired() -> Markup {
    html! {
        article class="send-note" {
            p { "Your quiz session has expired." }
            button hx-post=(names::QUIZ_RESTART_URL)
                   hx-target="#quiz"
                   hx-swap="innerHTML" {
                "Start Over"
            }
        }
    }
}
