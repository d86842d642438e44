use maud::{html, Markup};

use crate::{
    names,
    services::contact::{ContactErrors, ContactMessage},
};

pub enum ContactState {
    Blank,
    Invalid {
        message: ContactMessage,
        errors: ContactErrors,
    },
    Sent,
}

pub fn home(contact: &ContactState) -> Markup {
    html! {
        (hero())
        (quiz_section())
        (contact_section(contact))
    }
}

fn hero() -> Markup {
    html! {
        section id="hero" {
            h1 { "Full-Stack Developer for Hire" }
            p {
                "I build websites, web applications, and mobile apps. Tell me about "
                "your project and see how well it matches my skills."
            }
            p {
                a href="#skill-matcher" role="button" { "Find Your Match" }
            }
        }
    }
}

fn quiz_section() -> Markup {
    html! {
        section id="skill-matcher" {
            h2 { "Skill Matcher" }
            p {
                "Answer five quick questions about your project to get a match "
                "score, tailored recommendations, and suggested next steps."
            }
            div id="quiz" hx-get=(names::QUIZ_URL) hx-trigger="load" hx-swap="innerHTML" {
                article aria-busy="true" { "Loading quiz..." }
            }
        }
    }
}

pub fn contact_section(state: &ContactState) -> Markup {
    let (message, errors) = match state {
        ContactState::Invalid { message, errors } => (Some(message), Some(errors)),
        _ => (None, None),
    };

    html! {
        section id="contact" {
            h2 { "Get in Touch" }
            p { "Prefer to skip the quiz? Drop me a line directly." }

            @if matches!(state, ContactState::Sent) {
                article class="contact-success" {
                    p { "Thanks for reaching out! I'll get back to you within one business day." }
                }
            }

            form hx-post=(names::CONTACT_URL) hx-target="#contact" hx-swap="outerHTML" {
                label {
                    "Name"
                    input type="text" name="name"
                          value=(message.map_or("", |m| m.name.as_str()))
                          aria-invalid=[errors.and_then(|e| e.name.map(|_| "true"))];
                    @if let Some(msg) = errors.and_then(|e| e.name) {
                        small class="field-error" { (msg) }
                    }
                }
                label {
                    "Email"
                    input type="email" name="email"
                          value=(message.map_or("", |m| m.email.as_str()))
                          aria-invalid=[errors.and_then(|e| e.email.map(|_| "true"))];
                    @if let Some(msg) = errors.and_then(|e| e.email) {
                        small class="field-error" { (msg) }
                    }
                }
                label {
                    "Message"
                    textarea name="message" rows="5"
                             aria-invalid=[errors.and_then(|e| e.message.map(|_| "true"))] {
                        (message.map_or("", |m| m.message.as_str()))
                    }
                    @if let Some(msg) = errors.and_then(|e| e.message) {
                        small class="field-error" { (msg) }
                    }
                }
                input type="submit" value="Send Message";
            }
        }
    }
}
