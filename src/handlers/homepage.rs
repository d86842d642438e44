use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    services::contact::{ContactMessage, ContactOutcome},
    views,
    views::homepage::{self as homepage_views, ContactState},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route(names::CONTACT_URL, post(contact_post))
}

async fn homepage(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, "Home", homepage_views::home(&ContactState::Blank))
}

async fn contact_post(
    State(state): State<AppState>,
    Form(message): Form<ContactMessage>,
) -> Result<Markup, AppError> {
    let outcome = state
        .contact
        .submit(message)
        .await
        .reject("could not relay contact message")?;

    let contact_state = match outcome {
        ContactOutcome::Accepted => ContactState::Sent,
        ContactOutcome::Invalid { message, errors } => ContactState::Invalid { message, errors },
    };

    Ok(homepage_views::contact_section(&contact_state))
}
