//! Quiz routes: each post maps to exactly one engine operation, and every
//! response re-renders the session's current state as an htmx fragment.

use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    catalog, email,
    engine::QuizSession,
    extractors::QuizToken,
    names,
    rejections::{AppError, ResultExt},
    services::quiz::{SendOutcome, SUMMARY_SUBJECT},
    utils,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_fragment))
        .route("/quiz/toggle/{value}", post(toggle_option))
        .route(names::QUIZ_NEXT_URL, post(next_question))
        .route(names::QUIZ_PREVIOUS_URL, post(previous_question))
        .route(names::QUIZ_RESTART_URL, post(restart_quiz))
        .route(names::QUIZ_SEND_URL, post(send_results))
}

async fn quiz_fragment(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<impl IntoResponse, AppError> {
    let (token, headers) = ensure_session(&state, token).await?;
    let session = state
        .sessions
        .snapshot(&token)
        .await
        .ok_or(AppError::Internal("quiz session vanished"))?;

    Ok((headers, quiz_markup(&state, &session)))
}

async fn toggle_option(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Path(value): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    apply(&state, token, move |session| session.toggle_option(&value)).await
}

async fn next_question(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<impl IntoResponse, AppError> {
    apply(&state, token, QuizSession::advance).await
}

async fn previous_question(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<impl IntoResponse, AppError> {
    apply(&state, token, QuizSession::retreat).await
}

async fn restart_quiz(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<impl IntoResponse, AppError> {
    apply(&state, token, QuizSession::restart).await
}

async fn send_results(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<Markup, AppError> {
    let session = match token {
        Some(token) => state.sessions.snapshot(&token).await,
        None => None,
    };
    let Some(session) = session else {
        return Ok(quiz_views::session_expired());
    };

    let outcome = state
        .quiz
        .send_results(&session)
        .await
        .reject("could not send quiz results")?;

    Ok(match outcome {
        SendOutcome::Sent => quiz_views::sent(state.quiz.contact_email()),
        SendOutcome::ManualCopy(summary) => {
            let mailto = email::mailto_link(state.quiz.contact_email(), SUMMARY_SUBJECT, &summary);
            quiz_views::manual_copy(&summary, state.quiz.contact_email(), &mailto)
        }
        SendOutcome::NotReady => quiz_views::not_ready(),
    })
}

// --- Helpers: session resolution + stage rendering ---

/// Make sure the caller has a live session, minting a token (and the cookie
/// header to set it) when the old one is missing or expired.
async fn ensure_session(
    state: &AppState,
    token: Option<String>,
) -> Result<(String, HeaderMap), AppError> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        if state.sessions.contains(&token).await {
            return Ok((token, headers));
        }
    }

    let token = state.sessions.create().await;
    let cookie = utils::cookie(names::QUIZ_SESSION_COOKIE_NAME, &token, state.secure_cookies);
    headers.insert(
        SET_COOKIE,
        cookie.parse().reject("could not build session cookie")?,
    );

    Ok((token, headers))
}

/// Apply one engine operation and re-render whatever stage the session lands
/// in. Operations that do not apply (advance without a selection, retreat at
/// the start) leave the session as it was, so the re-render is a faithful
/// no-op too.
async fn apply(
    state: &AppState,
    token: Option<String>,
    op: impl FnOnce(&mut QuizSession),
) -> Result<(HeaderMap, Markup), AppError> {
    let (token, headers) = ensure_session(state, token).await?;

    let session = state
        .sessions
        .update(&token, |session| {
            op(session);
            session.clone()
        })
        .await
        .ok_or(AppError::Internal("quiz session vanished"))?;

    Ok((headers, quiz_markup(state, &session)))
}

fn quiz_markup(state: &AppState, session: &QuizSession) -> Markup {
    if let Some((index, question)) = session.position() {
        return quiz_views::question(quiz_views::QuestionData {
            question,
            index,
            total: catalog::QUESTIONS.len(),
            selected: session.selection(question.id),
        });
    }

    match session.report() {
        Some(report) => quiz_views::results(quiz_views::ResultsData {
            report,
            contact_email: state.quiz.contact_email(),
        }),
        // A session is always either asking or holding a report.
        None => quiz_views::session_expired(),
    }
}
