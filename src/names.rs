pub const QUIZ_URL: &str = "/quiz";
pub const QUIZ_NEXT_URL: &str = "/quiz/next";
pub const QUIZ_PREVIOUS_URL: &str = "/quiz/previous";
pub const QUIZ_RESTART_URL: &str = "/quiz/restart";
pub const QUIZ_SEND_URL: &str = "/quiz/send";
pub const CONTACT_URL: &str = "/contact";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

pub fn toggle_option_url(value: &str) -> String {
    format!("/quiz/toggle/{value}")
}
