pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure_attr = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=3600;{secure_attr} Path=/; SameSite=Strict")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_marks_secure_only_when_asked() {
        assert!(cookie("quiz_session", "abc", true).contains("Secure"));
        assert!(!cookie("quiz_session", "abc", false).contains("Secure"));
    }
}
