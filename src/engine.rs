//! The skill-matcher engine: a fixed-length sequence of question steps with
//! an in-progress selection per question, committed answers, and a match
//! report computed when the last step is passed.
//!
//! The engine is pure and synchronous; rendering and delivery live in the
//! view and service layers. Every operation that cannot apply in the current
//! stage is a silent no-op, never an error.

use std::collections::BTreeMap;

use crate::catalog::{self, Question};

/// Committed answers: question id to the selected option values.
pub type AnswerSet = BTreeMap<u32, Vec<&'static str>>;

/// Where the session currently stands. The report lives inside the results
/// stage so a finished session always carries one.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Asking(usize),
    Results(MatchReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    stage: Stage,
    /// In-progress selection per question, kept across navigation so
    /// re-entering a question restores its prior choice.
    selections: BTreeMap<u32, Vec<&'static str>>,
    answers: AnswerSet,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            stage: Stage::Asking(0),
            selections: BTreeMap::new(),
            answers: BTreeMap::new(),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The question currently on display, with its ordinal, or `None` at the
    /// results stage.
    pub fn position(&self) -> Option<(usize, &'static Question)> {
        match &self.stage {
            Stage::Asking(index) => catalog::QUESTIONS.get(*index).map(|q| (*index, q)),
            Stage::Results(_) => None,
        }
    }

    pub fn report(&self) -> Option<&MatchReport> {
        match &self.stage {
            Stage::Results(report) => Some(report),
            Stage::Asking(_) => None,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The in-progress selection for a question (empty when untouched).
    pub fn selection(&self, question_id: u32) -> &[&'static str] {
        self.selections
            .get(&question_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether "next" is available: the current question has a non-empty
    /// in-progress selection.
    pub fn can_advance(&self) -> bool {
        self.position()
            .is_some_and(|(_, q)| !self.selection(q.id).is_empty())
    }

    /// Toggle an option of the current question. Single-select questions hold
    /// at most one value: picking a new value replaces the old one, and
    /// re-picking the selected value clears it. Unknown values and calls at
    /// the results stage do nothing.
    pub fn toggle_option(&mut self, value: &str) {
        let Some((_, question)) = self.position() else {
            return;
        };
        let Some(option) = question.options.iter().find(|o| o.value == value) else {
            return;
        };

        let selected = self.selections.entry(question.id).or_default();
        if question.multiple {
            if let Some(at) = selected.iter().position(|v| *v == option.value) {
                selected.remove(at);
            } else {
                selected.push(option.value);
            }
        } else if selected.len() == 1 && selected[0] == option.value {
            selected.clear();
        } else {
            selected.clear();
            selected.push(option.value);
        }
    }

    /// Commit the current selection and move forward. A no-op while the
    /// selection is empty (the engine's only guard). Passing the last
    /// question computes the match report and enters the results stage.
    pub fn advance(&mut self) {
        let Some((index, question)) = self.position() else {
            return;
        };
        let selected = match self.selections.get(&question.id) {
            Some(selected) if !selected.is_empty() => selected.clone(),
            _ => return,
        };

        self.answers.insert(question.id, selected);

        if index + 1 == catalog::QUESTIONS.len() {
            self.stage = Stage::Results(MatchReport::compute(&self.answers));
        } else {
            self.stage = Stage::Asking(index + 1);
        }
    }

    /// Step back one question, keeping committed answers and in-progress
    /// selections intact. A no-op at the first question and at results.
    pub fn retreat(&mut self) {
        if let Some((index, _)) = self.position() {
            if index > 0 {
                self.stage = Stage::Asking(index - 1);
            }
        }
    }

    /// Throw the whole session away and start over at the first question.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// The plain-text summary delivered to the operator. Only available at
    /// the results stage; composing it has no side effects, so callers may
    /// build it as often as they like.
    pub fn summary_for(&self, recipient: &str) -> Option<String> {
        let report = self.report()?;

        let mut body = format!("Hello {recipient},\n\n");
        body.push_str(
            "I just completed your project matching quiz and would like to discuss my project requirements.\n\n",
        );

        body.push_str("QUIZ RESULTS:\n");
        body.push_str(&format!("Match Score: {}%\n\n", report.score));

        body.push_str("MY PROJECT DETAILS:\n");
        for question in catalog::QUESTIONS {
            let Some(selected) = self.answers.get(&question.id) else {
                continue;
            };
            if selected.is_empty() {
                continue;
            }
            let labels = question
                .options
                .iter()
                .filter(|o| selected.contains(&o.value))
                .map(|o| o.label)
                .collect::<Vec<_>>()
                .join(", ");
            body.push_str(&format!("- {}: {}\n", question.title, labels));
        }

        body.push_str("\nRECOMMENDATIONS FROM QUIZ:\n");
        if report.recommendations.is_empty() {
            body.push_str("The quiz recommended we schedule a call to discuss specific requirements.\n");
        } else {
            for (index, rec) in report.recommendations.iter().enumerate() {
                body.push_str(&format!("{}. {}: {}\n", index + 1, rec.title, rec.description));
            }
        }

        body.push_str("\nNEXT STEPS:\n");
        body.push_str("- Please let me know your availability for a quick call\n");
        body.push_str("- Share your initial thoughts based on my requirements\n");
        body.push_str("- Provide any additional information you might need\n\n");
        body.push_str("Looking forward to hearing from you!\n");

        Some(body)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Match report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// 0 to 100 inclusive.
    pub score: u32,
    pub tier: MatchTier,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Fair,
    Good,
    Excellent,
}

const MAX_SCORE: u32 = 100;
const TECH_POINTS_PER_SELECTION: u32 = 8;
const TECH_POINTS_CAP: u32 = 40;

impl MatchReport {
    /// Score an answer set. Deterministic; reads nothing but the answers.
    pub fn compute(answers: &AnswerSet) -> Self {
        let score = match_score(answers);
        Self {
            score,
            tier: MatchTier::for_score(score),
            recommendations: recommendations(answers),
            next_steps: next_steps(score),
        }
    }
}

impl MatchTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            MatchTier::Excellent
        } else if score >= 60 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match!",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MatchTier::Excellent => {
                "Your project requirements align perfectly with my expertise. I'm confident I can deliver outstanding results."
            }
            MatchTier::Good => {
                "Your project is a good fit for my skills. There might be some areas where we'll need to collaborate closely."
            }
            MatchTier::Fair => {
                "While I can help with aspects of your project, there might be better specialists for your specific needs."
            }
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
        }
    }
}

fn single(answers: &AnswerSet, question_id: u32) -> Option<&'static str> {
    answers.get(&question_id).and_then(|v| v.first()).copied()
}

fn match_score(answers: &AnswerSet) -> u32 {
    let mut score = 0;

    // Budget match (30% of score)
    score += match single(answers, catalog::BUDGET) {
        Some("standard") | Some("premium") => 30,
        Some("basic") | Some("enterprise") => 20,
        Some("not-sure") => 10,
        _ => 0,
    };

    // Timeline match (20% of score)
    score += match single(answers, catalog::TIMELINE) {
        Some("soon") => 20,
        Some("flexible") => 15,
        Some("urgent") => 10,
        _ => 0,
    };

    // Technical requirements match, 8 points per selection capped at 40
    let tech_count = answers
        .get(&catalog::TECH_REQUIREMENTS)
        .map_or(0, |selected| selected.len() as u32);
    score += (tech_count * TECH_POINTS_PER_SELECTION).min(TECH_POINTS_CAP);

    // Project type bonus (10% of score)
    score += match single(answers, catalog::PROJECT_TYPE) {
        Some("web-app") | Some("mobile-app") => 10,
        _ => 0,
    };

    score.min(MAX_SCORE)
}

/// Rule order matters: project type, then budget, then the two technical
/// rules. Each rule contributes at most one entry.
fn recommendations(answers: &AnswerSet) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    match single(answers, catalog::PROJECT_TYPE) {
        Some("website") => recs.push(Recommendation {
            title: "Custom Website Development",
            description: "I'll create a fast, responsive website tailored to your brand with modern technologies and SEO optimization.",
        }),
        Some("web-app") => recs.push(Recommendation {
            title: "Full-Stack Web Application",
            description: "Complete development of your web application with frontend, backend, database, and deployment.",
        }),
        Some("mobile-app") => recs.push(Recommendation {
            title: "Cross-Platform Mobile App",
            description: "Development of a native-feeling mobile app that works on both iOS and Android using React Native.",
        }),
        _ => {}
    }

    match single(answers, catalog::BUDGET) {
        Some("basic") => recs.push(Recommendation {
            title: "MVP Approach",
            description: "Let's start with a minimum viable product to validate your idea, then iterate based on user feedback.",
        }),
        Some("premium") | Some("enterprise") => recs.push(Recommendation {
            title: "Scalable Architecture",
            description: "I'll build your project with scalability in mind, ensuring it can grow with your user base and feature needs.",
        }),
        _ => {}
    }

    let tech = answers
        .get(&catalog::TECH_REQUIREMENTS)
        .map_or(&[][..], Vec::as_slice);

    if tech.contains(&"payments") {
        recs.push(Recommendation {
            title: "Secure Payment Integration",
            description: "Implementation of Stripe or PayPal with proper security measures and compliance.",
        });
    }

    if tech.contains(&"database") {
        recs.push(Recommendation {
            title: "Database Design & Optimization",
            description: "Custom database architecture designed for your specific data needs and performance requirements.",
        });
    }

    recs
}

// The next-step tiers use their own 70/50 boundaries, deliberately separate
// from the 80/60 match-tier boundaries.
const READY_STEPS: &[&str] = &[
    "Schedule a discovery call to discuss details",
    "Review project requirements and timeline",
    "Provide detailed proposal and quote",
    "Start development within 1-2 weeks",
];

const CONSULTATION_STEPS: &[&str] = &[
    "Schedule a consultation call",
    "Discuss project feasibility and alternatives",
    "Explore potential collaborations",
    "Provide initial recommendations",
];

const EXPLORATORY_STEPS: &[&str] = &[
    "Schedule a quick chat to understand your needs",
    "I can recommend other specialists if needed",
    "Discuss potential learning resources",
    "Explore simplified approaches",
];

fn next_steps(score: u32) -> &'static [&'static str] {
    if score >= 70 {
        READY_STEPS
    } else if score >= 50 {
        CONSULTATION_STEPS
    } else {
        EXPLORATORY_STEPS
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn answer_set(entries: &[(u32, &[&'static str])]) -> AnswerSet {
        entries
            .iter()
            .map(|(id, values)| (*id, values.to_vec()))
            .collect()
    }

    /// Drive a session through all five questions with the given values.
    fn complete_session(values_per_question: &[&[&str]]) -> QuizSession {
        let mut session = QuizSession::new();
        for values in values_per_question {
            for value in *values {
                session.toggle_option(value);
            }
            session.advance();
        }
        session
    }

    fn completed_scenario_a() -> QuizSession {
        complete_session(&[
            &["web-app"],
            &["soon"],
            &["standard"],
            &["database", "payments"],
            &["existing"],
        ])
    }

    // ----- scoring -----

    #[test]
    fn scenario_a_scores_76_good() {
        let answers = answer_set(&[
            (catalog::PROJECT_TYPE, &["web-app"]),
            (catalog::TIMELINE, &["soon"]),
            (catalog::BUDGET, &["standard"]),
            (catalog::TECH_REQUIREMENTS, &["database", "payments"]),
            (catalog::CURRENT_SETUP, &["existing"]),
        ]);
        let report = MatchReport::compute(&answers);

        assert_eq!(report.score, 76);
        assert_eq!(report.tier, MatchTier::Good);
        assert_eq!(report.next_steps, READY_STEPS);

        let titles: Vec<_> = report.recommendations.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            [
                "Full-Stack Web Application",
                "Secure Payment Integration",
                "Database Design & Optimization",
            ]
        );
    }

    #[test]
    fn scenario_b_scores_20_fair_with_no_recommendations() {
        let answers = answer_set(&[
            (catalog::BUDGET, &["not-sure"]),
            (catalog::TIMELINE, &["urgent"]),
            (catalog::TECH_REQUIREMENTS, &[]),
            (catalog::PROJECT_TYPE, &["consultation"]),
        ]);
        let report = MatchReport::compute(&answers);

        assert_eq!(report.score, 20);
        assert_eq!(report.tier, MatchTier::Fair);
        assert_eq!(report.next_steps, EXPLORATORY_STEPS);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn score_clamps_at_100() {
        let answers = answer_set(&[
            (catalog::PROJECT_TYPE, &["web-app"]),
            (catalog::TIMELINE, &["soon"]),
            (catalog::BUDGET, &["premium"]),
            (
                catalog::TECH_REQUIREMENTS,
                &["responsive", "database", "payments", "auth", "api", "cms"],
            ),
        ]);
        // 30 + 20 + min(6*8, 40) + 10 = 100 exactly
        assert_eq!(MatchReport::compute(&answers).score, 100);
    }

    #[test]
    fn empty_answers_score_zero() {
        let report = MatchReport::compute(&AnswerSet::new());
        assert_eq!(report.score, 0);
        assert_eq!(report.tier, MatchTier::Fair);
    }

    #[test]
    fn unknown_values_contribute_nothing() {
        let answers = answer_set(&[
            (catalog::BUDGET, &["planning"]),
            (catalog::TIMELINE, &["planning"]),
            (catalog::PROJECT_TYPE, &["ecommerce"]),
        ]);
        assert_eq!(MatchReport::compute(&answers).score, 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(MatchTier::for_score(100), MatchTier::Excellent);
        assert_eq!(MatchTier::for_score(80), MatchTier::Excellent);
        assert_eq!(MatchTier::for_score(79), MatchTier::Good);
        assert_eq!(MatchTier::for_score(60), MatchTier::Good);
        assert_eq!(MatchTier::for_score(59), MatchTier::Fair);
        assert_eq!(MatchTier::for_score(0), MatchTier::Fair);
    }

    #[test]
    fn tier_depends_only_on_the_score() {
        // Two unrelated answer sets that both sum to 80.
        let a = answer_set(&[
            (catalog::BUDGET, &["standard"]),
            (catalog::TIMELINE, &["urgent"]),
            (
                catalog::TECH_REQUIREMENTS,
                &["responsive", "database", "payments", "auth", "api"],
            ),
            (catalog::PROJECT_TYPE, &["website"]),
        ]);
        let b = answer_set(&[
            (catalog::BUDGET, &["basic"]),
            (catalog::TIMELINE, &["soon"]),
            (
                catalog::TECH_REQUIREMENTS,
                &["responsive", "database", "payments", "auth", "api"],
            ),
        ]);

        let (ra, rb) = (MatchReport::compute(&a), MatchReport::compute(&b));
        assert_eq!(ra.score, 80);
        assert_eq!(rb.score, 80);
        assert_eq!(ra.tier, MatchTier::Excellent);
        assert_eq!(rb.tier, MatchTier::Excellent);
    }

    #[test]
    fn next_step_boundaries_are_70_and_50() {
        assert_eq!(next_steps(70), READY_STEPS);
        assert_eq!(next_steps(69), CONSULTATION_STEPS);
        assert_eq!(next_steps(50), CONSULTATION_STEPS);
        assert_eq!(next_steps(49), EXPLORATORY_STEPS);
    }

    #[test]
    fn budget_rule_skips_standard() {
        let answers = answer_set(&[(catalog::BUDGET, &["standard"])]);
        assert!(recommendations(&answers).is_empty());

        let answers = answer_set(&[(catalog::BUDGET, &["enterprise"])]);
        let titles: Vec<_> = recommendations(&answers).iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Scalable Architecture"]);
    }

    // ----- state machine -----

    #[test]
    fn advance_without_selection_is_a_noop() {
        let mut session = QuizSession::new();
        session.advance();

        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn advance_commits_the_selection() {
        let mut session = QuizSession::new();
        session.toggle_option("website");
        assert!(session.can_advance());
        session.advance();

        assert_eq!(session.position().map(|(i, _)| i), Some(1));
        assert_eq!(
            session.answers().get(&catalog::PROJECT_TYPE),
            Some(&vec!["website"])
        );
    }

    #[test]
    fn single_select_replaces_the_previous_value() {
        let mut session = QuizSession::new();
        session.toggle_option("website");
        session.toggle_option("web-app");

        assert_eq!(session.selection(catalog::PROJECT_TYPE), ["web-app"]);
    }

    #[test]
    fn single_select_retoggle_clears() {
        let mut session = QuizSession::new();
        session.toggle_option("website");
        session.toggle_option("website");

        assert!(session.selection(catalog::PROJECT_TYPE).is_empty());
        assert!(!session.can_advance());
    }

    #[test]
    fn multi_select_toggles_each_value_independently() {
        // Scenario: select database and payments, then deselect database.
        let mut session = complete_session(&[&["web-app"], &["soon"], &["standard"]]);
        session.toggle_option("database");
        session.toggle_option("payments");
        session.toggle_option("database");
        session.advance();

        assert_eq!(
            session.answers().get(&catalog::TECH_REQUIREMENTS),
            Some(&vec!["payments"])
        );
    }

    #[test]
    fn unknown_option_value_is_ignored() {
        let mut session = QuizSession::new();
        session.toggle_option("no-such-option");
        // Valid for a later question, but not for the current one.
        session.toggle_option("soon");

        assert!(!session.can_advance());
        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn retreat_at_the_first_question_is_a_noop() {
        let mut session = QuizSession::new();
        session.retreat();

        assert_eq!(session.position().map(|(i, _)| i), Some(0));
    }

    #[test]
    fn retreat_keeps_answers_and_selections() {
        let mut session = QuizSession::new();
        session.toggle_option("website");
        session.advance();
        session.retreat();

        assert_eq!(session.position().map(|(i, _)| i), Some(0));
        assert_eq!(session.selection(catalog::PROJECT_TYPE), ["website"]);
        assert_eq!(
            session.answers().get(&catalog::PROJECT_TYPE),
            Some(&vec!["website"])
        );
    }

    #[test]
    fn retreat_then_advance_restores_the_forward_question() {
        let mut session = QuizSession::new();
        session.toggle_option("website");
        session.advance();
        session.toggle_option("soon");
        session.retreat();
        session.advance();

        // Back on question 2 with its in-progress selection intact.
        assert_eq!(session.position().map(|(i, _)| i), Some(1));
        assert_eq!(session.selection(catalog::TIMELINE), ["soon"]);
    }

    #[test]
    fn completing_the_quiz_produces_a_report() {
        let session = completed_scenario_a();

        let report = session.report().unwrap();
        assert_eq!(report.score, 76);
        assert!(session.position().is_none());
        assert!(!session.can_advance());
    }

    #[test]
    fn operations_at_results_are_noops() {
        let session = completed_scenario_a();

        let mut after = session.clone();
        after.toggle_option("website");
        after.advance();
        after.retreat();

        assert_eq!(after, session);
    }

    #[test]
    fn restart_matches_a_fresh_session() {
        let mut session = completed_scenario_a();
        session.restart();

        assert_eq!(session, QuizSession::new());
    }

    // ----- summary -----

    #[test]
    fn summary_lists_answers_and_numbered_recommendations() {
        let summary = completed_scenario_a().summary_for("Alex").unwrap();

        assert!(summary.starts_with("Hello Alex,"));
        assert!(summary.contains("Match Score: 76%"));
        assert!(summary.contains("- What type of project are you considering?: Web Application"));
        assert!(summary.contains("- What technical requirements do you have?: Database & Storage, Payment Processing"));
        assert!(summary.contains("1. Full-Stack Web Application:"));
        assert!(summary.contains("3. Database Design & Optimization:"));
    }

    #[test]
    fn summary_falls_back_when_no_recommendations_fire() {
        let session = complete_session(&[
            &["consultation"],
            &["urgent"],
            &["not-sure"],
            &["responsive"],
            &["idea"],
        ]);
        let summary = session.summary_for("Alex").unwrap();

        assert!(summary.contains("schedule a call"));
        assert!(!summary.contains("1. "));
    }

    #[test]
    fn summary_is_unavailable_before_results() {
        let mut session = QuizSession::new();
        session.toggle_option("website");

        assert!(session.summary_for("Alex").is_none());
    }
}
