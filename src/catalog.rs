//! The skill-matcher question catalog.
//!
//! The catalog is fixed content compiled into the binary: array order defines
//! traversal order, and `Question::id` is the stable identity that answers
//! and scoring key on. Some option fields (`skills`, `impact`, `match_hint`,
//! `support`) are descriptive metadata carried on the table but never read by
//! the scoring rules.

pub struct Question {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Checkbox semantics: any number of options may be selected.
    pub multiple: bool,
    pub options: &'static [QuestionOption],
}

pub struct QuestionOption {
    /// The only identifier that enters an answer set.
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub impact: Option<&'static str>,
    pub match_hint: Option<&'static str>,
    pub support: Option<&'static str>,
}

impl QuestionOption {
    const fn new(value: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            value,
            label,
            description,
            skills: &[],
            impact: None,
            match_hint: None,
            support: None,
        }
    }

    const fn skills(mut self, skills: &'static [&'static str]) -> Self {
        self.skills = skills;
        self
    }

    const fn impact(mut self, impact: &'static str) -> Self {
        self.impact = Some(impact);
        self
    }

    const fn match_hint(mut self, hint: &'static str) -> Self {
        self.match_hint = Some(hint);
        self
    }

    const fn support(mut self, support: &'static str) -> Self {
        self.support = Some(support);
        self
    }
}

// Question ids referenced by the scoring and recommendation rules.
pub const PROJECT_TYPE: u32 = 1;
pub const TIMELINE: u32 = 2;
pub const BUDGET: u32 = 3;
pub const TECH_REQUIREMENTS: u32 = 4;
pub const CURRENT_SETUP: u32 = 5;

pub const QUESTIONS: &[Question] = &[
    Question {
        id: PROJECT_TYPE,
        title: "What type of project are you considering?",
        description: "This helps me understand the scope and requirements.",
        multiple: false,
        options: &[
            QuestionOption::new(
                "website",
                "Website",
                "Company site, portfolio, or landing page",
            )
            .skills(&["HTML/CSS", "JavaScript", "Responsive Design", "SEO"]),
            QuestionOption::new(
                "web-app",
                "Web Application",
                "Interactive platform with user accounts and data",
            )
            .skills(&[
                "React/Vue",
                "Node.js",
                "Database",
                "API Integration",
                "Authentication",
            ]),
            QuestionOption::new("mobile-app", "Mobile App", "iOS or Android application").skills(
                &[
                    "React Native",
                    "Mobile UI/UX",
                    "App Store Deployment",
                    "Push Notifications",
                ],
            ),
            QuestionOption::new(
                "ecommerce",
                "E-commerce Store",
                "Online store with products and payments",
            )
            .skills(&[
                "E-commerce Platforms",
                "Payment Integration",
                "Inventory Management",
                "Security",
            ]),
            QuestionOption::new(
                "consultation",
                "Technical Consultation",
                "Architecture review, code audit, or planning",
            )
            .skills(&[
                "System Architecture",
                "Code Review",
                "Technical Planning",
                "Best Practices",
            ]),
        ],
    },
    Question {
        id: TIMELINE,
        title: "What's your timeline for this project?",
        description: "This helps me understand urgency and plan accordingly.",
        multiple: false,
        options: &[
            QuestionOption::new("urgent", "ASAP (1-2 weeks)", "Need to start immediately")
                .impact("high"),
            QuestionOption::new("soon", "Soon (1 month)", "Ready to start within a month")
                .impact("medium"),
            QuestionOption::new("flexible", "Flexible", "No specific deadline").impact("low"),
            QuestionOption::new("planning", "Just Planning", "Exploring options for future")
                .impact("none"),
        ],
    },
    Question {
        id: BUDGET,
        title: "What's your budget range?",
        description: "This helps me recommend the right approach.",
        multiple: false,
        options: &[
            QuestionOption::new("basic", "Basic ($1,000 - $5,000)", "Simple website or MVP")
                .match_hint("good"),
            QuestionOption::new(
                "standard",
                "Standard ($5,000 - $15,000)",
                "Full website or simple web app",
            )
            .match_hint("excellent"),
            QuestionOption::new(
                "premium",
                "Premium ($15,000 - $50,000)",
                "Complex application with advanced features",
            )
            .match_hint("excellent"),
            QuestionOption::new(
                "enterprise",
                "Enterprise ($50,000+)",
                "Large-scale platform or multiple systems",
            )
            .match_hint("good"),
            QuestionOption::new("not-sure", "Not Sure Yet", "Need help estimating")
                .match_hint("fair"),
        ],
    },
    Question {
        id: TECH_REQUIREMENTS,
        title: "What technical requirements do you have?",
        description: "Select all that apply to your project.",
        multiple: true,
        options: &[
            QuestionOption::new(
                "responsive",
                "Mobile Responsive",
                "Works perfectly on all devices",
            )
            .skills(&["Responsive Design", "Mobile-First", "Cross-browser Testing"]),
            QuestionOption::new(
                "database",
                "Database & Storage",
                "Need to store and manage data",
            )
            .skills(&["Database Design", "API Development", "Data Modeling"]),
            QuestionOption::new(
                "payments",
                "Payment Processing",
                "Accept credit cards or online payments",
            )
            .skills(&["Stripe/PayPal", "Security", "Payment Gateway Integration"]),
            QuestionOption::new(
                "auth",
                "User Accounts & Login",
                "User registration and authentication",
            )
            .skills(&["Authentication", "Authorization", "Security Best Practices"]),
            QuestionOption::new(
                "api",
                "Third-party API Integration",
                "Connect with other services",
            )
            .skills(&["API Integration", "Webhooks", "Data Synchronization"]),
            QuestionOption::new(
                "cms",
                "Content Management",
                "Easy content updates for non-technical users",
            )
            .skills(&["CMS Development", "Admin Panels", "Content Modeling"]),
        ],
    },
    Question {
        id: CURRENT_SETUP,
        title: "What's your current technical situation?",
        description: "This helps me understand how to best support you.",
        multiple: false,
        options: &[
            QuestionOption::new(
                "new",
                "Starting from Scratch",
                "No existing code or systems",
            )
            .support("full"),
            QuestionOption::new(
                "existing",
                "Have Existing System",
                "Need improvements or new features",
            )
            .support("enhancement"),
            QuestionOption::new(
                "team",
                "Part of a Development Team",
                "Need specific expertise or extra hands",
            )
            .support("collaboration"),
            QuestionOption::new(
                "design",
                "Have Designs Ready",
                "Need development implementation",
            )
            .support("implementation"),
            QuestionOption::new(
                "idea",
                "Just an Idea",
                "Need help with planning and execution",
            )
            .support("guidance"),
        ],
    },
];

/// Look up a question by id.
pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_are_unique() {
        for (i, a) in QUESTIONS.iter().enumerate() {
            for b in &QUESTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn option_values_are_unique_within_each_question() {
        for q in QUESTIONS {
            for (i, a) in q.options.iter().enumerate() {
                for b in &q.options[i + 1..] {
                    assert_ne!(a.value, b.value, "duplicate value in question {}", q.id);
                }
            }
        }
    }

    #[test]
    fn only_the_tech_requirements_question_is_multi_select() {
        for q in QUESTIONS {
            assert_eq!(q.multiple, q.id == TECH_REQUIREMENTS);
        }
    }

    #[test]
    fn every_question_has_options() {
        assert_eq!(QUESTIONS.len(), 5);
        for q in QUESTIONS {
            assert!(!q.options.is_empty());
            for opt in q.options {
                assert!(!opt.value.is_empty());
                assert!(!opt.label.is_empty());
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(question(BUDGET).map(|q| q.id), Some(BUDGET));
        assert!(question(99).is_none());
    }
}
