use serde::Serialize;

use crate::scoring::domain::CompetencyDimension;

/// One selectable answer and its normalized score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub score: f64,
}

/// Self-assessment question tagged with the competency it measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: CompetencyDimension,
    pub weight: f64,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

const fn option(id: &'static str, label: &'static str, score: f64) -> AnswerOption {
    AnswerOption { id, label, score }
}

/// Question bank for assessment version `v1`. Changing scores or weights here
/// requires bumping `ASSESSMENT_VERSION`.
pub static QUESTION_BANK: [Question; 12] = [
    Question {
        id: "svc_greeting",
        dimension: CompetencyDimension::Service,
        weight: 1.0,
        prompt: "A client walks in while you are finishing a sale. What do you do?",
        options: &[
            option("a", "Finish the sale, then approach the new client", 0.25),
            option("b", "Make eye contact and greet them within seconds", 0.75),
            option(
                "c",
                "Greet them, introduce a colleague and return personally",
                1.0,
            ),
        ],
    },
    Question {
        id: "svc_complaint",
        dimension: CompetencyDimension::Service,
        weight: 1.5,
        prompt: "A regular client returns a damaged bag and is visibly upset.",
        options: &[
            option("a", "Explain the repair policy", 0.2),
            option("b", "Apologize and start a repair request", 0.5),
            option(
                "c",
                "Apologize, offer a private space and a loan piece",
                0.8,
            ),
            option(
                "d",
                "Own the issue end to end and follow up after resolution",
                1.0,
            ),
        ],
    },
    Question {
        id: "svc_ceremony",
        dimension: CompetencyDimension::Service,
        weight: 1.0,
        prompt: "How do you close a high-value purchase?",
        options: &[
            option("a", "Package the item quickly", 0.0),
            option("b", "Follow the brand's packaging ceremony", 0.6),
            option("c", "Personalize the ceremony to the occasion", 1.0),
        ],
    },
    Question {
        id: "cli_book",
        dimension: CompetencyDimension::Clienteling,
        weight: 1.5,
        prompt: "How do you maintain your client book?",
        options: &[
            option("a", "I rely on memory", 0.0),
            option("b", "I log purchases after each sale", 0.4),
            option("c", "I log preferences, sizes and life events", 0.8),
            option(
                "d",
                "I log everything and plan monthly outreach per client",
                1.0,
            ),
        ],
    },
    Question {
        id: "cli_vic",
        dimension: CompetencyDimension::Clienteling,
        weight: 1.2,
        prompt: "A VIC has not visited in six months.",
        options: &[
            option("a", "Wait for the next collection launch", 0.1),
            option("b", "Send a generic newsletter", 0.3),
            option("c", "Send a personal note with a curated selection", 0.8),
            option(
                "d",
                "Arrange a private appointment around their interests",
                1.0,
            ),
        ],
    },
    Question {
        id: "cli_events",
        dimension: CompetencyDimension::Clienteling,
        weight: 1.0,
        prompt: "How often do you bring clients to in-store events?",
        options: &[
            option("a", "Rarely", 0.2),
            option("b", "For major launches", 0.6),
            option("c", "I build guest lists for every event", 1.0),
        ],
    },
    Question {
        id: "ops_stock",
        dimension: CompetencyDimension::Operations,
        weight: 1.2,
        prompt: "A best-selling reference is out of stock.",
        options: &[
            option("a", "Tell the client it is unavailable", 0.0),
            option("b", "Check other stores", 0.5),
            option("c", "Transfer stock and review the replenishment gap", 1.0),
        ],
    },
    Question {
        id: "ops_kpi",
        dimension: CompetencyDimension::Operations,
        weight: 1.0,
        prompt: "Which store KPIs do you follow weekly?",
        options: &[
            option("a", "None", 0.0),
            option("b", "My own sales", 0.4),
            option("c", "Sales, conversion and average basket", 0.8),
            option(
                "d",
                "The full scorecard including stock turn and shrinkage",
                1.0,
            ),
        ],
    },
    Question {
        id: "ops_process",
        dimension: CompetencyDimension::Operations,
        weight: 1.0,
        prompt: "You notice a recurring error in the cash desk process.",
        options: &[
            option("a", "Work around it", 0.1),
            option("b", "Report it to your manager", 0.5),
            option("c", "Propose and document a fix", 0.9),
            option("d", "Fix it, train the team and audit the result", 1.0),
        ],
    },
    Question {
        id: "lead_briefing",
        dimension: CompetencyDimension::Leadership,
        weight: 1.0,
        prompt: "How do you contribute to the morning briefing?",
        options: &[
            option("a", "I listen", 0.2),
            option("b", "I share product updates when asked", 0.5),
            option("c", "I run parts of it and set daily objectives", 1.0),
        ],
    },
    Question {
        id: "lead_coaching",
        dimension: CompetencyDimension::Leadership,
        weight: 1.5,
        prompt: "A new colleague is struggling with the selling ceremony.",
        options: &[
            option("a", "It is the manager's job", 0.0),
            option("b", "Give tips when I have time", 0.4),
            option("c", "Pair with them on the floor", 0.7),
            option("d", "Set a coaching plan and track progress", 0.9),
            option(
                "e",
                "Coach, track progress and share learnings with the team",
                1.0,
            ),
        ],
    },
    Question {
        id: "lead_conflict",
        dimension: CompetencyDimension::Leadership,
        weight: 1.2,
        prompt: "Two colleagues argue over a shared client.",
        options: &[
            option("a", "Stay out of it", 0.0),
            option("b", "Escalate to the manager", 0.4),
            option("c", "Mediate using the store's attribution rules", 1.0),
        ],
    },
];
