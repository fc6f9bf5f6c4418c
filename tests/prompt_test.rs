use std::cell::RefCell;

use wecon::error::Result;
use wecon::prompt::{ask_project_metadata, DefaultsPrompter, ProjectAnswers, Prompter};

/// Answers questions from a script and records what was asked.
struct ScriptedPrompter {
    answers: RefCell<Vec<&'static str>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&'static str]) -> Self {
        Self { answers: RefCell::new(answers.to_vec()), asked: RefCell::new(Vec::new()) }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, question: &str, default: &str) -> Result<String> {
        self.asked.borrow_mut().push(question.to_string());
        let mut answers = self.answers.borrow_mut();
        if answers.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answers.remove(0).to_string())
        }
    }
}

#[test]
fn test_defaults_prompter() {
    let metadata = ask_project_metadata(
        &DefaultsPrompter,
        ProjectAnswers::default(),
        "",
        3000,
        "my_api",
        "A Wecon-powered API",
    )
    .unwrap();
    assert_eq!(metadata.description, "A Wecon-powered API");
    assert_eq!(metadata.author, "");
    assert_eq!(metadata.port, 3000);
    assert_eq!(metadata.db_name, "my_api");
}

#[test]
fn test_only_missing_fields_are_asked() {
    let prompter = ScriptedPrompter::new(&["Ada", "8080"]);
    let answers = ProjectAnswers {
        description: Some("Shop API".to_string()),
        db_name: Some("shop".to_string()),
        ..ProjectAnswers::default()
    };
    let metadata = ask_project_metadata(&prompter, answers, "", 3000, "x", "y").unwrap();

    assert_eq!(*prompter.asked.borrow(), vec!["Author", "Server port"]);
    assert_eq!(metadata.description, "Shop API");
    assert_eq!(metadata.author, "Ada");
    assert_eq!(metadata.port, 8080);
    assert_eq!(metadata.db_name, "shop");
}

#[test]
fn test_invalid_port_falls_back_to_default() {
    let prompter = ScriptedPrompter::new(&["desc", "me", "not-a-port", "db"]);
    let metadata =
        ask_project_metadata(&prompter, ProjectAnswers::default(), "", 3000, "x", "y").unwrap();
    assert_eq!(metadata.port, 3000);
    assert_eq!(metadata.db_name, "db");
}
