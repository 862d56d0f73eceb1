use std::time::Duration;

use form_lessons::quiz::{CelebrationPhase, CelebrationTimeline, SessionTracker, Submission};
use form_lessons::{builtin_quiz, Question, QuizOption};

fn question(id: &str, correct: usize) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Which option is right for {id}?"),
        hint: None,
        options: (0..4)
            .map(|index| QuizOption {
                id: format!("{id}-{index}"),
                text: format!("Choice {index}"),
                is_correct: index == correct,
                explanation: None,
            })
            .collect(),
    }
}

fn session() -> SessionTracker {
    let questions = vec![
        question("q1", 1),
        question("q2", 0),
        question("q3", 2),
        question("q4", 3),
    ];
    SessionTracker::new(questions, CelebrationTimeline::default()).unwrap()
}

#[test]
fn mixed_answers_across_navigation() {
    let mut s = session();

    s.select_option("q1-1");
    assert_eq!(s.submit_current().submission, Submission::Correct);
    assert_eq!(s.completed_indices().collect::<Vec<_>>(), vec![0]);
    assert_eq!(s.rounded_percentage(), 25);

    s.go_to_next();
    s.go_to_next();
    assert_eq!(s.presenter_key().question_id, "q3");

    s.select_option("q3-0");
    assert_eq!(s.submit_current().submission, Submission::Incorrect);
    assert_eq!(s.completed_indices().collect::<Vec<_>>(), vec![0]);
    assert_eq!(s.rounded_percentage(), 25);

    s.reset_current();
    s.select_option("q3-2");
    assert_eq!(s.submit_current().submission, Submission::Correct);
    assert_eq!(s.completed_indices().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(s.progress_label(), "2 / 4 completed");
    assert_eq!(s.percentage(), 50.0);
}

#[test]
fn last_correct_answer_completes_session_in_same_event() {
    let mut s = session();
    for (index, option) in ["q1-1", "q2-0", "q3-2"].into_iter().enumerate() {
        s.select_option(option);
        let report = s.submit_current();
        assert!(!report.all_complete_reached, "question {index}");
        s.go_to_next();
    }
    assert!(!s.is_all_complete());

    s.select_option("q4-3");
    let report = s.submit_current();
    assert_eq!(report.submission, Submission::Correct);
    assert!(report.all_complete_reached);
    assert!(s.is_all_complete());
    assert_eq!(s.rounded_percentage(), 100);

    s.reset_session();
    assert!(!s.is_all_complete());
    assert_eq!(s.rounded_percentage(), 0);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn empty_submission_changes_nothing() {
    let mut s = session();
    let report = s.submit_current();
    assert_eq!(report.submission, Submission::Ignored);
    assert!(!s.presenter().is_submitted());
    assert_eq!(s.completed_count(), 0);
}

#[test]
fn builtin_quiz_runs_end_to_end() {
    let quiz = builtin_quiz().unwrap();
    let answers: Vec<String> = quiz
        .questions
        .iter()
        .map(|q| q.correct_option().unwrap().id.clone())
        .collect();

    let mut s = SessionTracker::new(quiz.questions, CelebrationTimeline::default()).unwrap();
    for answer in &answers {
        s.select_option(answer);
        s.submit_current();
        s.go_to_next();
    }
    assert!(s.is_all_complete());
}

#[tokio::test(start_paused = true)]
async fn celebration_does_not_outlive_its_question() {
    let mut s = session();
    s.select_option("q1-1");
    s.submit_current();
    assert_eq!(
        s.presenter().celebration().phase(),
        CelebrationPhase::Showing
    );

    s.go_to_next();
    assert_eq!(s.presenter().celebration().phase(), CelebrationPhase::Hidden);

    s.go_to_previous();
    tokio::time::sleep(Duration::from_secs(7)).await;
    assert_eq!(s.presenter().celebration().phase(), CelebrationPhase::Hidden);
    assert!(s.is_completed(0));
}
