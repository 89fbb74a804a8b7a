use super::Console;
use chrono::NaiveDate;
use rand::Rng;
use std::io::{BufRead, Write};
use vocab_core::{QuizStatus, Store, Tutor, Verdict};

const PROMPT: &str = "Your answer (:s speak, :q quit) > ";
const BAR_WIDTH: usize = 20;

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Interactive fill-in-the-blank quiz over the words not yet reviewed.
pub fn run_quiz<S, R, W, G>(
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
    today: NaiveDate,
    rng: &mut G,
) -> anyhow::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    match tutor.start_quiz(rng)? {
        QuizStatus::NoVocabulary => {
            console.say("No vocabulary found! Please add words first.")?;
            return Ok(());
        }
        QuizStatus::AllReviewed => {
            console.say("🎉 You have reviewed every word! Well done!")?;
            return Ok(());
        }
        QuizStatus::Active | QuizStatus::Complete => {}
    }

    while let Some(question) = tutor.current_question() {
        let percent = tutor.quiz().map_or(0, |quiz| quiz.percent_complete());
        console.say("")?;
        console.say(progress_bar(percent))?;
        console.say(format!(
            "Q{}/{}: {}",
            question.number, question.total, question.sentence
        ))?;

        let Some(input) = console.ask(PROMPT)? else {
            tutor.leave_quiz();
            return Ok(());
        };
        match input.as_str() {
            ":q" => {
                tutor.leave_quiz();
                console.say("Quiz stopped. Nothing was recorded.")?;
                return Ok(());
            }
            ":s" => {
                let response = tutor.speak_quiz_word();
                console.apply(response.effects)?;
                continue;
            }
            _ => {}
        }

        let response = tutor.submit_answer(&input, today)?;
        let Some(answer) = response.value else {
            continue;
        };
        match &answer.verdict {
            Verdict::Correct => console.say("✅ Correct!")?,
            Verdict::Incorrect { expected } => {
                console.say(format!("❌ Oops! It was \"{expected}\"."))?
            }
        }
        console.apply(response.effects)?;

        if let Some(score) = answer.finished {
            console.say(progress_bar(100))?;
            console.say(format!(
                "🎉 Quiz complete! Your score: {} / {}",
                score.correct, score.total
            ))?;
            return Ok(());
        }
        console.pause()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use vocab_core::{Badge, MemoryStore, QuizProgress, QuizSession};

    const SEED: u64 = 7;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    /// Correct answers in the order a quiz seeded with `SEED` asks them.
    fn correct_answers(tutor: &Tutor<MemoryStore>) -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut probe = QuizSession::start(
            &tutor.vocabulary().unwrap(),
            &tutor.reviewed().unwrap(),
            &mut rng,
        );
        let mut answers = Vec::new();
        while let Some(word) = probe.current_entry().map(|entry| entry.word.clone()) {
            probe.submit_answer(&word);
            answers.push(word);
        }
        answers
    }

    fn run(tutor: &mut Tutor<MemoryStore>, input: &str) -> String {
        let mut console = console(input);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        run_quiz(tutor, &mut console, today(), &mut rng).unwrap();
        output(console)
    }

    #[test]
    fn perfect_quiz() {
        let mut tutor = tutor();
        let input = correct_answers(&tutor)
            .iter()
            .map(|word| format!("{}\n", word.to_uppercase()))
            .collect::<String>();

        let out = run(&mut tutor, &input);
        assert_eq!(out.matches("✅ Correct!").count(), 3);
        assert!(out.contains("🌟 Perfect Score!"));
        assert!(out.contains("🎉 Quiz complete! Your score: 3 / 3"));
        assert!(out.contains("[####################] 100%"));

        assert_eq!(
            tutor.quiz_progress().unwrap(),
            QuizProgress { correct: 3, total: 3 }
        );
        assert!(tutor.badges().unwrap().has(Badge::Perfect));
    }

    #[test]
    fn wrong_answers_show_the_word() {
        let mut tutor = tutor();
        let out = run(&mut tutor, "zzz\nzzz\nzzz\n");
        assert_eq!(out.matches("❌ Oops! It was").count(), 3);
        assert!(out.contains("❌ Oops! It was \"cat\"."));
        assert!(out.contains("👀 Try next!"));
        assert!(out.contains("Your score: 0 / 3"));
        assert!(tutor.badges().unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut tutor = tutor();
        let out = run(&mut tutor, "\n\nzzz\n");
        assert_eq!(out.matches("Q1/3").count(), 3);
        assert!(out.contains("Q2/3"));
    }

    #[test]
    fn quitting_records_nothing() {
        let mut tutor = tutor();
        let out = run(&mut tutor, "zzz\n:q\n");
        assert!(out.contains("Quiz stopped."));
        assert!(tutor.quiz().is_none());
        assert_eq!(tutor.quiz_progress().unwrap(), QuizProgress::default());
    }

    #[test]
    fn end_of_input_leaves_quiz() {
        let mut tutor = tutor();
        run(&mut tutor, "");
        assert!(tutor.quiz().is_none());
    }

    #[test]
    fn speak_does_not_advance() {
        let mut tutor = tutor();
        let mut console = silent_console(":s\n");
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        run_quiz(&mut tutor, &mut console, today(), &mut rng).unwrap();
        let out = output(console);
        assert!(out.contains("Speech not supported!"));
        assert_eq!(out.matches("Q1/3").count(), 2);
    }

    #[test]
    fn shows_progress_between_questions() {
        let mut tutor = tutor();
        let out = run(&mut tutor, "zzz\n");
        assert!(out.contains("[--------------------]   0%"));
        assert!(out.contains("[######--------------]  33%"));
    }

    #[test]
    fn reviewed_words_are_skipped() {
        let mut tutor = tutor();
        for _ in 0..3 {
            tutor.mark_reviewed(today()).unwrap();
        }
        let out = run(&mut tutor, "");
        assert_eq!(out, "🎉 You have reviewed every word! Well done!\n");
    }

    #[test]
    fn empty_vocabulary() {
        let mut tutor = Tutor::new(MemoryStore::new()).unwrap();
        let out = run(&mut tutor, "");
        assert_eq!(out, "No vocabulary found! Please add words first.\n");
    }
}
