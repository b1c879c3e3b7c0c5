use super::*;

const TWO_QUESTIONS: &str = "Q1: Stem one\nA) a\nB) b\nC) c\nD) d\nAnswer: B\n\nQ2: Stem two\nA) a\nB) b\nC) c\nD) d\nAnswer: C\n";

#[test]
fn parses_two_blocks_in_order() {
    let questions = QuizDefinition::parse(TWO_QUESTIONS).into_questions();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].ordinal, 1);
    assert_eq!(questions[0].stem, "Stem one");
    assert_eq!(questions[0].answer, Choice::B);
    assert_eq!(questions[1].ordinal, 2);
    assert_eq!(questions[1].stem, "Stem two");
    assert_eq!(questions[1].answer, Choice::C);
}

#[test]
fn extracts_all_four_options() {
    let questions = QuizDefinition::parse(TWO_QUESTIONS).into_questions();
    assert_eq!(questions[0].option(Choice::A), "a");
    assert_eq!(questions[0].option(Choice::B), "b");
    assert_eq!(questions[0].option(Choice::C), "c");
    assert_eq!(questions[0].option(Choice::D), "d");
}

#[test]
fn accepts_both_numbering_dialects() {
    for header in &["Q3:", "Q3.", "3.", "3:", "q3:", "Q 3:"] {
        let text = format!("{} Stem\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n", header);
        let questions = QuizDefinition::parse(&text).into_questions();
        assert_eq!(questions.len(), 1, "header {:?} did not match", header);
        assert_eq!(questions[0].ordinal, 3);
    }
}

#[test]
fn joins_multi_line_stems() {
    let text = "Q1: A stem that wraps\nonto a second line\nA) a\nB) b\nC) c\nD) d\nAnswer: D\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions[0].stem, "A stem that wraps onto a second line");
}

#[test]
fn answer_letter_is_case_insensitive() {
    let text = "Q1: Stem\nA) a\nB) b\nC) c\nD) d\nanswer: d\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions[0].answer, Choice::D);
}

#[test]
fn tolerates_whitespace_around_option_markers() {
    let text = "Q1: Stem\n  A ) a\n  B ) b\n  C ) c\n  D ) d\nAnswer: A\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].option(Choice::B), "b");
}

#[test]
fn block_without_answer_line_is_dropped() {
    let text = "Q1: Stem one\nA) a\nB) b\nC) c\nD) d\nAnswer: B\n\nQ2: Stem two\nA) a\nB) b\nC) c\nD) d\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].stem, "Stem one");
}

#[test]
fn garbage_yields_an_empty_set() {
    let questions = QuizDefinition::parse("not a quiz at all\njust prose\n").into_questions();
    assert!(questions.is_empty());
}

#[test]
fn variant_tag_is_stripped_from_stem_but_kept_raw() {
    let text = "Q1: Which mineral? (variant 4-7)\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions[0].stem, "Which mineral?");
    assert_eq!(questions[0].stem_raw, "Which mineral? (variant 4-7)");
}

#[test]
fn stem_reduced_to_nothing_is_dropped() {
    let text = "Q1: (variant 2-1)\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n";
    assert!(QuizDefinition::parse(text).into_questions().is_empty());
}

#[test]
fn unparseable_ordinal_sorts_as_zero() {
    let text = "99999999999999999999: Stem\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n";
    let questions = QuizDefinition::parse(text).into_questions();
    assert_eq!(questions[0].ordinal, 0);
}

#[test]
fn chunks_split_at_question_headers() {
    let text = "preamble\nQ1: one\nfiller\n2. two\nQ 3: three\n";
    let chunks = split_chunks(text);
    assert_eq!(
        chunks,
        vec!["preamble\n", "Q1: one\nfiller\n", "2. two\n", "Q 3: three\n"]
    );
}

#[test]
fn chunk_rescan_finds_the_same_blocks() {
    assert_eq!(rescan_chunks(TWO_QUESTIONS), scan(TWO_QUESTIONS));
}

#[test]
fn normalize_stem_is_idempotent() {
    let once = normalize_stem("  A   stem (variant 1-2)  here ");
    assert_eq!(normalize_stem(&once), once);
}

#[test]
fn collapse_whitespace_flattens_runs_and_trims() {
    assert_eq!(collapse_whitespace("  a\n\tb   c "), "a b c");
}

#[test]
fn canonical_block_round_trips() {
    let questions = QuizDefinition::parse(TWO_QUESTIONS).into_questions();
    for question in &questions {
        let reparsed = QuizDefinition::parse(&question.to_block()).into_questions();
        assert_eq!(&reparsed, &[question.clone()]);
    }
}

#[test]
fn open_reports_unreadable_files() {
    assert!(QuizDefinition::open(Path::new("/no/such/quiz.txt")).is_err());
}
