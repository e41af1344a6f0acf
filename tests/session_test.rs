//! 対話セッションの一連の流れに関するテスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::io::Cursor;

use country_translator::codes::{
    CountryCodeConverter,
    LanguageCodeConverter,
};
use country_translator::translator::{
    CountryRecord,
    InMemoryTranslator,
    JsonTranslator,
    Translator,
};
use country_translator::Session;

/// Run one session over the bundled converter tables with scripted input,
/// returning everything it printed.
fn run_session<T: Translator>(translator: &T, script: &str) -> String {
    let countries = CountryCodeConverter::bundled().unwrap();
    let languages = LanguageCodeConverter::bundled().unwrap();
    let session = Session::new(translator, &countries, &languages);

    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn translates_one_round_over_the_bundled_dataset() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "Germany\nFrench\nquit\n");

    assert!(output.contains("Germany in French is Allemagne"));
    assert!(output.contains("Press enter to continue or quit to exit."));
}

#[test]
fn country_menu_is_sorted_and_prompted() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "quit\n");

    let country_lines: Vec<&str> =
        output.lines().take_while(|line| !line.starts_with("select a country")).collect();
    let mut sorted = country_lines.clone();
    sorted.sort_unstable();
    assert_eq!(country_lines, sorted);
    assert!(country_lines.contains(&"Andorra"));
    assert!(output.contains("select a country from above (or quit):"));
    assert!(!output.contains(" is "));
}

#[test]
fn quit_at_the_language_prompt_ends_the_session() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "Japan\nquit\n");

    assert!(output.contains("select a language from above (or quit):"));
    assert!(!output.contains("Japan in"));
}

#[test]
fn unknown_country_name_reprompts() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "Atlantis\nJapan\nGerman\nquit\n");

    assert!(output.contains("Unknown country 'Atlantis', please pick one from the list."));
    assert!(output.contains("Japan in German is Japan"));
}

#[test]
fn unknown_language_name_reprompts() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "Japan\nKlingon\nJapanese\nquit\n");

    assert!(output.contains("Unknown language 'Klingon', please pick one from the list."));
    assert!(output.contains("Japan in Japanese is 日本"));
}

#[test]
fn missing_translation_renders_a_notice() {
    // Hand-built store: Canada only carries an English name, but "French"
    // is still a name the language table can resolve.
    let translator = InMemoryTranslator::new().with_record(
        CountryRecord::new("124", "ca", "can").with_translation("en", "Canada"),
    );

    let output = run_session(&translator, "Canada\nFrench\nquit\n");

    assert!(output.contains("No translation of Canada into French is available."));
}

#[test]
fn end_of_input_counts_as_quit() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "");

    assert!(output.contains("select a country from above (or quit):"));
}

#[test]
fn several_rounds_separated_by_the_continue_gate() {
    let translator = JsonTranslator::bundled().unwrap();

    let output = run_session(&translator, "Japan\nGerman\n\nCanada\nFrench\nquit\n");

    assert!(output.contains("Japan in German is Japan"));
    assert!(output.contains("Canada in French is Canada"));
}
