//! Interactive lookup session
//!
//! The terminal loop: list countries, list the chosen country's languages,
//! print one translation per round. The session is generic over the
//! [`Translator`] and over its reader/writer so tests can drive it with
//! in-memory buffers instead of a terminal.

use std::io::{
    self,
    BufRead,
    Write,
};

use crate::codes::{
    CountryCodeConverter,
    LanguageCodeConverter,
};
use crate::translator::Translator;

/// Typing this at any prompt ends the session.
pub const QUIT: &str = "quit";

/// One interactive session over a data store and its two converters.
///
/// The store speaks alpha3/language codes; everything the user sees or
/// types is a display name resolved through the converters. Codes without
/// a table entry are skipped in menus, and typed names the tables do not
/// know re-prompt with a notice.
#[derive(Debug)]
pub struct Session<'a, T> {
    translator: &'a T,
    countries: &'a CountryCodeConverter,
    languages: &'a LanguageCodeConverter,
}

/// Outcome of one prompt: a resolved (code, display name) pair, or quit.
enum Selection {
    Picked { code: String, name: String },
    Quit,
}

impl<'a, T: Translator> Session<'a, T> {
    #[must_use]
    pub fn new(
        translator: &'a T,
        countries: &'a CountryCodeConverter,
        languages: &'a LanguageCodeConverter,
    ) -> Self {
        Self { translator, countries, languages }
    }

    /// Run rounds until the user quits or input ends.
    ///
    /// # Errors
    /// Only on reader/writer I/O failures; lookup misses are rendered as
    /// notices, never errors.
    pub fn run<R: BufRead, W: Write>(&self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        loop {
            let Selection::Picked { code: country_code, name: country_name } =
                self.prompt_for_country(reader, writer)?
            else {
                break;
            };

            let Selection::Picked { code: language_code, name: language_name } =
                self.prompt_for_language(reader, writer, &country_code)?
            else {
                break;
            };

            tracing::debug!(%country_code, %language_code, "running translation round");
            match self.translator.translate(&country_code, &language_code) {
                Some(translation) => {
                    writeln!(writer, "{country_name} in {language_name} is {translation}")?;
                }
                None => {
                    writeln!(
                        writer,
                        "No translation of {country_name} into {language_name} is available."
                    )?;
                }
            }

            writeln!(writer, "Press enter to continue or quit to exit.")?;
            match read_line(reader)? {
                Some(text) if text != QUIT => {}
                _ => break,
            }
        }
        Ok(())
    }

    fn prompt_for_country<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<Selection> {
        let mut names: Vec<String> = self
            .translator
            .countries()
            .iter()
            .filter_map(|code| self.countries.from_country_code(code))
            .map(str::to_string)
            .collect();
        names.sort();

        for name in &names {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer, "select a country from above (or quit):")?;

        loop {
            let Some(input) = read_line(reader)? else {
                return Ok(Selection::Quit);
            };
            if input == QUIT {
                return Ok(Selection::Quit);
            }
            if let Some(code) = self.countries.from_country(&input) {
                return Ok(Selection::Picked { code: code.to_string(), name: input });
            }
            writeln!(writer, "Unknown country '{input}', please pick one from the list.")?;
        }
    }

    fn prompt_for_language<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        country_code: &str,
    ) -> io::Result<Selection> {
        let mut names: Vec<String> = self
            .translator
            .country_languages(country_code)
            .iter()
            .filter_map(|code| self.languages.from_language_code(code))
            .map(str::to_string)
            .collect();
        names.sort();

        for name in &names {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer, "select a language from above (or quit):")?;

        loop {
            let Some(input) = read_line(reader)? else {
                return Ok(Selection::Quit);
            };
            if input == QUIT {
                return Ok(Selection::Quit);
            }
            if let Some(code) = self.languages.from_language(&input) {
                return Ok(Selection::Picked { code: code.to_string(), name: input });
            }
            writeln!(writer, "Unknown language '{input}', please pick one from the list.")?;
        }
    }
}

/// One trimmed input line; `None` at end of input, which counts as a quit.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    let read = reader.read_line(&mut buffer)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
