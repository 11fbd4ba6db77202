//! Interactive prompts on any line-oriented reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests drive it with scripted input.

use crate::error::{BikeshareError, Result};
use crate::models::{City, FilterSelection, Month, WEEKDAYS, capwords, weekday_name};
use crate::report::separator;
use std::io::{BufRead, Write};

pub const YES_NO: [&str; 2] = ["yes", "no"];

/// Which time filters the user wants to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Month,
    Day,
    Both,
    None,
}

impl FilterKind {
    const ALL: [FilterKind; 4] = [
        FilterKind::Month,
        FilterKind::Day,
        FilterKind::Both,
        FilterKind::None,
    ];

    fn key(self) -> &'static str {
        match self {
            FilterKind::Month => "month",
            FilterKind::Day => "day",
            FilterKind::Both => "both",
            FilterKind::None => "none",
        }
    }
}

/// A question/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask `question` until the answer matches one of the option keys (case-insensitive)
    /// and return the value paired with it.
    fn ask<T: Clone>(&mut self, question: &str, options: &[(String, T)]) -> Result<T> {
        let shown: Vec<String> = options.iter().map(|(k, _)| capwords(k)).collect();
        loop {
            write!(
                self.output,
                "\n{question}. [Valid inputs: \"{}\"]\n",
                shown.join("\", \"")
            )?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if let Some((_, value)) = options.iter().find(|(k, _)| *k == answer) {
                return Ok(value.clone());
            }
            log::debug!("rejected answer {answer:?}");
        }
    }

    /// Ask `question` until the answer matches one of `valid` (case-insensitive).
    ///
    /// Returns the matching value in lower case.
    pub fn get_input<S: AsRef<str>>(&mut self, question: &str, valid: &[S]) -> Result<String> {
        let options: Vec<(String, String)> = valid
            .iter()
            .map(|v| {
                let key = v.as_ref().to_lowercase();
                (key.clone(), key)
            })
            .collect();
        self.ask(question, &options)
    }

    /// Like [`Console::get_input`], but answers with the typed choice whose `key` matched.
    pub fn choose<T: Copy>(
        &mut self,
        question: &str,
        choices: &[T],
        key: impl Fn(T) -> &'static str,
    ) -> Result<T> {
        let options: Vec<(String, T)> = choices
            .iter()
            .map(|&c| (key(c).to_lowercase(), c))
            .collect();
        self.ask(question, &options)
    }

    /// Ask for the city and the optional month/day filters.
    pub fn get_filters(&mut self) -> Result<FilterSelection> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = self.choose("Please insert the city to analyze", &City::ALL, |c| c.key())?;
        let kind = self.choose(
            "Would you like to filter the data by month, day, both, or not at all? \
             Type \"none\" for no time filter",
            &FilterKind::ALL,
            FilterKind::key,
        )?;

        let mut selection = FilterSelection::all(city);
        if matches!(kind, FilterKind::Month | FilterKind::Both) {
            let month =
                self.choose("Which month the rental started?", &Month::ALL, |m| m.key())?;
            selection.month = Some(month);
        }
        if matches!(kind, FilterKind::Day | FilterKind::Both) {
            let day = self.choose("Which day the rental started?", &WEEKDAYS, weekday_name)?;
            selection.day = Some(day);
        }

        writeln!(self.output, "{}", separator())?;
        Ok(selection)
    }

    /// Free-text restart question; `yes`/`y` in any case means restart.
    pub fn ask_restart(&mut self) -> Result<bool> {
        writeln!(self.output, "\nWould you like to restart? Enter yes or no.")?;
        self.output.flush()?;
        let answer = match self.read_line() {
            Ok(a) => a,
            Err(BikeshareError::InputClosed) => return Ok(false),
            Err(e) => return Err(e),
        };
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn get_input_reprompts_until_valid_and_lowercases() {
        let mut c = console("boston\nNEW York City\n");
        let got = c.get_input("City", &["chicago", "new york city"]).unwrap();
        assert_eq!(got, "new york city");
        let shown = String::from_utf8(c.output.clone()).unwrap();
        assert_eq!(shown.matches("[Valid inputs: \"Chicago\", \"New York City\"]").count(), 2);
    }

    #[test]
    fn get_input_errors_on_eof() {
        let mut c = console("nope\n");
        assert!(matches!(
            c.get_input("Q", &YES_NO),
            Err(BikeshareError::InputClosed)
        ));
    }

    #[test]
    fn get_filters_both() {
        let mut c = console("washington\nboth\nMarch\nfriday\n");
        let sel = c.get_filters().unwrap();
        assert_eq!(
            sel,
            FilterSelection {
                city: City::Washington,
                month: Some(Month::March),
                day: Some(Weekday::Fri),
            }
        );
    }

    #[test]
    fn choose_returns_the_typed_value() {
        let mut c = console("tuesday\n");
        let day = c.choose("Day", &WEEKDAYS, weekday_name).unwrap();
        assert_eq!(day, Weekday::Tue);
        let shown = String::from_utf8(c.output.clone()).unwrap();
        assert!(shown.contains("\"Monday\", \"Tuesday\""));
    }

    #[test]
    fn get_filters_month_only() {
        let mut c = console("New York City\nMONTH\njune\n");
        let sel = c.get_filters().unwrap();
        assert_eq!(sel.city, City::NewYorkCity);
        assert_eq!(sel.month, Some(Month::June));
        assert_eq!(sel.day, None);
    }

    #[test]
    fn get_filters_none_skips_month_and_day() {
        let mut c = console("chicago\nnone\n");
        assert_eq!(c.get_filters().unwrap(), FilterSelection::all(City::Chicago));
    }

    #[test]
    fn restart_accepts_y_and_yes() {
        assert!(console("Y\n").ask_restart().unwrap());
        assert!(console("yes\n").ask_restart().unwrap());
        assert!(!console("no\n").ask_restart().unwrap());
        assert!(!console("").ask_restart().unwrap());
    }
}
