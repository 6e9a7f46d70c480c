use crate::api::StackSearch;
use crate::error::SearchError;
use crate::fetch::Fetch;
use crate::models::{ Question, SearchResponse };
use crate::print::Printer;
use indicatif::{ ProgressBar, ProgressStyle };
use std::io::{ self, BufRead, Write };
use std::time::Duration;
use tracing::{ debug, info, warn };

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The search returned no questions; the prompt was never shown.
    NoResults,
    /// The user typed a sentinel or stdin was closed.
    Closed,
    /// The search request itself failed.
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Title,
    InTitle,
}

/// One interpreted line of prompt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// 1-based position in the question list.
    Pick(usize),
    NotANumber,
    OutOfRange,
}

/// Interprets a prompt line against a list of `count` questions.
///
/// `close` and `exit` are matched exactly. Anything that reads as a number
/// but is not a whole number within `1..=count` (including an empty line)
/// is out of range; everything else is not a number.
pub fn parse_selection(line: &str, count: usize) -> Selection {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == "close" || line == "exit" {
        return Selection::Exit;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Selection::OutOfRange;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value.fract() == 0.0 && value >= 1.0 && value <= count as f64 {
                Selection::Pick(value as usize)
            } else {
                Selection::OutOfRange
            }
        }
        _ => Selection::NotANumber,
    }
}

/// The interactive search, list and answer loop.
pub struct Session<F, R, W> {
    client: StackSearch<F>,
    input: R,
    printer: Printer<W>,
    mode: SearchMode,
    show_progress: bool,
    questions: Vec<Question>,
}

impl<F: Fetch, R: BufRead, W: Write> Session<F, R, W> {
    pub fn new(client: StackSearch<F>, input: R, printer: Printer<W>) -> Self {
        Self {
            client,
            input,
            printer,
            mode: SearchMode::default(),
            show_progress: false,
            questions: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    /// Searches for `query`, lists the matches and then serves answer
    /// lookups until the user leaves.
    pub fn run(&mut self, query: &str) -> io::Result<Outcome> {
        let response = match self.search(query) {
            Ok(response) => response,
            Err(err) => {
                warn!("Search for '{}' failed: {}", query, err);
                self.printer.request_failed(&err)?;
                return Ok(Outcome::Failed);
            }
        };

        if response.items.is_empty() {
            self.printer.no_questions_matching_query()?;
            return Ok(Outcome::NoResults);
        }

        self.questions = response.items;
        self.printer.empty_line()?;
        for (i, question) in self.questions.iter().enumerate() {
            self.printer.question_line(i + 1, question)?;
        }
        self.printer.empty_line()?;
        self.printer.which_answer_message()?;

        self.prompt_loop()
    }

    fn prompt_loop(&mut self) -> io::Result<Outcome> {
        loop {
            self.printer.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed, leaving the prompt");
                self.printer.empty_line()?;
                return Ok(Outcome::Closed);
            }

            match parse_selection(&line, self.questions.len()) {
                Selection::Exit => return Ok(Outcome::Closed),
                Selection::NotANumber => self.printer.not_a_number()?,
                Selection::OutOfRange => self.printer.not_a_valid_number()?,
                Selection::Pick(choice) => self.show_answers(choice)?,
            }
        }
    }

    fn show_answers(&mut self, choice: usize) -> io::Result<()> {
        let question = &self.questions[choice - 1];
        info!("Fetching answers for question {}", question.question_id);

        let spinner = spinner(self.show_progress, "Fetching answers");
        let result = self.client.get_answers(question.question_id);
        spinner.finish_and_clear();

        match result {
            Err(err) => {
                warn!("Answer lookup for question {} failed: {}", question.question_id, err);
                self.printer.request_failed(&err)
            }
            Ok(response) if response.items.is_empty() => self.printer.question_not_answered(),
            Ok(response) => {
                for (i, answer) in response.items.iter().enumerate() {
                    self.printer.answer(i + 1, answer, question)?;
                }
                Ok(())
            }
        }
    }

    fn search(&self, query: &str) -> Result<SearchResponse<Question>, SearchError> {
        let spinner = spinner(self.show_progress, "Searching for your question in Stack Overflow");
        let result = match self.mode {
            SearchMode::Title => self.client.search_by_title(query),
            SearchMode::InTitle => self.client.search_by_intitle(query),
        };
        spinner.finish_and_clear();
        result
    }
}

fn spinner(visible: bool, message: &'static str) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
