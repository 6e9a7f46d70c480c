use crate::error::SearchError;
use crate::models::{ Answer, Question };
use crate::utils::{ strip_html_tags, timestamp_to_elapsed, wrap_body };
use crossterm::style::{ StyledContent, Stylize };
use std::io::{ self, Write };

const SEPARATOR: &str = "-----------------------------------------------------";
pub const DEFAULT_WIDTH: usize = 80;

/// Writes every user-facing line of the session. ANSI styling is only
/// emitted when `styled` is set.
pub struct Printer<W> {
    out: W,
    styled: bool,
    width: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, styled: bool, width: usize) -> Self {
        Self { out, styled, width }
    }

    /// Plain printer with the default wrap width.
    pub fn plain(out: W) -> Self {
        Self::new(out, false, DEFAULT_WIDTH)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, content: StyledContent<String>) -> String {
        if self.styled {
            content.to_string()
        } else {
            content.content().clone()
        }
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn question_line(&mut self, index: usize, question: &Question) -> io::Result<()> {
        writeln!(self.out, "{}. {}", index, question.title)
    }

    pub fn which_answer_message(&mut self) -> io::Result<()> {
        let text = self.paint("Enter the number of question to see the answers.".to_string().bold().magenta());
        self.line(&text)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn not_a_number(&mut self) -> io::Result<()> {
        let text = self.paint("Please enter a number".to_string().red());
        self.line(&text)
    }

    pub fn not_a_valid_number(&mut self) -> io::Result<()> {
        let text = self.paint("Please enter a valid number".to_string().red());
        self.line(&text)
    }

    pub fn question_not_answered(&mut self) -> io::Result<()> {
        let text = self.paint("This question is not answered yet!".to_string().red());
        self.line(&text)
    }

    pub fn no_questions_matching_query(&mut self) -> io::Result<()> {
        let text = self.paint("Sorry! There are no questions matching your query.".to_string().red());
        self.line(&text)
    }

    pub fn request_failed(&mut self, err: &SearchError) -> io::Result<()> {
        let text = self.paint(format!("Something went wrong: {}", err).red());
        self.line(&text)
    }

    /// Renders one answer. The link shown is always the question's link.
    pub fn answer(&mut self, index: usize, answer: &Answer, question: &Question) -> io::Result<()> {
        let title = answer.title.as_deref().unwrap_or(&question.title);
        let header = self.paint(format!("{}. {}", index, title).bold().green());
        let link = self.paint(format!("({})", question.link).blue());
        let score = self.paint(format!("Score: {}", answer.score).black().on_yellow());
        let accepted = if answer.is_accepted {
            self.paint(" ✔ accepted ".to_string().on_green())
        } else {
            String::new()
        };

        self.empty_line()?;
        self.line(SEPARATOR)?;
        self.empty_line()?;
        self.line(&header)?;
        self.line(&link)?;
        self.line(format!("{}    {}", score, accepted).trim_end())?;
        if let Some(meta) = answer_meta(answer) {
            let meta = self.paint(meta.dark_grey());
            self.line(&meta)?;
        }
        self.empty_line()?;
        let body = wrap_body(&strip_html_tags(&answer.body), self.width);
        self.line(&body)?;
        self.empty_line()?;
        self.line(SEPARATOR)?;
        self.empty_line()
    }
}

fn answer_meta(answer: &Answer) -> Option<String> {
    let author = answer.owner.as_ref().and_then(|o| o.display_name.as_deref());
    let when = (answer.creation_date > 0).then(|| timestamp_to_elapsed(answer.creation_date));
    match (author, when) {
        (Some(author), Some(when)) => Some(format!("answered by {} · {}", author, when)),
        (Some(author), None) => Some(format!("answered by {}", author)),
        (None, Some(when)) => Some(format!("answered {}", when)),
        (None, None) => None,
    }
}
