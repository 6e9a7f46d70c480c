use crate::config::SearchFilters;
use crate::session::SearchMode;
use chrono::NaiveDate;
use clap::{ ArgAction, Parser };
use tracing::Level;

/// Search Stack Overflow from your terminal. You can search Stack Overflow
/// questions and browse through the best answers without leaving the terminal!
#[derive(Parser, Debug)]
#[command(
    name = "stacksearch",
    version,
    after_help = "To exit the app type [exit] or [close]"
)]
pub struct Args {
    /// Words to look for in question titles; joined with spaces.
    #[arg(value_name = "QUERY")]
    pub words: Vec<String>,

    /// Query given as a single value instead of positional words.
    #[arg(short = 'q', long = "question", value_name = "QUERY")]
    pub question: Option<String>,

    /// Use the simple `intitle` search instead of the advanced title search.
    #[arg(long)]
    pub simple: bool,

    /// Only questions created on or after this day (UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from_date: Option<NaiveDate>,

    /// Only questions created on or before this day (UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to_date: Option<NaiveDate>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The search query, or `None` when there is nothing to search for.
    pub fn query(&self) -> Option<String> {
        let query = if self.words.is_empty() {
            self.question.clone()?
        } else {
            self.words.join(" ")
        };
        (!query.trim().is_empty()).then_some(query)
    }

    pub fn search_mode(&self) -> SearchMode {
        if self.simple { SearchMode::InTitle } else { SearchMode::Title }
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            from_date: self.from_date.and_then(start_of_day),
            to_date: self.to_date.and_then(start_of_day),
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn start_of_day(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("stacksearch").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn positional_words_are_joined() {
        let args = parse(&["typescript", "generics"]);
        assert_eq!(args.query().as_deref(), Some("typescript generics"));
        assert_eq!(args.search_mode(), SearchMode::Title);
    }

    #[test]
    fn question_flag_is_used_without_words() {
        assert_eq!(parse(&["-q", "borrow checker"]).query().as_deref(), Some("borrow checker"));
        assert_eq!(parse(&["-q", "ignored", "used"]).query().as_deref(), Some("used"));
    }

    #[test]
    fn no_query_means_help() {
        assert_eq!(parse(&[]).query(), None);
        assert_eq!(parse(&["--simple"]).query(), None);
        assert_eq!(parse(&["-q", "  "]).query(), None);
    }

    #[test]
    fn help_flags_are_recognised() {
        for flag in ["-h", "--help"] {
            let err = Args::try_parse_from(["stacksearch", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn dates_become_unix_bounds() {
        let args = parse(&["--from-date", "2020-01-01", "--to-date", "2020-01-02", "rust"]);
        let filters = args.filters();
        assert_eq!(filters.from_date, Some(1_577_836_800));
        assert_eq!(filters.to_date, Some(1_577_923_200));
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(parse(&["x"]).log_level(), Level::WARN);
        assert_eq!(parse(&["-vv", "x"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["--simple", "x"]).search_mode(), SearchMode::InTitle);
    }
}
