//! Guess pool selection
//!
//! Which vocabulary suggestions are drawn from. Ranking always measures
//! information against the possible answers; the pool only decides which
//! words get scored.

use clap::ValueEnum;
use std::fmt;

/// Source of words scored as guesses
///
/// Parsed from `--pool`; unknown names are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GuessPool {
    /// Only words that are still possible answers (hard-mode friendly)
    #[default]
    #[value(alias = "remaining")]
    Candidates,
    /// The full possible-answer vocabulary, including eliminated answers
    #[value(alias = "possible")]
    Answers,
    /// Every allowed guess, answer or not
    #[value(alias = "all")]
    Allowed,
}

impl fmt::Display for GuessPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Candidates => "candidates",
            Self::Answers => "answers",
            Self::Allowed => "allowed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Result<GuessPool, String> {
        GuessPool::from_str(name, true)
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(parse("answers"), Ok(GuessPool::Answers));
        assert_eq!(parse("ALL"), Ok(GuessPool::Allowed));
        assert_eq!(parse("remaining"), Ok(GuessPool::Candidates));
        assert_eq!(parse("possible"), Ok(GuessPool::Answers));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(parse("alowed").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn display_round_trips() {
        for pool in GuessPool::value_variants() {
            assert_eq!(parse(&pool.to_string()), Ok(*pool));
        }
    }

    #[test]
    fn cli_rejects_misspelled_pool() {
        use clap::Parser;

        #[derive(Parser)]
        struct Args {
            #[arg(long, value_enum, default_value_t)]
            pool: GuessPool,
        }

        assert_eq!(Args::try_parse_from(["t"]).unwrap().pool, GuessPool::Candidates);
        assert_eq!(
            Args::try_parse_from(["t", "--pool", "all"]).unwrap().pool,
            GuessPool::Allowed
        );
        assert!(Args::try_parse_from(["t", "--pool", "alowed"]).is_err());
    }
}
