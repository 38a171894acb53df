use thiserror::Error as ThisError;

use crate::syntax::token::Token;

/// Every way a run can fail. The first failure aborts the run; there is no
/// recovery and no partial result.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("{}", describe_unexpected(.0))]
    UnexpectedToken(String),

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error("repeat count must not be negative, got {0}")]
    InvalidRepeatCount(f64),

    #[error("expected a `[ ... ]` block")]
    MissingBlock,

    #[error("procedure `{0}` is missing its END")]
    MissingEnd(String),

    #[error("expected a name after `{0}`")]
    MissingIdentifier(String),

    #[error("recursion limit reached")]
    RecursionLimitReached,

    #[error("undefined variable `:{0}`")]
    UndefinedVariable(String),

    #[error("`{0}` cannot start an expression")]
    InvalidExpression(String),
}

impl Error {
    /// Stable short code per failure class, for hosts that branch on the
    /// kind of failure rather than on the message text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput  => "T001",
            Self::UnexpectedToken(_)    => "T002",
            Self::InvalidNumber(_)      => "T003",
            Self::InvalidRepeatCount(_) => "T004",
            Self::MissingBlock          => "T005",
            Self::MissingEnd(_)         => "T006",
            Self::MissingIdentifier(_)  => "T007",
            Self::RecursionLimitReached => "T008",
            Self::UndefinedVariable(_)  => "T009",
            Self::InvalidExpression(_)  => "T010",
        }
    }
}

// A stray number in command position is almost always a missing operand
// upstream, so it gets its own wording.
fn describe_unexpected(token: &str) -> String {
    if Token::new(token).as_number().is_some() {
        format!("unexpected number `{token}` where a command was expected")
    } else {
        format!("unexpected `{token}`")
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_get_their_own_message() {
        assert_eq!(
            Error::UnexpectedToken("42".into()).to_string(),
            "unexpected number `42` where a command was expected"
        );
        assert_eq!(Error::UnexpectedToken("JUMP".into()).to_string(), "unexpected `JUMP`");
    }

    #[test]
    fn word_spelled_numbers_are_not_numbers() {
        for word in ["inf", "nan", "infinity"] {
            assert_eq!(Error::UnexpectedToken(word.into()).to_string(), format!("unexpected `{word}`"));
        }
    }

    #[test]
    fn codes_are_distinct() {
        let all = [
            Error::UnexpectedEndOfInput,
            Error::UnexpectedToken("x".into()),
            Error::InvalidNumber("x".into()),
            Error::InvalidRepeatCount(-1.0),
            Error::MissingBlock,
            Error::MissingEnd("SQ".into()),
            Error::MissingIdentifier("MAKE".into()),
            Error::RecursionLimitReached,
            Error::UndefinedVariable("X".into()),
            Error::InvalidExpression("[".into()),
        ];
        let mut codes: Vec<_> = all.iter().map(Error::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(Error::MissingEnd("SQ".into()).to_string(), "procedure `SQ` is missing its END");
        assert_eq!(Error::UndefinedVariable("SIZE".into()).to_string(), "undefined variable `:SIZE`");
    }
}
