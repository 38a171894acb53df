use std::fmt;

/// One whitespace-delimited word of source text. Tokens carry no lexical
/// type; commands, operators, variables and literals are told apart when
/// they are consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Source spelling, case preserved.
    pub fn text(&self) -> &str { &self.text }

    pub fn upper(&self) -> String { self.text.to_ascii_uppercase() }

    /// Case-insensitive keyword comparison.
    pub fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn is_open_bracket(&self) -> bool { self.text == "[" }
    pub fn is_close_bracket(&self) -> bool { self.text == "]" }

    pub fn is_bracket(&self) -> bool {
        self.is_open_bracket() || self.is_close_bracket()
    }

    /// `:size` → `Some("SIZE")`.
    pub fn variable_name(&self) -> Option<String> {
        self.text.strip_prefix(':').map(str::to_ascii_uppercase)
    }

    /// Name operand of `MAKE`/`TURTLE`: accepts `"name`, `:name` or a bare
    /// word, returned uppercased with the sigil stripped.
    pub fn symbol_name(&self) -> String {
        let bare = self.text
            .strip_prefix('"')
            .or_else(|| self.text.strip_prefix(':'))
            .unwrap_or(&self.text);
        bare.to_ascii_uppercase()
    }

    /// Numeric literal value, if the token spells one. Word spellings that
    /// `f64::from_str` accepts (`inf`, `NaN`) are not literals here.
    pub fn as_number(&self) -> Option<f64> {
        let first = self.text.chars().next()?;
        if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
            return None;
        }
        self.text.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ─── Keywords ────────────────────────────────────────────────────────────────

/// Statement keywords, each with its long and short spellings folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    Back,
    Right,
    Left,
    PenUp,
    PenDown,
    Home,
    Clear,
    Color,
    SetXY,
    SetHeading,
    Repeat,
    Turtle,
    Make,
    If,
    IfElse,
}

impl Command {
    pub fn lookup(token: &Token) -> Option<Self> {
        let cmd = match token.upper().as_str() {
            "FORWARD" | "FD"  => Self::Forward,
            "BACK" | "BK"     => Self::Back,
            "RIGHT" | "RT"    => Self::Right,
            "LEFT" | "LT"     => Self::Left,
            "PENUP" | "PU"    => Self::PenUp,
            "PENDOWN" | "PD"  => Self::PenDown,
            "HOME"            => Self::Home,
            "CLEAR"           => Self::Clear,
            "COLOR"           => Self::Color,
            "SETXY"           => Self::SetXY,
            "SETHEADING"      => Self::SetHeading,
            "REPEAT"          => Self::Repeat,
            "TURTLE"          => Self::Turtle,
            "MAKE"            => Self::Make,
            "IF"              => Self::If,
            "IFELSE"          => Self::IfElse,
            _                 => return None,
        };
        Some(cmd)
    }
}

/// Reporter keywords usable in expression position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // binary
    Sum,
    Difference,
    Product,
    Quotient,
    Remainder,
    Min,
    Max,
    Power,
    Less,
    Greater,
    Equal,
    NotEqual,
    // unary
    Abs,
    Neg,
    Random,
    // constants
    Pi,
    E,
}

impl Operator {
    pub fn lookup(token: &Token) -> Option<Self> {
        let op = match token.upper().as_str() {
            "SUM"        => Self::Sum,
            "DIFFERENCE" => Self::Difference,
            "PRODUCT"    => Self::Product,
            "QUOTIENT"   => Self::Quotient,
            "REMAINDER"  => Self::Remainder,
            "MIN"        => Self::Min,
            "MAX"        => Self::Max,
            "POWER"      => Self::Power,
            "LESS"       => Self::Less,
            "GREATER"    => Self::Greater,
            "EQUAL"      => Self::Equal,
            "NOTEQUAL"   => Self::NotEqual,
            "ABS"        => Self::Abs,
            "NEG"        => Self::Neg,
            "RANDOM"     => Self::Random,
            "PI"         => Self::Pi,
            "E"          => Self::E,
            _            => return None,
        };
        Some(op)
    }

    /// Number of operand expressions the operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Self::Pi | Self::E => 0,
            Self::Abs | Self::Neg | Self::Random => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_ignores_case() {
        let t = Token::new("Forward");
        assert!(t.is("FORWARD"));
        assert_eq!(t.text(), "Forward");
        assert_eq!(Command::lookup(&t), Some(Command::Forward));
        assert_eq!(Command::lookup(&Token::new("fd")), Some(Command::Forward));
        assert_eq!(Command::lookup(&Token::new("square")), None);
    }

    #[test]
    fn variable_and_symbol_names() {
        assert_eq!(Token::new(":size").variable_name(), Some("SIZE".into()));
        assert_eq!(Token::new("size").variable_name(), None);
        assert_eq!(Token::new("\"size").symbol_name(), "SIZE");
        assert_eq!(Token::new(":size").symbol_name(), "SIZE");
        assert_eq!(Token::new("size").symbol_name(), "SIZE");
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(Token::new("42").as_number(), Some(42.0));
        assert_eq!(Token::new("-2.5").as_number(), Some(-2.5));
        assert_eq!(Token::new(".5").as_number(), Some(0.5));
        assert_eq!(Token::new("inf").as_number(), None);
        assert_eq!(Token::new("NaN").as_number(), None);
        assert_eq!(Token::new("12abc").as_number(), None);
    }

    #[test]
    fn operator_arity() {
        assert_eq!(Operator::lookup(&Token::new("sum")).map(Operator::arity), Some(2));
        assert_eq!(Operator::lookup(&Token::new("Random")).map(Operator::arity), Some(1));
        assert_eq!(Operator::lookup(&Token::new("pi")).map(Operator::arity), Some(0));
    }
}
