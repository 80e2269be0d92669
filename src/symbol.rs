//! Typed indices for the two symbol spaces of a grammar, and the tagged
//! symbol union that appears in productions.

/// A rule (nonterminal) index. Rule indices are dense and zero-based.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct RuleIdx(u32);

/// A token (terminal) index. Token indices are dense and zero-based.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct TokenIdx(u32);

/// One symbol in a production.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// An atomic token of the grammar's alphabet.
    Terminal(TokenIdx),
    /// A reference to a rule of the grammar.
    Nonterminal(RuleIdx),
}

impl RuleIdx {
    /// Converts the index to `usize`.
    pub fn usize(&self) -> usize {
        self.0 as usize
    }
}

impl TokenIdx {
    /// Converts the index to `usize`.
    pub fn usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for RuleIdx {
    fn from(id: usize) -> Self {
        RuleIdx(id as u32)
    }
}

impl From<usize> for TokenIdx {
    fn from(id: usize) -> Self {
        TokenIdx(id as u32)
    }
}

impl From<RuleIdx> for Symbol {
    fn from(rule: RuleIdx) -> Self {
        Symbol::Nonterminal(rule)
    }
}

impl From<TokenIdx> for Symbol {
    fn from(token: TokenIdx) -> Self {
        Symbol::Terminal(token)
    }
}
