//! Grammar views. Set computation consumes a narrow read-only surface,
//! so that front ends may provide their own storage; an owned `Grammar`
//! with a rule builder is provided for tests and programmatic use.

use std::convert::AsRef;
use std::rc::Rc;

use crate::symbol::{RuleIdx, Symbol, TokenIdx};

/// One ordered production alternative for a rule. An empty production
/// derives the empty string.
pub type Production = Rc<[Symbol]>;

/// Read-only view of a validated grammar.
///
/// Indices handed out by a view are dense: every rule index in
/// `0..rule_count()` and every token index in `0..token_count()` is
/// valid, and no other index is. A symbol outside those ranges in a
/// production is a contract violation.
pub trait GrammarView {
    /// Returns the number of rules in the grammar.
    fn rule_count(&self) -> usize;

    /// Returns the number of tokens in the grammar's alphabet.
    fn token_count(&self) -> usize;

    /// Returns the ordered list of productions of the given rule.
    fn productions_of(&self, rule: RuleIdx) -> &[Production];
}

/// An owned grammar over dense rule and token index spaces.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    token_count: usize,
    productions: Vec<Vec<Production>>,
}

impl Grammar {
    /// Creates an empty grammar with no rules and no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares rules and returns their indices.
    pub fn rules<const N: usize>(&mut self) -> [RuleIdx; N] {
        [(); N].map(|()| self.next_rule())
    }

    /// Declares tokens and returns their indices.
    pub fn tokens<const N: usize>(&mut self) -> [TokenIdx; N] {
        [(); N].map(|()| self.next_token())
    }

    /// Declares a new rule. The rule starts out with no productions.
    pub fn next_rule(&mut self) -> RuleIdx {
        let rule = RuleIdx::from(self.productions.len());
        self.productions.push(vec![]);
        rule
    }

    /// Declares a new token.
    pub fn next_token(&mut self) -> TokenIdx {
        let token = TokenIdx::from(self.token_count);
        self.token_count += 1;
        token
    }

    /// Starts building productions for the given rule.
    pub fn rule(&mut self, lhs: RuleIdx) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Adds one production alternative to the given rule.
    ///
    /// # Panics
    ///
    /// Panics if `lhs` or any symbol of the production is out of the
    /// declared range.
    pub fn add_production(&mut self, lhs: RuleIdx, symbols: impl AsRef<[Symbol]>) {
        let symbols = symbols.as_ref();
        self.check_rule(lhs);
        for &sym in symbols {
            match sym {
                Symbol::Terminal(token) => {
                    assert!(
                        token.usize() < self.token_count,
                        "token index {} out of range for a grammar with {} tokens",
                        token.usize(),
                        self.token_count
                    );
                }
                Symbol::Nonterminal(rule) => self.check_rule(rule),
            }
        }
        self.productions[lhs.usize()].push(symbols.into());
    }

    fn check_rule(&self, rule: RuleIdx) {
        assert!(
            rule.usize() < self.productions.len(),
            "rule index {} out of range for a grammar with {} rules",
            rule.usize(),
            self.productions.len()
        );
    }
}

impl GrammarView for Grammar {
    fn rule_count(&self) -> usize {
        self.productions.len()
    }

    fn token_count(&self) -> usize {
        self.token_count
    }

    fn productions_of(&self, rule: RuleIdx) -> &[Production] {
        self.check_rule(rule);
        &self.productions[rule.usize()]
    }
}

/// The rule builder. Productions can be added with the builder pattern.
pub struct RuleBuilder<'a> {
    lhs: Option<RuleIdx>,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar) -> Self {
        RuleBuilder { lhs: None, grammar }
    }

    /// Starts building productions for a new LHS.
    pub fn rule(mut self, lhs: RuleIdx) -> Self {
        self.lhs = Some(lhs);
        self
    }

    /// Adds a production alternative for the current LHS. An empty
    /// sequence adds an epsilon production.
    pub fn rhs<S>(self, symbols: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        let lhs = self.lhs.expect("rule builder has no LHS");
        self.grammar.add_production(lhs, symbols);
        self
    }
}
