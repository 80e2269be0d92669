//! FIRST sets.

use bit_matrix::BitMatrix;
use bit_vec::BitVec;
use log::trace;

use crate::grammar::GrammarView;
use crate::symbol::{RuleIdx, Symbol, TokenIdx};

/// The FIRST set of a string of symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSet {
    /// Tokens that can begin a derivation of the string, in index order.
    pub tokens: Vec<TokenIdx>,
    /// Whether the string derives the empty string.
    pub has_empty: bool,
}

/// FIRST sets and nullability, one entry per rule.
///
/// Built once from a grammar view by iterating to a fixed point, then
/// frozen. The table may be shared freely between readers afterwards;
/// no mutation surface exists.
pub struct FirstSets {
    firsts: BitMatrix,
    nullable: BitVec,
    token_count: usize,
}

impl FirstSets {
    /// Computes all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, t), in which rule N is
    /// related to token t if the grammar has a production of the form
    /// `N ⸬= α t β` or `N ⸬= α B β` with t in FIRST(B), where α is a
    /// nullable string of symbols.
    ///
    /// We compute the closure of this relation, along with the set of
    /// rules that derive the empty string. Both only ever grow, so the
    /// iteration reaches a fixed point on every input, cyclic and
    /// left-recursive grammars included.
    pub fn new<G>(grammar: &G) -> Self
    where
        G: GrammarView,
    {
        let mut this = FirstSets {
            firsts: BitMatrix::new(grammar.rule_count(), grammar.token_count()),
            nullable: BitVec::from_elem(grammar.rule_count(), false),
            token_count: grammar.token_count(),
        };

        this.collect_from(grammar);
        this
    }

    /// Returns true iff some derivation from `rule` begins with `token`.
    pub fn is_set(&self, rule: RuleIdx, token: TokenIdx) -> bool {
        self.check_rule(rule);
        self.check_token(token);
        self.firsts[(rule.usize(), token.usize())]
    }

    /// Returns true iff `rule` derives the empty string.
    pub fn is_epsilon_set(&self, rule: RuleIdx) -> bool {
        self.check_rule(rule);
        self.nullable[rule.usize()]
    }

    /// Iterates over the FIRST set of the given rule, in index order.
    pub fn tokens_of(&self, rule: RuleIdx) -> impl Iterator<Item = TokenIdx> + '_ {
        self.check_rule(rule);
        self.firsts
            .iter_row(rule.usize())
            .enumerate()
            .filter_map(|(id, present)| if present { Some(TokenIdx::from(id)) } else { None })
    }

    /// Calculates the FIRST set of a string of symbols.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet {
            tokens: vec![],
            has_empty: false,
        };
        self.first_set_collect(&mut result, string);
        result.tokens.sort_unstable();
        result.tokens.dedup();
        result
    }

    /// Returns the number of rules the table covers.
    pub fn rule_count(&self) -> usize {
        self.nullable.len()
    }

    /// Returns the number of tokens the table covers.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    fn collect_from<G>(&mut self, grammar: &G)
    where
        G: GrammarView,
    {
        let mut lookahead = FirstSet {
            tokens: vec![],
            has_empty: false,
        };
        let mut pass = 0u64;
        let mut changed = true;
        while changed {
            changed = false;
            for id in 0..grammar.rule_count() {
                let lhs = RuleIdx::from(id);
                for production in grammar.productions_of(lhs) {
                    self.first_set_collect(&mut lookahead, production);
                    changed |= self.merge(lhs, &lookahead);
                    lookahead.tokens.clear();
                    lookahead.has_empty = false;
                }
            }
            pass += 1;
            trace!(
                "first set pass {}: {}",
                pass,
                if changed { "changed" } else { "fixed point" }
            );
        }
    }

    /// Computes the FIRST set of one symbol string into `lookahead`,
    /// scanning left to right. A terminal ends the scan; so does a
    /// nonterminal that cannot vanish. Only a string scanned to the end
    /// derives the empty string.
    fn first_set_collect(&self, lookahead: &mut FirstSet, string: &[Symbol]) {
        for &sym in string {
            match sym {
                Symbol::Terminal(token) => {
                    self.check_token(token);
                    lookahead.tokens.push(token);
                    return;
                }
                Symbol::Nonterminal(rule) => {
                    self.check_rule(rule);
                    lookahead.tokens.extend(self.tokens_of(rule));
                    if !self.nullable[rule.usize()] {
                        return;
                    }
                }
            }
        }
        lookahead.has_empty = true;
    }

    /// Adds the collected lookahead to the LHS entry. Returns whether
    /// the entry grew.
    fn merge(&mut self, lhs: RuleIdx, lookahead: &FirstSet) -> bool {
        let mut changed = false;
        for &token in &lookahead.tokens {
            if !self.firsts[(lhs.usize(), token.usize())] {
                self.firsts.set(lhs.usize(), token.usize(), true);
                changed = true;
            }
        }
        if lookahead.has_empty && !self.nullable[lhs.usize()] {
            self.nullable.set(lhs.usize(), true);
            changed = true;
        }
        changed
    }

    fn check_rule(&self, rule: RuleIdx) {
        assert!(
            rule.usize() < self.nullable.len(),
            "rule index {} out of range for a table with {} rules",
            rule.usize(),
            self.nullable.len()
        );
    }

    fn check_token(&self, token: TokenIdx) {
        assert!(
            token.usize() < self.token_count,
            "token index {} out of range for a table with {} tokens",
            token.usize(),
            self.token_count
        );
    }
}
