//! Symbol tables built from a token stream.
//!
//! Three tables, each in first-appearance order with 1-based indices:
//! identifiers (keywords excluded), numeric literals, and string constants
//! (string and character literals). A repeated lexeme keeps its first index.

use rustc_hash::FxHashMap;

use cscan_ir::{Token, TokenKind};

use crate::keywords::is_keyword;

/// Distinct lexemes in first-appearance order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolList {
    entries: Vec<String>,
    index: FxHashMap<String, u32>,
}

impl SymbolList {
    /// Insert `lexeme` if new and return its 1-based index.
    pub fn intern(&mut self, lexeme: &str) -> u32 {
        if let Some(&idx) = self.index.get(lexeme) {
            return idx;
        }
        self.entries.push(lexeme.to_owned());
        let idx = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        self.index.insert(lexeme.to_owned(), idx);
        idx
    }

    /// 1-based index of `lexeme`, if present.
    pub fn get(&self, lexeme: &str) -> Option<u32> {
        self.index.get(lexeme).copied()
    }

    /// `(index, lexeme)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        (1..).zip(self.entries.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    pub identifiers: SymbolList,
    pub numbers: SymbolList,
    pub strings: SymbolList,
}

impl SymbolTable {
    pub fn build(tokens: &[Token]) -> Self {
        let mut table = SymbolTable::default();
        for token in tokens {
            let list = match token.kind {
                TokenKind::Identifier if !is_keyword(&token.lexeme) => &mut table.identifiers,
                TokenKind::IntegerLiteral | TokenKind::FloatLiteral => &mut table.numbers,
                TokenKind::StringLiteral | TokenKind::CharLiteral => &mut table.strings,
                _ => continue,
            };
            list.intern(&token.lexeme);
        }
        table
    }
}
