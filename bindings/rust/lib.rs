//! Rust bindings for the `tree-sitter-djot` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars: the
//! generated parser in `src/parser.c` is compiled by the build script and
//! linked here, so consumers can obtain a `tree_sitter::Language` handle for
//! [Djot](https://djot.net) documents. The bundled tables recognize
//! paragraphs of plain text only.
//!
//! ```
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_djot::language())
//!     .expect("Error loading Djot grammar");
//!
//! let tree = parser.parse("Hello *world*\n\n", None).unwrap();
//! assert_eq!(tree.root_node().kind(), "document");
//! ```

use tree_sitter::Language;

extern "C" {
    fn tree_sitter_djot() -> Language;
}

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    unsafe { tree_sitter_djot() }
}

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");

/// The syntax highlighting query for this grammar.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");
