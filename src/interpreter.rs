/// The bindings module holds the variable table used during evaluation.
///
/// A `Bindings` table maps single letters to truth values. The default table
/// binds the literals `T`/`t` to true and `F`/`f` to false; the caller adds
/// its own letters before evaluating and only lends the table out afterwards.
///
/// # Responsibilities
/// - Stores and looks up variable values, defaulting unbound letters to
///   false.
/// - Parses `name=value` bindings supplied on the command line.
pub mod bindings;
/// The converter module turns infix expressions into postfix form.
///
/// It runs a shunting-yard pass over the lexer's tokens, resolving operator
/// precedence and parentheses.
///
/// # Responsibilities
/// - Emits operands immediately and operators once their precedence allows.
/// - Reports unbalanced parentheses instead of silently dropping them.
pub mod converter;
/// The display module renders an expression as an indented outline.
///
/// The display tree is derived from the evaluated AST and rendered lazily,
/// one line per node, with the `|-- ` marker showing each node's depth.
pub mod display;
/// The evaluator module computes the truth value of an AST.
///
/// It also provides the fully parenthesized infix rendering of an expression
/// through `Display`.
pub mod evaluator;
/// The lexer module splits source text into single-character tokens.
///
/// # Responsibilities
/// - Recognises letters, the four operators and parentheses.
/// - Drops any other character, whitespace included.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from postfix.
///
/// # Responsibilities
/// - Applies each operator to the right number of operands.
/// - Reports operators without operands, stray symbols and leftover
///   operands.
pub mod parser;
