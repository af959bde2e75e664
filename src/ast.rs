/// Represents a binary arithmetic operator.
///
/// These are the four operators of the language. Their semantics over the
/// value kinds (integer arithmetic, string concatenation, string repetition)
/// live in the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`): integer sum or string concatenation.
    Add,
    /// Subtraction (`-`): integers only.
    Sub,
    /// Multiplication (`*`): integer product or string repetition.
    Mul,
    /// Division (`/`): truncating integer quotient.
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A node of the program tree.
///
/// `ParseTree` covers every construct of the language: statement sequencing,
/// conditionals, loops, assignment, output, arithmetic, literals and variable
/// references. Each variant owns its children exclusively, so a tree is a
/// strict hierarchy with no sharing; dropping a node drops its whole subtree.
///
/// Every variant records the source line it was parsed from, used by runtime
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTree {
    /// A statement followed by the rest of the program.
    ///
    /// Programs and statement bodies are right-nested chains of this variant:
    /// `first` is the statement to run now, `rest` the remainder (if any).
    StmtList {
        /// The first statement of the sequence.
        first: Box<Self>,
        /// The remaining statements, already chained.
        rest:  Option<Box<Self>>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional statement; the body runs only when the condition is a
    /// nonzero integer.
    If {
        /// The condition expression.
        condition: Box<Self>,
        /// The body statements.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A variable assignment binding a name to an expression's value.
    Set {
        /// The name of the variable.
        name: String,
        /// The value expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An output statement writing an expression's value to the output
    /// stream.
    Print {
        /// The expression to print.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A loop; the body runs repeatedly while the condition is a nonzero
    /// integer.
    Loop {
        /// The condition expression, re-evaluated before every iteration.
        condition: Box<Self>,
        /// The body statements.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An integer literal.
    IntConst {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StrConst {
        /// The constant text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable reference by name.
    Ident {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl ParseTree {
    /// Gets the source line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use setlang::ast::ParseTree;
    ///
    /// let node = ParseTree::Ident { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::StmtList { line, .. }
            | Self::If { line, .. }
            | Self::Set { line, .. }
            | Self::Print { line, .. }
            | Self::Loop { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::IntConst { line, .. }
            | Self::StrConst { line, .. }
            | Self::Ident { line, .. } => *line,
        }
    }

    /// Returns the (left, right) children of this node.
    ///
    /// The pairing follows the shape of each construct: a statement list is
    /// (first, rest), control flow is (condition, body), assignment and
    /// output hold their expression on the left, operators hold their
    /// operands, and literals and identifiers are leaves.
    ///
    /// The structural queries below are all defined in terms of this
    /// accessor.
    #[must_use]
    pub fn children(&self) -> (Option<&Self>, Option<&Self>) {
        match self {
            Self::StmtList { first, rest, .. } => (Some(first), rest.as_deref()),
            Self::If { condition, body, .. } | Self::Loop { condition, body, .. } => {
                (Some(condition), Some(body))
            },
            Self::Set { expr, .. } | Self::Print { expr, .. } => (Some(expr), None),
            Self::BinaryOp { left, right, .. } => (Some(left), Some(right)),
            Self::IntConst { .. } | Self::StrConst { .. } | Self::Ident { .. } => (None, None),
        }
    }

    /// Counts the nodes of the subtree rooted at `self`, including `self`.
    ///
    /// ## Example
    /// ```
    /// use setlang::ast::{BinaryOperator, ParseTree};
    ///
    /// let tree = ParseTree::BinaryOp { op:    BinaryOperator::Add,
    ///                                  left:  Box::new(ParseTree::IntConst { value: 1,
    ///                                                                        line:  1, }),
    ///                                  right: Box::new(ParseTree::IntConst { value: 2,
    ///                                                                        line:  1, }),
    ///                                  line:  1, };
    ///
    /// assert_eq!(tree.node_count(), 3);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let (left, right) = self.children();
        1 + left.map_or(0, Self::node_count) + right.map_or(0, Self::node_count)
    }

    /// Counts the leaves of the subtree rooted at `self`.
    ///
    /// A leaf is a node with no children at all.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            (None, None) => 1,
            (left, right) => left.map_or(0, Self::leaf_count) + right.map_or(0, Self::leaf_count),
        }
    }

    /// Counts the identifier-reference nodes in the subtree rooted at `self`.
    #[must_use]
    pub fn ident_count(&self) -> usize {
        let (left, right) = self.children();
        usize::from(matches!(self, Self::Ident { .. }))
        + left.map_or(0, Self::ident_count)
        + right.map_or(0, Self::ident_count)
    }

    /// Counts the string-literal nodes in the subtree rooted at `self`.
    #[must_use]
    pub fn string_count(&self) -> usize {
        let (left, right) = self.children();
        usize::from(matches!(self, Self::StrConst { .. }))
        + left.map_or(0, Self::string_count)
        + right.map_or(0, Self::string_count)
    }

    /// Counts the arithmetic-operator nodes in the subtree rooted at `self`.
    #[must_use]
    pub fn op_count(&self) -> usize {
        let (left, right) = self.children();
        usize::from(matches!(self, Self::BinaryOp { .. }))
        + left.map_or(0, Self::op_count)
        + right.map_or(0, Self::op_count)
    }

    /// Computes the maximum depth of the subtree rooted at `self`.
    ///
    /// A single node has depth 1; a missing child contributes 0.
    ///
    /// ## Example
    /// ```
    /// use setlang::ast::{BinaryOperator, ParseTree};
    ///
    /// let tree = ParseTree::BinaryOp { op:    BinaryOperator::Mul,
    ///                                  left:  Box::new(ParseTree::Ident { name: "y".to_string(),
    ///                                                                     line: 1, }),
    ///                                  right: Box::new(ParseTree::IntConst { value: 3,
    ///                                                                        line:  1, }),
    ///                                  line:  1, };
    ///
    /// assert_eq!(tree.max_depth(), 2);
    /// ```
    #[must_use]
    pub fn max_depth(&self) -> usize {
        let (left, right) = self.children();
        let left_depth = left.map_or(0, Self::max_depth);
        let right_depth = right.map_or(0, Self::max_depth);
        left_depth.max(right_depth) + 1
    }
}
