use std::{fmt, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly
/// in source code: integers, floats, booleans, and strings. Array and hash
/// literals are not `LiteralValue`s because their elements are arbitrary
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal: `sacho_muji` or `jhut_muji`.
    Bool(bool),
    /// A double-quoted string literal.
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // `{:?}` keeps a trailing `.0` so the printed form re-lexes as
            // a float literal.
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Bool(true) => write!(f, "sacho_muji"),
            Self::Bool(false) => write!(f, "jhut_muji"),
            Self::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Assignment (`=`)
    Assign,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

impl InfixOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`), defined through truthiness.
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl PrefixOperator {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A brace-delimited statement list.
///
/// Blocks never appear on their own; they are the bodies of conditionals,
/// loops, and function literals. A block does not open a scope by itself;
/// the construct that owns it decides that.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The statements inside the braces, in source order.
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers all expression forms, from literals and variables to
/// operators, control flow, collections, function literals and calls. Each
/// variant models a distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Array literal expression, e.g. `[1, 2, 3]`.
    Array {
        /// Elements of the array, in source order.
        elements: Vec<Self>,
    },
    /// Hash literal expression, e.g. `{"a" : 1}`.
    Hash {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
    /// Indexing expression, e.g. `xs[0]` or `h["key"]`.
    Index {
        /// The indexed value.
        operand: Box<Self>,
        /// The index or key.
        index:   Box<Self>,
    },
    /// A prefix operation, e.g. `!ok` or `-n`.
    Prefix {
        /// The operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix operation, e.g. `a + b` or `x = 3`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression: `yedi_muji (c) { .. } nabhae_chikne { .. }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequent:  Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// While loop: `jaba_samma_muji (c) { .. }`.
    While {
        /// The condition expression, re-evaluated before each iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Block,
    },
    /// C-style for loop: `ghuma_muji (init; cond; update) { .. }`.
    For {
        /// The initialization statement.
        init:      Box<Stmt>,
        /// The condition statement, re-evaluated before each iteration.
        condition: Box<Stmt>,
        /// The update expression, evaluated after each iteration.
        update:    Box<Self>,
        /// The loop body.
        body:      Block,
    },
    /// Function literal: `kaam_gar_muji (a, b) { .. }`.
    Function {
        /// Parameter names.
        parameters: Vec<String>,
        /// The function body, shared with the function values built from
        /// this literal.
        body:       Rc<Block>,
    },
    /// Call expression: `callee(args...)`.
    Call {
        /// The called expression.
        callee:    Box<Self>,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name } => write!(f, "{name}"),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Array { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Hash { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} : {value}")?;
                }
                write!(f, "}}")
            },
            Self::Index { operand, index } => write!(f, "({operand}[{index}])"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition, consequent, alternative } => {
                write!(f, "yedi_muji ({condition}) {consequent}")?;
                if let Some(alternative) = alternative {
                    write!(f, " nabhae_chikne {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                write!(f, "jaba_samma_muji ({condition}) {body}")
            },
            Self::For { init, condition, update, body } => {
                write!(f, "ghuma_muji ({init} {condition} {update}) {body}")
            },
            Self::Function { parameters, body } => {
                write!(f, "kaam_gar_muji(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

/// Represents a single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A variable declaration: `thoos_muji x = 5;`.
    VariableDeclaration {
        /// The declared name.
        name:  String,
        /// The initializer expression.
        value: Expr,
    },
    /// A return statement: `patha_muji x + 1;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariableDeclaration { name, value } => {
                write!(f, "thoos_muji {name} = {value};")
            },
            Self::Return { value } => write!(f, "patha_muji {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
        }
    }
}

/// A parsed program: the top-level statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
