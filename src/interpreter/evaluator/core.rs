use crate::{
    ast::{Block, Expr, InfixOperator, LiteralValue, Program, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            environment::{Environment, ScopeId},
            function::builtin,
        },
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator gives runtime
/// errors their short-circuit-to-the-top behavior.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Hands a `patha_muji` sentinel straight back to the caller.
///
/// Block-bearing subexpressions (conditionals and loops) can produce a
/// [`Value::Return`]. Wherever a subresult would otherwise be consumed,
/// this macro propagates the sentinel instead so it reaches the enclosing
/// call boundary intact.
macro_rules! bubble {
    ($value:expr) => {{
        let value = $value;
        if matches!(value, $crate::interpreter::value::Value::Return(_)) {
            return Ok(value);
        }
        value
    }};
}
pub(crate) use bubble;

/// Stores the runtime evaluation context.
///
/// `Context` owns the scope arena and is created once per session; the
/// REPL reuses one across lines so bindings persist. All evaluation methods
/// thread the current [`ScopeId`] through the walk.
///
/// # Example
/// ```
/// use lekhmuji::interpreter::{evaluator::core::Context, value::Value};
///
/// let program = lekhmuji::parse("thoos_muji x = 2; x * 21;").unwrap();
/// let mut context = Context::new();
///
/// assert_eq!(context.eval_program(&program), Ok(Value::Integer(42)));
/// ```
#[derive(Debug, Default)]
pub struct Context {
    pub(crate) env: Environment,
}

impl Context {
    /// Creates a fresh context holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new(), }
    }

    /// Evaluates a parsed program in the global scope.
    ///
    /// Statements run in order. A top-level `patha_muji` stops execution
    /// and the program evaluates to the unwrapped inner value; otherwise
    /// the program's value is the last statement's value, or `khali_muji`
    /// for an empty program.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` any statement raises.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let scope = self.env.global();
        let mut result = Value::Null;
        for statement in &program.statements {
            match self.eval_statement(statement, scope)? {
                Value::Return(inner) => return Ok(*inner),
                value => result = value,
            }
        }
        Ok(result)
    }

    /// Evaluates the statements of a block in the given scope.
    ///
    /// Unlike [`Context::eval_program`], a `patha_muji` sentinel passes
    /// through unchanged so enclosing callers can see it.
    pub(crate) fn eval_block(&mut self, block: &Block, scope: ScopeId) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in &block.statements {
            result = self.eval_statement(statement, scope)?;
            if matches!(result, Value::Return(_)) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    pub(crate) fn eval_statement(&mut self, statement: &Stmt, scope: ScopeId) -> EvalResult<Value> {
        match statement {
            Stmt::VariableDeclaration { name, value } => {
                let value = bubble!(self.eval(value, scope)?);
                self.env.define(scope, name, value.clone());
                Ok(value)
            },
            Stmt::Return { value } => {
                let value = bubble!(self.eval(value, scope)?);
                Ok(Value::Return(Box::new(value)))
            },
            Stmt::Expression { expr } => self.eval(expr, scope),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the evaluator's central dispatch: each expression variant is
    /// handed to its handler with the current scope handle.
    pub(crate) fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Self::eval_literal(value)),
            Expr::Variable { name } => self.eval_variable(name, scope),
            Expr::Prefix { operator, right } => self.eval_prefix(*operator, right, scope),
            Expr::Infix { left, operator, right } => {
                if *operator == InfixOperator::Assign {
                    self.eval_assignment(left, right, scope)
                } else {
                    self.eval_infix(left, *operator, right, scope)
                }
            },
            Expr::If { condition, consequent, alternative } => {
                self.eval_if(condition, consequent, alternative.as_ref(), scope)
            },
            Expr::While { condition, body } => self.eval_while(condition, body, scope),
            Expr::For { init, condition, update, body } => {
                self.eval_for(init, condition, update, body, scope)
            },
            Expr::Array { elements } => self.eval_array_literal(elements, scope),
            Expr::Hash { pairs } => self.eval_hash_literal(pairs, scope),
            Expr::Index { operand, index } => self.eval_index(operand, index, scope),
            Expr::Function { parameters, body } => {
                Ok(self.eval_function_literal(parameters, body, scope))
            },
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments, scope),
        }
    }

    fn eval_literal(literal: &LiteralValue) -> Value {
        match literal {
            LiteralValue::Integer(value) => Value::Integer(*value),
            LiteralValue::Float(value) => Value::Float(*value),
            LiteralValue::Bool(value) => Value::Bool(*value),
            LiteralValue::Str(value) => Value::Str(value.clone()),
        }
    }

    /// Resolves an identifier.
    ///
    /// Lookup order: the scope chain, then the builtin table. Builtins are
    /// only reachable for names no scope shadows.
    fn eval_variable(&self, name: &str, scope: ScopeId) -> EvalResult<Value> {
        if let Some(value) = self.env.get(scope, name) {
            return Ok(value);
        }
        if let Some(builtin) = builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::IdentifierNotFound { name: name.to_string(), })
    }

    /// Evaluates a conditional expression.
    ///
    /// Both branches run in the current scope. Without an alternative, a
    /// falsy condition yields `khali_muji`.
    fn eval_if(&mut self,
               condition: &Expr,
               consequent: &Block,
               alternative: Option<&Block>,
               scope: ScopeId)
               -> EvalResult<Value> {
        let condition = bubble!(self.eval(condition, scope)?);
        if condition.is_truthy() {
            self.eval_block(consequent, scope)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, scope)
        } else {
            Ok(Value::Null)
        }
    }
}
