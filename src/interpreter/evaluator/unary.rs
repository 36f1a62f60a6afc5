use crate::{
    ast::{Expr, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{bubble, Context, EvalResult},
            environment::ScopeId,
        },
        value::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to its operand.
    ///
    /// `!x` negates truthiness and always succeeds. `-x` negates integers
    /// and floats; any other operand type is an unknown-operator error, as
    /// is negating `i64::MIN`.
    pub(crate) fn eval_prefix(&mut self,
                              operator: PrefixOperator,
                              right: &Expr,
                              scope: ScopeId)
                              -> EvalResult<Value> {
        let right = bubble!(self.eval(right, scope)?);
        match operator {
            PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
            PrefixOperator::Negate => match right {
                Value::Integer(value) => value.checked_neg()
                                              .map(Value::Integer)
                                              .ok_or(RuntimeError::IntegerOverflow),
                Value::Float(value) => Ok(Value::Float(-value)),
                other => Err(RuntimeError::UnknownPrefixOperator { operator: operator.symbol(),
                                                                   operand:  other.type_name(), }),
            },
        }
    }
}
