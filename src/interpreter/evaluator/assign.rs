use crate::{
    ast::Expr,
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
    /// Evaluates an assignment expression.
    ///
    /// The left side must be an identifier or an index expression; the
    /// assigned value is the expression's result either way.
    ///
    /// - Identifier: the name must already be bound somewhere on the scope
    ///   chain, and the update happens in the scope that owns the binding.
    /// - Index: arrays take an in-bounds integer index, hashes a string key
    ///   (inserting when absent); the container mutates in place.
    pub(crate) fn eval_assignment(&mut self,
                                  target: &Expr,
                                  value: &Expr,
                                  scope: ScopeId)
                                  -> EvalResult<Value> {
        let value = bubble!(self.eval(value, scope)?);
        match target {
            Expr::Variable { name } => {
                if self.env.assign(scope, name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndefinedAssignment { name: name.clone(), })
                }
            },
            Expr::Index { operand, index } => self.eval_index_assignment(operand, index, value, scope),
            _ => Err(RuntimeError::InvalidAssignmentTarget),
        }
    }

    fn eval_index_assignment(&mut self,
                             operand: &Expr,
                             index: &Expr,
                             value: Value,
                             scope: ScopeId)
                             -> EvalResult<Value> {
        let operand = bubble!(self.eval(operand, scope)?);
        let index = bubble!(self.eval(index, scope)?);
        match operand {
            Value::Array(elements) => {
                let position = match index {
                    Value::Integer(position) => position,
                    other => return Err(RuntimeError::BadArrayIndex { got: other.type_name(), }),
                };
                let mut elements = elements.borrow_mut();
                let slot = usize::try_from(position)
                    .ok()
                    .and_then(|position| elements.get_mut(position))
                    .ok_or(RuntimeError::IndexOutOfBounds)?;
                *slot = value.clone();
                Ok(value)
            },
            Value::HashMap(pairs) => {
                let key = match index {
                    Value::Str(key) => key,
                    other => return Err(RuntimeError::BadHashKey { got: other.type_name(), }),
                };
                pairs.borrow_mut().insert(key, value.clone());
                Ok(value)
            },
            other => Err(RuntimeError::NotIndexable { got: other.type_name(), }),
        }
    }
}
