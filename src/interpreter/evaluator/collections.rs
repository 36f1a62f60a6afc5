use std::{cell::RefCell, collections::HashMap, rc::Rc};

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
    /// Evaluates an array literal.
    ///
    /// Elements evaluate left to right; the first error aborts the literal.
    pub(crate) fn eval_array_literal(&mut self,
                                     elements: &[Expr],
                                     scope: ScopeId)
                                     -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(bubble!(self.eval(element, scope)?));
        }
        Ok(Value::array(values))
    }

    /// Evaluates a hash literal.
    ///
    /// Pairs evaluate in source order, key before value; keys must evaluate
    /// to strings, and a repeated key keeps the later entry.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expr, Expr)],
                                    scope: ScopeId)
                                    -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            let key = match bubble!(self.eval(key, scope)?) {
                Value::Str(key) => key,
                _ => return Err(RuntimeError::HashKeyNotString),
            };
            let value = bubble!(self.eval(value, scope)?);
            map.insert(key, value);
        }
        Ok(Value::HashMap(Rc::new(RefCell::new(map))))
    }

    /// Evaluates an indexing expression.
    ///
    /// Arrays take integer indexes and fail outside `0..len`; hashes take
    /// string keys and yield `khali_muji` for a missing key.
    pub(crate) fn eval_index(&mut self,
                             operand: &Expr,
                             index: &Expr,
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
                usize::try_from(position)
                    .ok()
                    .and_then(|position| elements.borrow().get(position).cloned())
                    .ok_or(RuntimeError::IndexOutOfBounds)
            },
            Value::HashMap(pairs) => {
                let key = match index {
                    Value::Str(key) => key,
                    other => return Err(RuntimeError::BadHashKey { got: other.type_name(), }),
                };
                Ok(pairs.borrow().get(&key).cloned().unwrap_or(Value::Null))
            },
            other => Err(RuntimeError::NotIndexable { got: other.type_name(), }),
        }
    }
}
