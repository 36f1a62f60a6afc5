use crate::{
    ast::{Block, Expr, Stmt},
    interpreter::{
        evaluator::{
            core::{bubble, Context, EvalResult},
            environment::ScopeId,
        },
        value::Value,
    },
};

impl Context {
    /// Evaluates a `jaba_samma_muji` loop.
    ///
    /// The condition evaluates in the current scope before every iteration;
    /// each iteration's body runs in a fresh child scope, so declarations
    /// inside the body do not carry over. The loop's value is the last body
    /// value, or `khali_muji` when the body never ran. A `patha_muji` from
    /// the body stops the loop and propagates.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Block,
                             scope: ScopeId)
                             -> EvalResult<Value> {
        let mut result = Value::Null;
        loop {
            let condition = bubble!(self.eval(condition, scope)?);
            if !condition.is_truthy() {
                break;
            }
            let iteration = self.env.enclosed(scope);
            result = self.eval_block(body, iteration)?;
            if matches!(result, Value::Return(_)) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    /// Evaluates a `ghuma_muji` loop.
    ///
    /// The init statement runs once in the *enclosing* scope, so a loop
    /// variable declared there stays visible after the loop. Then, per
    /// round: the condition statement decides truthiness, the body runs in
    /// a fresh child scope, and the update expression runs back in the
    /// enclosing scope. Normal exit yields `khali_muji`.
    pub(crate) fn eval_for(&mut self,
                           init: &Stmt,
                           condition: &Stmt,
                           update: &Expr,
                           body: &Block,
                           scope: ScopeId)
                           -> EvalResult<Value> {
        let _ = bubble!(self.eval_statement(init, scope)?);
        loop {
            let condition = bubble!(self.eval_statement(condition, scope)?);
            if !condition.is_truthy() {
                break;
            }
            let iteration = self.env.enclosed(scope);
            let result = self.eval_block(body, iteration)?;
            if matches!(result, Value::Return(_)) {
                return Ok(result);
            }
            let _ = bubble!(self.eval(update, scope)?);
        }
        Ok(Value::Null)
    }
}
