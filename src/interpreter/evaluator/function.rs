/// Builtin function table and implementations.
///
/// Declares the native functions that are always in scope (unless
/// shadowed): `lambai_muji`, `khaad_muji`, `udaa_muji`, and `bhan_muji`.
pub mod builtin;

use std::rc::Rc;

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{bubble, Context, EvalResult},
            environment::ScopeId,
        },
        value::{Function, Value},
    },
};

impl Context {
    /// Evaluates a `kaam_gar_muji` literal into a function value.
    ///
    /// The literal's body is shared, and the current scope handle is
    /// captured: free variables in the body resolve against the scope
    /// where the literal was evaluated, not where the function is called.
    pub(crate) fn eval_function_literal(&mut self,
                                        parameters: &[String],
                                        body: &Rc<Block>,
                                        scope: ScopeId)
                                        -> Value {
        Value::Function(Rc::new(Function { parameters: parameters.to_vec(),
                                           body:       Rc::clone(body),
                                           scope, }))
    }

    /// Evaluates a call expression.
    ///
    /// The callee evaluates first (identifiers resolve through the scope
    /// chain and then the builtin table), then the arguments left to right;
    /// an error anywhere short-circuits the call.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let callee = bubble!(self.eval(callee, scope)?);
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(bubble!(self.eval(argument, scope)?));
        }
        match callee {
            Value::Function(function) => self.apply_function(&function, args),
            Value::Builtin(builtin) => builtin.apply(&args),
            other => Err(RuntimeError::NotCallable { got: other.type_name(), }),
        }
    }

    /// Applies a user-defined function to already-evaluated arguments.
    ///
    /// Parameters bind in a fresh scope enclosed by the function's captured
    /// scope. A `patha_muji` sentinel coming out of the body is unwrapped
    /// here, at the call boundary.
    fn apply_function(&mut self, function: &Function, arguments: Vec<Value>) -> EvalResult<Value> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentsLengthMismatch);
        }

        let call_scope = self.env.enclosed(function.scope);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            self.env.define(call_scope, parameter, argument);
        }

        let result = self.eval_block(&function.body, call_scope)?;
        Ok(match result {
            Value::Return(inner) => *inner,
            other => other,
        })
    }
}
