use crate::{
    ast::{Expr, InfixOperator},
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
    /// Evaluates a non-assignment infix expression.
    ///
    /// Both operands evaluate left to right before the operator is applied;
    /// an error in either short-circuits the operation.
    pub(crate) fn eval_infix(&mut self,
                             left: &Expr,
                             operator: InfixOperator,
                             right: &Expr,
                             scope: ScopeId)
                             -> EvalResult<Value> {
        let left = bubble!(self.eval(left, scope)?);
        let right = bubble!(self.eval(right, scope)?);
        eval_binary(&left, operator, &right)
    }
}

/// Applies an infix operator to two already-evaluated values.
pub(crate) fn eval_binary(left: &Value,
                          operator: InfixOperator,
                          right: &Value)
                          -> EvalResult<Value> {
    match operator {
        InfixOperator::Add
        | InfixOperator::Sub
        | InfixOperator::Mul
        | InfixOperator::Div
        | InfixOperator::Mod => eval_arithmetic(left, operator, right),
        InfixOperator::Equal => Ok(Value::Bool(strict_eq(left, right))),
        InfixOperator::NotEqual => Ok(Value::Bool(!strict_eq(left, right))),
        InfixOperator::Less
        | InfixOperator::Greater
        | InfixOperator::LessEqual
        | InfixOperator::GreaterEqual => eval_comparison(left, operator, right),
        // `=` never reaches here; the dispatcher routes it to assignment.
        InfixOperator::Assign => Err(unknown_operator(left, operator, right)),
    }
}

/// Arithmetic over numbers, plus `+` as concatenation for two strings or
/// two arrays.
///
/// Two integers stay in integer arithmetic (checked, with zero-divisor
/// errors); as soon as one side is a float, both sides are promoted and the
/// operation happens on `f64`.
fn eval_arithmetic(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Str(l), Value::Str(r)) if operator == InfixOperator::Add => {
            Ok(Value::Str(format!("{l}{r}")))
        },
        (Value::Array(l), Value::Array(r)) if operator == InfixOperator::Add => {
            let mut elements = l.borrow().clone();
            elements.extend(r.borrow().iter().cloned());
            Ok(Value::array(elements))
        },
        (Value::Integer(l), Value::Integer(r)) => integer_arithmetic(*l, operator, *r),
        _ => match (as_numeric(left), as_numeric(right)) {
            (Some(l), Some(r)) => float_arithmetic(l, operator, r)
                .map(Value::Float)
                .ok_or_else(|| unknown_operator(left, operator, right)),
            _ => Err(unknown_operator(left, operator, right)),
        },
    }
}

fn integer_arithmetic(left: i64, operator: InfixOperator, right: i64) -> EvalResult<Value> {
    let result = match operator {
        InfixOperator::Add => left.checked_add(right),
        InfixOperator::Sub => left.checked_sub(right),
        InfixOperator::Mul => left.checked_mul(right),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
        InfixOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_rem(right)
        },
        _ => None,
    };
    result.map(Value::Integer).ok_or(RuntimeError::IntegerOverflow)
}

fn float_arithmetic(left: f64, operator: InfixOperator, right: f64) -> Option<f64> {
    match operator {
        InfixOperator::Add => Some(left + right),
        InfixOperator::Sub => Some(left - right),
        InfixOperator::Mul => Some(left * right),
        InfixOperator::Div => Some(left / right),
        InfixOperator::Mod => Some(left % right),
        _ => None,
    }
}

/// Ordering comparisons, defined only for numeric pairs.
///
/// Mixed integer/float pairs compare after promotion. The error names the
/// left operand's type.
fn eval_comparison(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult<Value> {
    let (l, r) = match (as_numeric(left), as_numeric(right)) {
        (Some(l), Some(r)) => (l, r),
        _ => {
            return Err(RuntimeError::NotComparable { operator: operator.symbol(),
                                                     operand:  left.type_name(), });
        },
    };
    let result = match (left, right, operator) {
        (Value::Integer(a), Value::Integer(b), InfixOperator::Less) => a < b,
        (Value::Integer(a), Value::Integer(b), InfixOperator::Greater) => a > b,
        (Value::Integer(a), Value::Integer(b), InfixOperator::LessEqual) => a <= b,
        (Value::Integer(a), Value::Integer(b), InfixOperator::GreaterEqual) => a >= b,
        (_, _, InfixOperator::Less) => l < r,
        (_, _, InfixOperator::Greater) => l > r,
        (_, _, InfixOperator::LessEqual) => l <= r,
        _ => l >= r,
    };
    Ok(Value::Bool(result))
}

/// Equality, defined for same-typed integers, floats and booleans.
///
/// Every other combination (including an integer against a float) is
/// simply unequal, never an error.
fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => l == r,
        (Value::Float(l), Value::Float(r)) => l == r,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        _ => false,
    }
}

fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(value) => Some(*value as f64),
        Value::Float(value) => Some(*value),
        _ => None,
    }
}

/// Picks between the two operator failure messages: operands of different
/// types are a type mismatch, same-typed operands an unknown operator.
fn unknown_operator(left: &Value, operator: InfixOperator, right: &Value) -> RuntimeError {
    if left.type_name() == right.type_name() {
        RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                             operator: operator.symbol(),
                                             right:    right.type_name(), }
    } else {
        RuntimeError::TypeMismatch { left:     left.type_name(),
                                     operator: operator.symbol(),
                                     right:    right.type_name(), }
    }
}
