/// Assignment to identifiers and index targets.
pub mod assign;
/// Arithmetic, comparison and equality operators.
pub mod binary;
/// Array and hash literals, and index reads.
pub mod collections;
/// The evaluation context and statement/expression dispatch.
pub mod core;
/// The scope arena and its handles.
pub mod environment;
/// Function literals, calls, and the builtin table.
pub mod function;
/// `jaba_samma_muji` and `ghuma_muji` loops.
pub mod loops;
/// The `!` and `-` prefix operators.
pub mod unary;

pub use self::core::{Context, EvalResult};
